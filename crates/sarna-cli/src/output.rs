use crate::error::Result;
use clap::ValueEnum;
use sarna::core::models::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::io::Write;

const TEXT_FIELD_SEPARATOR: &str = "   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One `TARGET   FLANK   RANK` line per candidate.
    #[default]
    Text,
    /// Tab-separated table with a header row and 1-based offsets.
    Tsv,
}

#[derive(Debug, Serialize)]
struct CandidateRecord<'a> {
    offset: usize,
    target: &'a str,
    flank: String,
    rank: i32,
}

impl<'a> From<&'a Candidate> for CandidateRecord<'a> {
    fn from(candidate: &'a Candidate) -> Self {
        Self {
            offset: candidate.offset + 1,
            target: &candidate.target,
            flank: candidate.flanking.to_string(),
            rank: candidate.rank,
        }
    }
}

/// Writes `candidates` in the given order.
pub fn write_candidates<W: Write>(
    mut writer: W,
    candidates: &[Candidate],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for candidate in candidates {
                writeln!(
                    writer,
                    "{target}{sep}{flank}{sep}{rank}",
                    target = candidate.target,
                    flank = candidate.flanking,
                    rank = candidate.rank,
                    sep = TEXT_FIELD_SEPARATOR,
                )?;
            }
            writer.flush()?;
        }
        OutputFormat::Tsv => {
            let mut tsv = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_writer(writer);
            if candidates.is_empty() {
                tsv.write_record(["offset", "target", "flank", "rank"])?;
            }
            for candidate in candidates {
                tsv.serialize(CandidateRecord::from(candidate))?;
            }
            tsv.flush()?;
        }
    }
    Ok(())
}
