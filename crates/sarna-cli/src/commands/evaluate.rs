use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use sarna::core::models::sequence::Sequence;
use sarna::core::thermo::stability::EndStability;
use sarna::core::utils::predicates::{count_tri_repeats, gc_percentage, longest_run};
use sarna::engine::config::{DesignConfig, DesignConfigBuilder};
use sarna::engine::error::EngineError;
use sarna::engine::filter::{FilterOutcome, FilterPipeline};
use sarna::engine::scoring::{self, RankBreakdown};
use std::fmt;
use tracing::info;

/// Everything the filters and the scorer see when looking at a single window.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub target: String,
    pub gc_percent: f64,
    pub longest_run: usize,
    pub run_length_threshold: usize,
    pub tri_repeats: usize,
    pub stability: EndStability,
    pub outcome: FilterOutcome,
    pub breakdown: RankBreakdown,
}

impl EvaluationReport {
    pub fn build(target: &str, config: &DesignConfig) -> Result<Self> {
        let sequence = Sequence::new(target).map_err(EngineError::from)?;
        let window = sequence.as_str();

        let outcome = FilterPipeline::new(config)
            .evaluate(window)
            .map_err(EngineError::from)?;
        let stability = EndStability::of(window).map_err(EngineError::from)?;

        Ok(Self {
            target: window.to_string(),
            gc_percent: gc_percentage(window),
            longest_run: longest_run(window),
            run_length_threshold: config.run_length_threshold,
            tri_repeats: count_tri_repeats(window),
            stability,
            outcome,
            breakdown: scoring::score_window(window),
        })
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.target.len();
        writeln!(f, "Target:           {} ({} nt)", self.target, len)?;
        writeln!(f, "GC content:       {:.1}%", self.gc_percent)?;
        writeln!(
            f,
            "Longest run:      {} (rejected at {})",
            self.longest_run, self.run_length_threshold
        )?;
        writeln!(f, "Tri-repeats:      {}", self.tri_repeats)?;
        writeln!(
            f,
            "5' end dG:        {:.2} kcal/mol",
            self.stability.five_prime
        )?;
        writeln!(
            f,
            "3' end dG:        {:.2} kcal/mol",
            self.stability.three_prime
        )?;
        match self.outcome {
            FilterOutcome::Accepted => writeln!(f, "Filters:          accepted")?,
            FilterOutcome::Rejected(reason) => {
                writeln!(f, "Filters:          rejected ({})", reason)?
            }
        }

        let b = &self.breakdown;
        writeln!(f, "Rank breakdown:")?;
        writeln!(f, "  first base      {:+}", b.first_base)?;
        writeln!(f, "  second base     {:+}", b.second_base)?;
        writeln!(f, "  penultimate     {:+}", b.penultimate_base)?;
        writeln!(f, "  last base       {:+}", b.last_base)?;
        writeln!(f, "  tri-repeats     {:+}", b.tri_repeats)?;
        write!(f, "Rank (no flank):  {}", b.total())
    }
}

pub fn run(args: EvaluateArgs) -> Result<()> {
    let target = args.target.trim();
    let mut builder = DesignConfigBuilder::new().window_length(target.len());
    if let Some(threshold) = args.run_length_threshold {
        builder = builder.run_length_threshold(threshold);
    }
    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let report = EvaluationReport::build(target, &config)?;
    info!(
        outcome = ?report.outcome,
        rank = report.breakdown.total(),
        "Window evaluated."
    );
    println!("{}", report);
    Ok(())
}
