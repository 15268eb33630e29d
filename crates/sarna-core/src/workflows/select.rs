use crate::core::models::candidate::Candidate;
use crate::core::models::sequence::Sequence;
use crate::engine::config::DesignConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::tasks::{self, window_scan::ScanSummary};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SelectionResult {
    /// Candidates ordered best-first; equal ranks keep ascending offset order.
    pub candidates: Vec<Candidate>,
    pub summary: ScanSummary,
}

/// Selects and ranks candidate target sites in `raw_sequence`.
///
/// The whole sequence is validated before any window is generated: a symbol outside
/// {A, T, G, C} or a sequence shorter than the window fails the run with no candidates.
#[instrument(skip_all, name = "selection_workflow")]
pub fn run(
    raw_sequence: &str,
    config: &DesignConfig,
    reporter: &ProgressReporter,
) -> Result<SelectionResult, EngineError> {
    // === Phase 0: Init ===
    let sequence = reporter.phase("Validating Sequence", || validate(raw_sequence, config))?;

    // === Phase 1: Generate / Advance ===
    let scan = reporter.phase("Scanning Windows", || {
        tasks::window_scan::run(&sequence, config, reporter)
    })?;

    // === Phase 2: Rank ===
    let candidates = reporter.phase("Ranking Candidates", || {
        Ok::<_, EngineError>(tasks::ranking::run(scan.candidates))
    })?;

    info!(
        candidates = candidates.len(),
        "Selection complete. Returning ranked candidates."
    );

    Ok(SelectionResult {
        candidates,
        summary: scan.summary,
    })
}

fn validate(raw_sequence: &str, config: &DesignConfig) -> Result<Sequence, EngineError> {
    config.validate()?;
    let sequence = Sequence::new(raw_sequence)?;
    if sequence.len() < config.window_length {
        return Err(EngineError::SequenceTooShort {
            length: sequence.len(),
            window_length: config.window_length,
        });
    }
    info!(
        length = sequence.len(),
        window_length = config.window_length,
        "Sequence validated."
    );
    Ok(sequence)
}
