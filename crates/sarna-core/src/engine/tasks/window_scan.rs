use crate::core::models::candidate::Candidate;
use crate::core::models::sequence::Sequence;
use crate::engine::config::DesignConfig;
use crate::engine::error::EngineError;
use crate::engine::filter::{FilterOutcome, FilterPipeline, RejectionReason};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scoring;
use tracing::{info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counts of what happened to each window during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub windows_scanned: usize,
    pub accepted: usize,
    pub rejected_gc: usize,
    pub rejected_homopolymer: usize,
    pub rejected_stability: usize,
}

impl ScanSummary {
    pub fn rejected(&self) -> usize {
        self.rejected_gc + self.rejected_homopolymer + self.rejected_stability
    }

    fn record(&mut self, verdict: &WindowVerdict) {
        self.windows_scanned += 1;
        match verdict {
            WindowVerdict::Accepted(_) => self.accepted += 1,
            WindowVerdict::Rejected(RejectionReason::GcContent) => self.rejected_gc += 1,
            WindowVerdict::Rejected(RejectionReason::HomopolymerRun) => {
                self.rejected_homopolymer += 1
            }
            WindowVerdict::Rejected(RejectionReason::Stability) => self.rejected_stability += 1,
        }
    }
}

#[derive(Debug)]
pub struct ScanOutput {
    /// Accepted candidates in generation (ascending offset) order.
    pub candidates: Vec<Candidate>,
    pub summary: ScanSummary,
}

#[derive(Debug)]
enum WindowVerdict {
    Accepted(Candidate),
    Rejected(RejectionReason),
}

/// Slides the window across `sequence`, filtering and scoring every offset.
///
/// The caller guarantees `sequence.len() >= config.window_length`.
#[instrument(skip_all, name = "window_scan_task")]
pub fn run(
    sequence: &Sequence,
    config: &DesignConfig,
    reporter: &ProgressReporter,
) -> Result<ScanOutput, EngineError> {
    let window_length = config.window_length;
    let total_windows = sequence.window_count(window_length);
    info!(
        sequence_length = sequence.len(),
        window_length, total_windows, "Scanning candidate windows."
    );

    let pipeline = FilterPipeline::new(config);
    reporter.report(Progress::ScanStart {
        total_windows: total_windows as u64,
    });

    let evaluate = |offset: usize| -> Result<WindowVerdict, EngineError> {
        let verdict = evaluate_offset(sequence, offset, window_length, &pipeline);
        reporter.report(Progress::WindowScanned);
        verdict
    };

    #[cfg(not(feature = "parallel"))]
    let verdicts: Vec<WindowVerdict> = (0..total_windows)
        .map(evaluate)
        .collect::<Result<_, _>>()?;

    #[cfg(feature = "parallel")]
    let verdicts: Vec<WindowVerdict> = (0..total_windows)
        .into_par_iter()
        .map(evaluate)
        .collect::<Result<_, _>>()?;

    reporter.report(Progress::ScanFinish);

    let mut summary = ScanSummary::default();
    let mut candidates = Vec::new();
    for verdict in verdicts {
        summary.record(&verdict);
        if let WindowVerdict::Accepted(candidate) = verdict {
            candidates.push(candidate);
        }
    }

    info!(
        scanned = summary.windows_scanned,
        accepted = summary.accepted,
        rejected_gc = summary.rejected_gc,
        rejected_homopolymer = summary.rejected_homopolymer,
        rejected_stability = summary.rejected_stability,
        "Window scan complete."
    );

    Ok(ScanOutput {
        candidates,
        summary,
    })
}

fn evaluate_offset(
    sequence: &Sequence,
    offset: usize,
    window_length: usize,
    pipeline: &FilterPipeline,
) -> Result<WindowVerdict, EngineError> {
    let window = sequence.window(offset, window_length).ok_or_else(|| {
        EngineError::Internal(format!(
            "window at offset {} of length {} exceeds sequence of length {}",
            offset,
            window_length,
            sequence.len()
        ))
    })?;

    match pipeline.evaluate(window)? {
        FilterOutcome::Rejected(reason) => {
            trace!(offset, window, %reason, "Window rejected.");
            Ok(WindowVerdict::Rejected(reason))
        }
        FilterOutcome::Accepted => {
            let flanking = scoring::capture_flanking(sequence, offset, window_length);
            let rank = scoring::score(window, &flanking).total();
            trace!(offset, window, %flanking, rank, "Window accepted.");
            Ok(WindowVerdict::Accepted(Candidate {
                offset,
                target: window.to_string(),
                flanking,
                rank,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::DesignConfigBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scan(raw: &str, config: &DesignConfig) -> ScanOutput {
        let sequence = Sequence::new(raw).unwrap();
        run(&sequence, config, &ProgressReporter::new()).unwrap()
    }

    #[test]
    fn run_on_exact_length_sequence_evaluates_single_window() {
        let output = scan("GCATGCATCGATGCATCTA", &DesignConfig::default());

        assert_eq!(output.summary.windows_scanned, 1);
        assert_eq!(output.summary.accepted, 1);
        assert_eq!(output.candidates.len(), 1);

        let candidate = &output.candidates[0];
        assert_eq!(candidate.offset, 0);
        assert_eq!(candidate.target, "GCATGCATCGATGCATCTA");
        assert_eq!(candidate.flanking.to_string(), "----");
        assert_eq!(candidate.rank, 40);
    }

    #[test]
    fn run_returns_candidates_in_offset_order_with_flanking_bonuses() {
        let output = scan("GCATGCATCGATGCATCTAATGC", &DesignConfig::default());

        let summary: Vec<_> = output
            .candidates
            .iter()
            .map(|c| (c.offset, c.flanking.to_string(), c.rank))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, "ATGC".to_string(), 47),
                (1, "TGC-".to_string(), 34),
                (3, "C---".to_string(), 20),
            ]
        );
        assert_eq!(output.summary.windows_scanned, 5);
        assert_eq!(output.summary.accepted, 3);
        assert_eq!(output.summary.rejected(), 2);
    }

    #[test]
    fn run_tallies_rejections_by_stage() {
        let output = scan("ATATATATATATATATATA", &DesignConfig::default());
        assert_eq!(output.summary.rejected_gc, 1);
        assert!(output.candidates.is_empty());

        let output = scan("GCATGCAAAAGCTGCATCT", &DesignConfig::default());
        assert_eq!(output.summary.rejected_homopolymer, 1);

        let output = scan("ATCTACGTAGCTACGTACG", &DesignConfig::default());
        assert_eq!(output.summary.rejected_stability, 1);
    }

    #[test]
    fn run_uses_configured_window_length() {
        let config = DesignConfigBuilder::new().window_length(10).build().unwrap();
        let output = scan("GCATGCATCG", &config);

        assert_eq!(output.candidates.len(), 1);
        assert_eq!(output.candidates[0].target.len(), 10);
        assert_eq!(output.candidates[0].rank, 20);
    }

    #[test]
    fn run_reports_one_increment_per_window() {
        let increments = AtomicUsize::new(0);
        let totals = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::ScanStart { total_windows } => {
                totals.store(total_windows as usize, Ordering::SeqCst);
            }
            Progress::WindowScanned => {
                increments.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }));

        let sequence = Sequence::new("ATACCAAGCCGAATTCTTAGAATA").unwrap();
        run(&sequence, &DesignConfig::default(), &reporter).unwrap();

        assert_eq!(totals.load(Ordering::SeqCst), 6);
        assert_eq!(increments.load(Ordering::SeqCst), 6);
    }
}
