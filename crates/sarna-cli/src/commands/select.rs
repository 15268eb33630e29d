use crate::cli::SelectArgs;
use crate::config;
use crate::error::Result;
use crate::output;
use crate::utils::loader;
use crate::utils::progress::CliProgressHandler;
use sarna::engine::progress::ProgressReporter;
use sarna::workflows;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: SelectArgs, quiet: bool) -> Result<()> {
    let settings = config::resolve(&args)?;
    let raw_sequence = loader::read_sequence(&args.input)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Starting target selection workflow...");
    let result = workflows::select::run(&raw_sequence, &settings.design, &reporter)?;

    let summary = &result.summary;
    info!(
        scanned = summary.windows_scanned,
        accepted = summary.accepted,
        rejected = summary.rejected(),
        "Target selection finished."
    );
    if result.candidates.is_empty() {
        warn!(
            "No window of length {} passed the filters; writing an empty result.",
            settings.design.window_length
        );
    }

    let shown = match settings.limit {
        Some(limit) => &result.candidates[..limit.min(result.candidates.len())],
        None => &result.candidates[..],
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing {} candidates to {:?}", shown.len(), path);
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    output::write_candidates(writer, shown, settings.format)
}
