use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

const STDIN_MARKER: &str = "-";

/// Returns the last whitespace-delimited token of `content`, which holds the sequence.
pub fn last_token(content: &str) -> Option<&str> {
    content.split_whitespace().next_back()
}

/// Reads the sequence from `input`, or from stdin when `input` is `-`.
///
/// Symbols are returned verbatim; validation happens in the selection workflow.
pub fn read_sequence(input: &Path) -> Result<String> {
    let content = if input.as_os_str() == STDIN_MARKER {
        debug!("Reading sequence from standard input.");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        debug!("Reading sequence from file: {:?}", input);
        std::fs::read_to_string(input)?
    };

    let token = last_token(&content).ok_or_else(|| {
        CliError::Argument(format!(
            "input '{}' contains no sequence",
            input.display()
        ))
    })?;
    debug!(length = token.len(), "Sequence token loaded.");
    Ok(token.to_string())
}
