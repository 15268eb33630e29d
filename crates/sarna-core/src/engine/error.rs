use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::sequence::SequenceError;
use crate::core::thermo::stability::ThermoError;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EngineError {
    #[error("Sequence of length {length} is shorter than the window length {window_length}")]
    SequenceTooShort { length: usize, window_length: usize },

    #[error("Invalid symbol '{symbol}' at position {position}; expected one of A, T, G, C")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Stability evaluation failed: {source}")]
    Stability {
        #[from]
        source: ThermoError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}

impl From<SequenceError> for EngineError {
    fn from(err: SequenceError) -> Self {
        match err {
            SequenceError::InvalidSymbol { symbol, position } => {
                EngineError::InvalidSymbol { symbol, position }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_error_maps_to_invalid_symbol() {
        let err: EngineError = SequenceError::InvalidSymbol {
            symbol: 'N',
            position: 12,
        }
        .into();
        assert_eq!(
            err,
            EngineError::InvalidSymbol {
                symbol: 'N',
                position: 12
            }
        );
    }

    #[test]
    fn sequence_too_short_message_names_both_lengths() {
        let err = EngineError::SequenceTooShort {
            length: 12,
            window_length: 19,
        };
        assert_eq!(
            err.to_string(),
            "Sequence of length 12 is shorter than the window length 19"
        );
    }
}
