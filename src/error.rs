use std::num::ParseIntError;

use crate::config::MAX_DIMENSION;

/// Why the command line could not be turned into a board size.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("expected two arguments: HEIGHT WIDTH")]
    MissingDimensions,

    #[error("invalid dimension '{arg}': {source}")]
    InvalidDimension {
        arg: String,
        source: ParseIntError,
    },

    #[error("a {height}x{width} board cannot hold the starting snake")]
    BoardTooSmall { height: usize, width: usize },

    #[error("a {height}x{width} board is larger than {}x{}", MAX_DIMENSION, MAX_DIMENSION)]
    BoardTooLarge { height: usize, width: usize },
}

/// Failure talking to the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal error: {0}")]
    Crossterm(#[from] crossterm::ErrorKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::BoardTooSmall { height: 1, width: 1 };
        assert_eq!(err.to_string(), "a 1x1 board cannot hold the starting snake");

        let err = ConfigError::BoardTooLarge { height: 10, width: 5000 };
        assert_eq!(err.to_string(), "a 10x5000 board is larger than 1000x1000");

        let source = "abc".parse::<usize>().unwrap_err();
        let err = ConfigError::InvalidDimension { arg: "abc".to_string(), source };
        assert_eq!(err.to_string(), "invalid dimension 'abc': invalid digit found in string");
    }
}
