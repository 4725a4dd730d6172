use log::warn;

use crate::error::ConfigError;

const DEFAULT_HEIGHT: usize = 10;
const DEFAULT_WIDTH: usize = 10;
/// Largest accepted height or width.
pub const MAX_DIMENSION: usize = 1000;

/// Board size chosen at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { height: DEFAULT_HEIGHT, width: DEFAULT_WIDTH }
    }
}

impl GameConfig {
    /// Reads `HEIGHT WIDTH` from the arguments following the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter().skip(1);
        let (height, width) = match (args.next(), args.next()) {
            (Some(h), Some(w)) => (parse_dimension(h.as_ref())?, parse_dimension(w.as_ref())?),
            _ => return Err(ConfigError::MissingDimensions),
        };

        // The snake starts as a head plus one segment to its left
        if height < 1 || width < 2 {
            return Err(ConfigError::BoardTooSmall { height, width });
        }
        if height > MAX_DIMENSION || width > MAX_DIMENSION {
            return Err(ConfigError::BoardTooLarge { height, width });
        }

        Ok(GameConfig { height, width })
    }

    /// Like `from_args`, but never fails: any problem falls back to the
    /// default board. Also returns the line telling the player which size
    /// is in use.
    pub fn from_args_or_default<I, S>(args: I) -> (Self, String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match Self::from_args(args) {
            Ok(config) => {
                let notice = format!("using {} by {} board dimensions", config.height, config.width);
                (config, notice)
            },
            Err(e) => {
                warn!("{}", e);
                (Self::default(), "using default dimensions...".to_string())
            },
        }
    }
}

fn parse_dimension(arg: &str) -> Result<usize, ConfigError> {
    arg.trim().parse().map_err(|source| ConfigError::InvalidDimension { arg: arg.to_string(), source })
}
