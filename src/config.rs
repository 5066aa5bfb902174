// Runtime configuration and constants for sortty

use crate::steps::Algorithm;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between two playback frames
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Largest value accepted by counting, radix and bucket sort.
/// Those generators allocate auxiliary storage indexed by value.
pub const DEFAULT_MAX_VALUE: i64 = 1_000_000;

/// Hard upper bound for `--max-value`. One `usize` counter per value is
/// allocated, so this caps that table at a few tens of megabytes.
pub const MAX_VALUE_CEILING: i64 = 5_000_000;

/// Arrays up to this length are drawn as value boxes instead of bars
pub const BOX_VIEW_MAX_LEN: usize = 4;

/// Bounds enforced on values fed to the distribution sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueLimits {
    max_value: i64,
}

impl ValueLimits {
    /// Accepts `0..=MAX_VALUE_CEILING`
    pub fn new(max_value: i64) -> Result<Self, ConfigError> {
        if max_value < 0 {
            return Err(ConfigError::NegativeMaxValue(max_value));
        }
        if max_value > MAX_VALUE_CEILING {
            return Err(ConfigError::MaxValueTooLarge {
                value: max_value,
                ceiling: MAX_VALUE_CEILING,
            });
        }
        Ok(ValueLimits { max_value })
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    /// True when `value` can be used directly as an auxiliary array index
    pub fn admits(&self, value: i64) -> bool {
        (0..=self.max_value).contains(&value)
    }
}

impl Default for ValueLimits {
    fn default() -> Self {
        ValueLimits {
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

/// Where the array text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
}

/// What the binary does once the sequence is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive terminal UI
    Interactive,
    /// Print every step to stdout and exit
    Dump,
    /// Print the algorithm catalogue and exit
    List,
}

/// Fully resolved command-line configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub source: InputSource,
    pub tick_interval: Duration,
    pub limits: ValueLimits,
    pub mode: RunMode,
}

impl Config {
    /// Build a config from the process arguments (without the program name)
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tick_interval = DEFAULT_TICK_INTERVAL;
        let mut limits = ValueLimits::default();
        let mut mode = RunMode::Interactive;
        let mut file = None;
        let mut positional = Vec::new();

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--interval" | "-i" => {
                    let raw = args.next().ok_or(ConfigError::MissingValue("--interval"))?;
                    let ms: u64 = raw
                        .parse()
                        .map_err(|_| ConfigError::InvalidOption("--interval", raw.clone()))?;
                    if ms == 0 {
                        return Err(ConfigError::ZeroInterval);
                    }
                    tick_interval = Duration::from_millis(ms);
                }
                "--max-value" => {
                    let raw = args.next().ok_or(ConfigError::MissingValue("--max-value"))?;
                    let max: i64 = raw
                        .parse()
                        .map_err(|_| ConfigError::InvalidOption("--max-value", raw.clone()))?;
                    limits = ValueLimits::new(max)?;
                }
                "--file" | "-f" => {
                    let path = args.next().ok_or(ConfigError::MissingValue("--file"))?;
                    file = Some(PathBuf::from(path));
                }
                "--dump" => mode = RunMode::Dump,
                "--list" => mode = RunMode::List,
                _ => positional.push(arg),
            }
        }

        // --list needs nothing else; still return a usable config
        if mode == RunMode::List {
            return Ok(Config {
                algorithm: Algorithm::Bubble,
                source: InputSource::Inline(String::new()),
                tick_interval,
                limits,
                mode,
            });
        }

        let mut positional = positional.into_iter();
        let name = positional.next().ok_or(ConfigError::MissingAlgorithm)?;
        let algorithm: Algorithm = name
            .parse()
            .map_err(|_| ConfigError::UnknownAlgorithm(name.clone()))?;

        let source = match (file, positional.next()) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingInput),
            (Some(path), None) => InputSource::File(path),
            (None, Some(text)) => InputSource::Inline(text),
            (None, None) => return Err(ConfigError::MissingInput),
        };

        if let Some(extra) = positional.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        Ok(Config {
            algorithm,
            source,
            tick_interval,
            limits,
            mode,
        })
    }
}

/// Errors raised while reading the command line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("No algorithm given")]
    MissingAlgorithm,
    #[error("Unknown algorithm '{0}' (try --list)")]
    UnknownAlgorithm(String),
    #[error("No input given: pass comma separated values or --file <path>")]
    MissingInput,
    #[error("Pass either inline values or --file, not both")]
    ConflictingInput,
    #[error("Option {0} needs a value")]
    MissingValue(&'static str),
    #[error("Invalid value '{1}' for option {0}")]
    InvalidOption(&'static str, String),
    #[error("Playback interval must be at least 1 ms")]
    ZeroInterval,
    #[error("Maximum value must not be negative, got {0}")]
    NegativeMaxValue(i64),
    #[error("Maximum value {value} is above the supported ceiling of {ceiling}")]
    MaxValueTooLarge { value: i64, ceiling: i64 },
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}
