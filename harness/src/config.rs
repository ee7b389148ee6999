//! Command-line configuration for the `degrees` binary.

use std::path::PathBuf;

use costar_search::policy::{SearchPolicy, TargetCheck};

pub const USAGE: &str =
    "Usage: degrees [directory] [--json] [--max-expansions N] [--legacy-early-exit]";

/// Dataset directory used when none is given.
pub const DEFAULT_DATA_DIR: &str = "large";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    /// Print the canonical JSON report instead of numbered steps.
    pub json: bool,
    pub policy: SearchPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            json: false,
            policy: SearchPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag { flag: String },
    MissingValue { flag: String },
    InvalidValue { flag: String, value: String },
    /// More than one positional argument.
    TooManyArguments,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFlag { flag } => write!(f, "unknown flag: {flag}"),
            Self::MissingValue { flag } => write!(f, "{flag} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value for {flag}: {value}"),
            Self::TooManyArguments => f.write_str("too many arguments"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl RunConfig {
    /// Parse arguments (program name already stripped).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown flags, missing or unparsable flag
    /// values, and a second positional argument.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut data_dir: Option<PathBuf> = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--legacy-early-exit" => config.policy.target_check = TargetCheck::OnDiscovery,
                "--max-expansions" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                        flag: arg.clone(),
                    })?;
                    let max = value
                        .parse::<u64>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or_else(|| ConfigError::InvalidValue {
                            flag: arg.clone(),
                            value: value.clone(),
                        })?;
                    config.policy.max_expansions = Some(max);
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag {
                        flag: flag.to_string(),
                    });
                }
                _ => {
                    if data_dir.is_some() {
                        return Err(ConfigError::TooManyArguments);
                    }
                    data_dir = Some(PathBuf::from(&arg));
                }
            }
        }

        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        Ok(config)
    }
}
