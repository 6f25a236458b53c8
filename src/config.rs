//! Run configuration - defaults, environment variables and validation.

use crate::error::{Error, Result};
use crate::title::DEFAULT_LENGTH_LIMIT;
use std::path::PathBuf;

pub const ENV_MATCH_FILE: &str = "RENAMER_MATCH_FILE";
pub const ENV_IGNORE_FILE: &str = "RENAMER_IGNORE_FILE";
pub const ENV_LENGTH_LIMIT: &str = "RENAMER_LENGTH_LIMIT";
pub const ENV_LINE_LIMIT: &str = "RENAMER_LINE_LIMIT";
pub const ENV_LOG_FILE: &str = "RENAMER_LOG_FILE";

/// Settings shared by every document of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamerConfig {
    /// Keywords that boost a block
    pub match_file: PathBuf,
    /// Keywords that penalise a block
    pub ignore_file: PathBuf,
    /// Characters kept before the marker
    pub length_limit: usize,
    /// Maximum number of blocks read per document
    pub line_limit: Option<usize>,
    /// Operation log
    pub log_file: PathBuf,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            match_file: PathBuf::from("match.txt"),
            ignore_file: PathBuf::from("ignore.txt"),
            length_limit: DEFAULT_LENGTH_LIMIT,
            line_limit: None,
            log_file: PathBuf::from("rename_log.txt"),
        }
    }
}

impl RenamerConfig {
    /// Defaults overridden by the `RENAMER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_MATCH_FILE) {
            config.match_file = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_IGNORE_FILE) {
            config.ignore_file = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_LENGTH_LIMIT) {
            config.length_limit = parse_limit(ENV_LENGTH_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_LINE_LIMIT) {
            config.line_limit = Some(parse_limit(ENV_LINE_LIMIT, &value)?);
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Override the length limit with a signed value, e.g. from the CLI.
    pub fn set_length_limit(&mut self, value: i64) -> Result<()> {
        self.length_limit = check_positive("length limit", value)?;
        Ok(())
    }

    /// Override the block cap with a signed value, e.g. from the CLI.
    pub fn set_line_limit(&mut self, value: i64) -> Result<()> {
        self.line_limit = Some(check_positive("line limit", value)?);
        Ok(())
    }

    /// Re-check invariants after fields were set directly.
    pub fn validate(&self) -> Result<()> {
        if self.length_limit == 0 {
            return Err(Error::InvalidConfig(
                "length limit must be greater than zero".to_string(),
            ));
        }
        if self.line_limit == Some(0) {
            return Err(Error::InvalidConfig(
                "line limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_limit(name: &str, value: &str) -> Result<usize> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("{} is not an integer: {:?}", name, value)))?;
    check_positive(name, parsed)
}

fn check_positive(name: &str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::InvalidConfig(format!(
            "{} must be greater than zero, got {}",
            name, value
        )));
    }
    usize::try_from(value).map_err(|_| Error::InvalidConfig(format!("{} is too large: {}", name, value)))
}
