//! Domain error types.
//!
//! Only the outer surfaces (config, journal files, report output) can fail.
//! The metric functions in [`super::metrics`] are total and never return these.

/// Top-level error type for rtrade.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid trade record at line {line}: {reason}")]
    TradeData { line: u64, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl JournalError {
    /// Process exit status for this error category.
    pub fn exit_status(&self) -> u8 {
        match self {
            JournalError::Io(_) => 1,
            JournalError::ConfigParse { .. }
            | JournalError::ConfigMissing { .. }
            | JournalError::ConfigInvalid { .. } => 2,
            JournalError::TradeData { .. } => 3,
        }
    }
}

impl From<&JournalError> for std::process::ExitCode {
    fn from(err: &JournalError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
