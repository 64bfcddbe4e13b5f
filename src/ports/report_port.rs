//! Report generation port trait.

use std::io::Write;

use crate::domain::error::JournalError;
use crate::domain::summary::TradeSummary;

/// Port for rendering a journal summary.
pub trait ReportPort {
    fn write(&self, summary: &TradeSummary, out: &mut dyn Write) -> Result<(), JournalError>;
}
