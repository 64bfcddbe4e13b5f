//! Trade journal source port trait.

use crate::domain::error::JournalError;
use crate::domain::trade::TradeRecord;

/// Supplies already-recorded trades. Order carries no meaning.
pub trait TradePort {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, JournalError>;
}
