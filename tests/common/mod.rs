#![allow(dead_code)]

use rtrade::domain::error::JournalError;
use rtrade::domain::summary::TradeSummary;
pub use rtrade::domain::trade::TradeRecord;
use rtrade::ports::report_port::ReportPort;
use rtrade::ports::trade_port::TradePort;
use std::cell::RefCell;
use std::io::Write;

pub struct MockTradePort {
    pub trades: Vec<TradeRecord>,
    pub error: Option<String>,
}

impl MockTradePort {
    pub fn new() -> Self {
        Self {
            trades: Vec::new(),
            error: None,
        }
    }

    pub fn with_trades(mut self, trades: Vec<TradeRecord>) -> Self {
        self.trades = trades;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl TradePort for MockTradePort {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, JournalError> {
        if let Some(reason) = &self.error {
            return Err(JournalError::TradeData {
                line: 2,
                reason: reason.clone(),
            });
        }
        Ok(self.trades.clone())
    }
}

pub struct MockReportPort {
    pub calls: RefCell<Vec<TradeSummary>>,
}

impl MockReportPort {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ReportPort for MockReportPort {
    fn write(&self, summary: &TradeSummary, out: &mut dyn Write) -> Result<(), JournalError> {
        self.calls.borrow_mut().push(summary.clone());
        writeln!(out, "{} trades", summary.trade_count)?;
        Ok(())
    }
}

pub fn winner(entry: f64, stop: f64, exit: f64) -> TradeRecord {
    let r = (exit - entry) / (entry - stop).abs();
    TradeRecord::new(entry, stop)
        .with_exit(exit)
        .with_status("Winner")
        .with_result(r)
}

pub fn loser(entry: f64, stop: f64) -> TradeRecord {
    TradeRecord::new(entry, stop)
        .with_exit(stop)
        .with_status("Loser")
        .with_stopped_out(true)
        .with_result(-1.0)
}

/// A winner closed below its target.
pub fn early_exit(entry: f64, stop: f64, target: f64, exit: f64) -> TradeRecord {
    winner(entry, stop, exit).with_target(target)
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
