//! CSV trade journal adapter.
//!
//! Columns are matched by header name against the [`TradeRecord`] fields;
//! `entry` and `stop` are required, every other column may be absent or left
//! empty. Unknown columns are ignored.

use crate::domain::error::JournalError;
use crate::domain::trade::TradeRecord;
use crate::ports::trade_port::TradePort;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parses a journal from any reader, e.g. an in-memory buffer.
    pub fn read_trades<R: Read>(reader: R) -> Result<Vec<TradeRecord>, JournalError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = rdr.headers().map_err(csv_error)?.clone();
        let mut trades = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(csv_error)?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let trade: TradeRecord =
                record
                    .deserialize(Some(&headers))
                    .map_err(|e| JournalError::TradeData {
                        line,
                        reason: csv_reason(&e),
                    })?;
            if let Some(field) = non_finite_price(&trade) {
                return Err(JournalError::TradeData {
                    line,
                    reason: format!("{field} must be a finite number"),
                });
            }

            if trade.entry == trade.stop {
                tracing::warn!(
                    symbol = trade.symbol.as_deref().unwrap_or("-"),
                    entry = trade.entry,
                    "trade has no risk distance, R metrics will be zero"
                );
            }
            tracing::trace!(?trade, "parsed trade");
            trades.push(trade);
        }

        Ok(trades)
    }
}

impl TradePort for CsvAdapter {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, JournalError> {
        let file = File::open(&self.path).map_err(|e| {
            JournalError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {}", self.path.display(), e),
            ))
        })?;

        let trades = Self::read_trades(file)?;
        tracing::debug!(
            path = %self.path.display(),
            count = trades.len(),
            "loaded trade journal"
        );
        Ok(trades)
    }
}

/// Name of the first price or result that is infinite or NaN.
fn non_finite_price(trade: &TradeRecord) -> Option<&'static str> {
    let fields = [
        ("entry", Some(trade.entry)),
        ("stop", Some(trade.stop)),
        ("target", trade.target),
        ("exit", trade.exit),
        ("result", trade.result),
    ];
    fields
        .into_iter()
        .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
        .map(|(name, _)| name)
}

fn csv_error(err: csv::Error) -> JournalError {
    JournalError::TradeData {
        line: err.position().map(|p| p.line()).unwrap_or(0),
        reason: csv_reason(&err),
    }
}

fn csv_reason(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(field) => format!("field {}: {}", field + 1, err.kind()),
            None => err.kind().to_string(),
        },
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    const JOURNAL: &str = "\
symbol,date,entry,stop,target,exit,status,result,stopped_out,preparation,notes
ES,2024-01-15,5000,4990,5030,5030,Winner,3.0,false,8,clean setup
NQ,2024-01-16,17000,17050,16900,17050,Loser,-1.0,true,,chased
CL,2024-01-17,75.0,74.5,76.5,,Open,,,,
";

    #[test]
    fn read_trades_parses_all_columns() {
        let trades = CsvAdapter::read_trades(JOURNAL.as_bytes()).unwrap();
        assert_eq!(trades.len(), 3);

        let es = &trades[0];
        assert_eq!(es.symbol.as_deref(), Some("ES"));
        assert_eq!(es.date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(es.entry, 5000.0);
        assert_eq!(es.stop, 4990.0);
        assert_eq!(es.target, Some(5030.0));
        assert_eq!(es.exit, Some(5030.0));
        assert_eq!(es.status, "Winner");
        assert_eq!(es.result, Some(3.0));
        assert_eq!(es.stopped_out, Some(false));
        assert_eq!(es.preparation, Some(8.0));
    }

    #[test]
    fn read_trades_empty_cells_are_none() {
        let trades = CsvAdapter::read_trades(JOURNAL.as_bytes()).unwrap();
        let cl = &trades[2];
        assert_eq!(cl.exit, None);
        assert_eq!(cl.result, None);
        assert_eq!(cl.stopped_out, None);
        assert_eq!(trades[1].preparation, None);
    }

    #[test]
    fn read_trades_minimal_columns() {
        let trades = CsvAdapter::read_trades("entry,stop\n100,95\n".as_bytes()).unwrap();
        assert_eq!(trades, vec![TradeRecord::new(100.0, 95.0)]);
    }

    #[test]
    fn read_trades_reports_line_of_bad_row() {
        let data = "entry,stop,exit\n100,95,101\n100,abc,101\n";
        let err = CsvAdapter::read_trades(data.as_bytes()).unwrap_err();
        assert!(matches!(err, JournalError::TradeData { line: 3, .. }), "{err}");
    }

    #[test]
    fn read_trades_rejects_infinite_prices() {
        let data = "entry,stop,target,exit,result\n100,95,110,105,1\ninf,95,110,105,1\n";
        let err = CsvAdapter::read_trades(data.as_bytes()).unwrap_err();
        assert!(
            matches!(&err, JournalError::TradeData { line: 3, reason } if reason.contains("entry")),
            "{err}"
        );

        let data = "entry,stop,target,exit\n100,95,-inf,105\n";
        let err = CsvAdapter::read_trades(data.as_bytes()).unwrap_err();
        assert!(matches!(&err, JournalError::TradeData { reason, .. } if reason.contains("target")));
    }

    #[test]
    fn read_trades_rejects_nan_result() {
        let err = CsvAdapter::read_trades("entry,stop,result\n100,95,NaN\n".as_bytes()).unwrap_err();
        assert!(matches!(&err, JournalError::TradeData { line: 2, reason } if reason.contains("result")));
    }

    #[test]
    fn read_trades_missing_required_column() {
        let err = CsvAdapter::read_trades("entry,target\n100,110\n".as_bytes()).unwrap_err();
        assert!(matches!(err, JournalError::TradeData { .. }));
    }

    #[test]
    fn load_trades_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.csv");
        fs::write(&path, JOURNAL).unwrap();

        let trades = CsvAdapter::new(path).load_trades().unwrap();
        assert_eq!(trades.len(), 3);
    }

    #[test]
    fn load_trades_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let adapter = CsvAdapter::new(dir.path().join("nope.csv"));
        assert!(matches!(adapter.load_trades(), Err(JournalError::Io(_))));
    }
}
