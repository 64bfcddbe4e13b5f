//! Plain-text journal report.

use std::io::Write;

use crate::domain::error::JournalError;
use crate::domain::summary::TradeSummary;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

const DEFAULT_PRECISION: usize = 2;
const MAX_PRECISION: i64 = 8;

pub struct TextReportAdapter {
    precision: usize,
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl TextReportAdapter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Reads `[report] precision`, clamped to 0..=8 decimal places.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let precision = config
            .get_int("report", "precision", DEFAULT_PRECISION as i64)
            .clamp(0, MAX_PRECISION);
        Self::new(precision as usize)
    }

    fn num(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl ReportPort for TextReportAdapter {
    fn write(&self, summary: &TradeSummary, out: &mut dyn Write) -> Result<(), JournalError> {
        let period = match (summary.first_date, summary.last_date) {
            (Some(first), Some(last)) => format!("{first} to {last}"),
            _ => "n/a".to_string(),
        };
        let score = summary
            .average_score
            .map(|s| self.num(s))
            .unwrap_or_else(|| "n/a".to_string());

        let rows = [
            ("Period", period),
            ("Trades", summary.trade_count.to_string()),
            ("Winners", summary.winners.to_string()),
            ("Win rate", format!("{}%", self.num(summary.win_rate))),
            ("Total R", self.num(summary.total_r)),
            ("Average R", self.num(summary.average_r)),
            ("Avg potential R", self.num(summary.average_potential_r)),
            ("Chicken outs", summary.chicken_outs.to_string()),
            ("Missed R", self.num(summary.missed_r)),
            ("Average score", score),
        ];

        writeln!(out, "Trade Journal Summary")?;
        writeln!(out, "=====================")?;
        for (label, value) in rows {
            writeln!(out, "{label:<16} {value:>14}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;
    use crate::domain::trade::TradeRecord;

    fn render(adapter: &TextReportAdapter, summary: &TradeSummary) -> String {
        let mut buf = Vec::new();
        adapter.write(summary, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn line_for<'a>(report: &'a str, label: &str) -> &'a str {
        report
            .lines()
            .find(|l| l.starts_with(label))
            .unwrap_or_else(|| panic!("no line for {label} in:\n{report}"))
    }

    #[test]
    fn renders_empty_summary() {
        let report = render(&TextReportAdapter::default(), &TradeSummary::compute(&[]));
        assert!(report.starts_with("Trade Journal Summary\n"));
        assert!(line_for(&report, "Period").ends_with("n/a"));
        assert!(line_for(&report, "Trades").ends_with(" 0"));
        assert!(line_for(&report, "Win rate").ends_with("0.00%"));
        assert!(line_for(&report, "Average score").ends_with("n/a"));
    }

    #[test]
    fn renders_values_with_precision() {
        let trades = vec![
            TradeRecord::new(100.0, 95.0)
                .with_status("Winner")
                .with_result(2.0),
            TradeRecord::new(100.0, 95.0)
                .with_status("Loser")
                .with_result(-1.0),
            TradeRecord::new(100.0, 95.0).with_status("Loser"),
        ];
        let summary = TradeSummary::compute(&trades);

        let report = render(&TextReportAdapter::new(1), &summary);
        assert!(line_for(&report, "Win rate").ends_with("33.3%"));
        assert!(line_for(&report, "Total R").ends_with("1.0"));
        assert!(line_for(&report, "Average R").ends_with("0.5"));
    }

    #[test]
    fn from_config_clamps_precision() {
        let adapter = FileConfigAdapter::from_string("[report]\nprecision = 40\n").unwrap();
        let report = TextReportAdapter::from_config(&adapter);
        assert_eq!(report.precision, 8);

        let adapter = FileConfigAdapter::from_string("[report]\n").unwrap();
        assert_eq!(TextReportAdapter::from_config(&adapter).precision, 2);
    }
}
