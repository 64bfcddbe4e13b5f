//! Trade journal records.

use chrono::NaiveDate;
use serde::Deserialize;

use super::metrics;

/// The only status value that counts as a win.
pub const WINNER_STATUS: &str = "Winner";

/// Self-assessment scores (1–10) recorded against a trade.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradeScores {
    pub preparation: Option<f64>,
    pub entry: Option<f64>,
    pub stop_loss: Option<f64>,
    pub target: Option<f64>,
    pub management: Option<f64>,
    pub rules: Option<f64>,
}

impl TradeScores {
    pub fn average(&self) -> Option<f64> {
        metrics::average_score(
            self.preparation,
            self.entry,
            self.stop_loss,
            self.target,
            self.management,
            self.rules,
        )
    }
}

/// One row of a trade journal.
///
/// `entry` and `stop` are always present; everything else may be missing on
/// open or partially filled trades.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeRecord {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub entry: f64,
    pub stop: f64,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub exit: Option<f64>,
    #[serde(default)]
    pub status: String,
    /// Precomputed R-multiple as recorded in the journal.
    #[serde(default)]
    pub result: Option<f64>,
    #[serde(default)]
    pub stopped_out: Option<bool>,
    #[serde(default)]
    pub preparation: Option<f64>,
    #[serde(default)]
    pub entry_score: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub target_score: Option<f64>,
    #[serde(default)]
    pub management: Option<f64>,
    #[serde(default)]
    pub rules: Option<f64>,
}

impl TradeRecord {
    pub fn new(entry: f64, stop: f64) -> Self {
        Self {
            symbol: None,
            date: None,
            entry,
            stop,
            target: None,
            exit: None,
            status: String::new(),
            result: None,
            stopped_out: None,
            preparation: None,
            entry_score: None,
            stop_loss: None,
            target_score: None,
            management: None,
            rules: None,
        }
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_exit(mut self, exit: f64) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_result(mut self, result: f64) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_stopped_out(mut self, stopped_out: bool) -> Self {
        self.stopped_out = Some(stopped_out);
        self
    }

    pub fn with_scores(mut self, scores: TradeScores) -> Self {
        self.preparation = scores.preparation;
        self.entry_score = scores.entry;
        self.stop_loss = scores.stop_loss;
        self.target_score = scores.target;
        self.management = scores.management;
        self.rules = scores.rules;
        self
    }

    pub fn scores(&self) -> TradeScores {
        TradeScores {
            preparation: self.preparation,
            entry: self.entry_score,
            stop_loss: self.stop_loss,
            target: self.target_score,
            management: self.management,
            rules: self.rules,
        }
    }

    pub fn is_winner(&self) -> bool {
        self.status == WINNER_STATUS
    }

    pub fn is_stopped_out(&self) -> bool {
        self.stopped_out.unwrap_or(false)
    }

    /// Price distance from entry to stop (one R).
    pub fn risk(&self) -> f64 {
        (self.entry - self.stop).abs()
    }

    pub fn potential_r(&self) -> f64 {
        metrics::potential_r(Some(self.entry), Some(self.stop), self.target)
    }

    /// R-multiple implied by the exit price, `None` while the trade is open.
    pub fn realized_r(&self) -> Option<f64> {
        metrics::result(Some(self.entry), Some(self.stop), self.exit)
    }

    pub fn is_chicken_out(&self) -> bool {
        metrics::is_chicken_out(self.exit, self.target, self.is_stopped_out())
    }

    pub fn average_score(&self) -> Option<f64> {
        self.scores().average()
    }
}
