//! Journal-level summary statistics.

use chrono::NaiveDate;

use super::metrics;
use super::trade::TradeRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct TradeSummary {
    pub trade_count: usize,
    pub winners: usize,
    pub win_rate: f64,
    pub total_r: f64,
    pub average_r: f64,
    pub chicken_outs: usize,
    pub missed_r: f64,
    pub average_potential_r: f64,
    pub average_score: Option<f64>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl TradeSummary {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let winners = trades.iter().filter(|t| t.is_winner()).count();
        let chicken_outs = trades.iter().filter(|t| t.is_chicken_out()).count();

        let total_r = metrics::total_r(trades);
        let with_result = trades.iter().filter(|t| t.result.is_some()).count();
        let average_r = if with_result > 0 {
            total_r / with_result as f64
        } else {
            0.0
        };

        let potentials: Vec<f64> = trades
            .iter()
            .map(TradeRecord::potential_r)
            .filter(|r| *r != 0.0)
            .collect();
        let average_potential_r = mean(&potentials).unwrap_or(0.0);

        let scores: Vec<f64> = trades
            .iter()
            .filter_map(TradeRecord::average_score)
            .collect();

        TradeSummary {
            trade_count: trades.len(),
            winners,
            win_rate: metrics::win_rate(trades),
            total_r,
            average_r,
            chicken_outs,
            missed_r: metrics::missed_r(trades),
            average_potential_r,
            average_score: mean(&scores),
            first_date: trades.iter().filter_map(|t| t.date).min(),
            last_date: trades.iter().filter_map(|t| t.date).max(),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
