//! Per-trade and per-journal risk metrics.
//!
//! Every function here is pure and total. Degenerate input maps to a neutral
//! sentinel (`0.0`, `0`, `false` or `None`) instead of `NaN`, infinity or a
//! panic, because the outputs are summed and averaged downstream.
//!
//! Guarded inputs are `Option<f64>`. A value is *usable* when it is present,
//! finite and non-zero; a zero price or tick value is treated the same as a
//! missing one. [`average_score`] is the exception: it only drops `None`.

use super::trade::TradeRecord;

/// Returns the value if it can take part in a calculation.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Drops a ratio that overflowed.
fn finite(value: f64) -> Option<f64> {
    Some(value).filter(|v| v.is_finite())
}

/// Distance between entry and stop measured in ticks.
pub fn stop_ticks(entry: Option<f64>, stop: Option<f64>, tick_value: Option<f64>) -> f64 {
    match (usable(entry), usable(stop), usable(tick_value)) {
        (Some(entry), Some(stop), Some(tick_value)) => {
            finite((entry - stop).abs() / tick_value).unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Reward-to-risk ratio of the planned target.
pub fn potential_r(entry: Option<f64>, stop: Option<f64>, target: Option<f64>) -> f64 {
    let (Some(entry), Some(stop), Some(target)) = (usable(entry), usable(stop), usable(target))
    else {
        return 0.0;
    };

    let risk = (entry - stop).abs();
    if risk == 0.0 {
        return 0.0;
    }
    finite((target - entry).abs() / risk).unwrap_or(0.0)
}

/// Realized outcome in R, signed: positive is a long-style win.
///
/// Returns `None` when any price is unusable ("no result yet") or the ratio
/// overflows, which callers must keep apart from `Some(0.0)` (a scratch exit,
/// or zero risk distance).
pub fn result(entry: Option<f64>, stop: Option<f64>, exit: Option<f64>) -> Option<f64> {
    let entry = usable(entry)?;
    let stop = usable(stop)?;
    let exit = usable(exit)?;

    let risk = (entry - stop).abs();
    if risk == 0.0 {
        return Some(0.0);
    }
    finite((exit - entry) / risk)
}

/// Mean of the self-assessment scores that were given.
///
/// Zero is a legitimate score here and is kept; only absent scores are dropped.
pub fn average_score(
    preparation: Option<f64>,
    entry: Option<f64>,
    stop_loss: Option<f64>,
    target: Option<f64>,
    management: Option<f64>,
    rules: Option<f64>,
) -> Option<f64> {
    let scores = [preparation, entry, stop_loss, target, management, rules];
    let (sum, count) = scores
        .iter()
        .flatten()
        .fold((0.0_f64, 0usize), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Percentage (0–100) of trades whose status is exactly `"Winner"`.
pub fn win_rate(trades: &[TradeRecord]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let winners = trades.iter().filter(|t| t.is_winner()).count();
    100.0 * winners as f64 / trades.len() as f64
}

/// Sum of the recorded R-multiples; trades without a result count as zero.
pub fn total_r(trades: &[TradeRecord]) -> f64 {
    trades.iter().map(|t| t.result.unwrap_or(0.0)).sum()
}

/// Whole contracts that keep the loss at the stop within the risk budget.
///
/// Always floors: fractional contracts cannot be held.
pub fn position_size(
    account_size: Option<f64>,
    risk_percent: Option<f64>,
    stop_ticks: Option<f64>,
    tick_value: Option<f64>,
) -> i64 {
    let (Some(account_size), Some(risk_percent), Some(stop_ticks), Some(tick_value)) = (
        usable(account_size),
        usable(risk_percent),
        usable(stop_ticks),
        usable(tick_value),
    ) else {
        return 0;
    };

    let risk_per_contract = stop_ticks * tick_value;
    if risk_per_contract == 0.0 {
        return 0;
    }

    let contracts = (account_size * risk_percent / 100.0 / risk_per_contract).floor();
    if !contracts.is_finite() {
        return 0;
    }
    contracts as i64
}

/// True when the position was closed short of its target without being stopped.
pub fn is_chicken_out(exit: Option<f64>, target: Option<f64>, stopped_out: bool) -> bool {
    match (usable(exit), usable(target)) {
        (Some(exit), Some(target)) => exit < target && !stopped_out,
        _ => false,
    }
}

/// R left on the table by chicken-out trades.
///
/// A trade whose entry equals its stop has no risk unit and contributes zero.
pub fn missed_r(trades: &[TradeRecord]) -> f64 {
    trades.iter().map(missed_r_for).sum()
}

fn missed_r_for(trade: &TradeRecord) -> f64 {
    if !is_chicken_out(trade.exit, trade.target, trade.is_stopped_out()) {
        return 0.0;
    }
    let (Some(exit), Some(target)) = (trade.exit, trade.target) else {
        return 0.0;
    };

    let risk = trade.risk();
    if risk == 0.0 || !risk.is_finite() {
        return 0.0;
    }
    finite((target - exit) / risk).unwrap_or(0.0)
}
