//! Account risk settings and per-trade position sizing.

use super::error::JournalError;
use super::metrics;
use crate::ports::config_port::ConfigPort;

const SECTION: &str = "account";

#[derive(Debug, Clone, PartialEq)]
pub struct SizingConfig {
    pub account_size: f64,
    /// Percent of the account risked per trade, e.g. `1.0` for 1%.
    pub risk_percent: f64,
    pub tick_value: f64,
}

/// Values that take precedence over the config file, e.g. from CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingOverrides {
    pub account_size: Option<f64>,
    pub risk_percent: Option<f64>,
    pub tick_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizingPlan {
    pub stop_ticks: f64,
    pub contracts: i64,
    pub risk_amount: f64,
    pub risk_per_contract: f64,
}

impl SizingConfig {
    /// Reads the `[account]` section. All three keys are required and must be
    /// positive numbers.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, JournalError> {
        Self::resolve(Some(config), SizingOverrides::default())
    }

    /// Takes each value from `overrides` when set, otherwise from `config`.
    pub fn resolve(
        config: Option<&dyn ConfigPort>,
        overrides: SizingOverrides,
    ) -> Result<Self, JournalError> {
        Ok(Self {
            account_size: resolve_key(config, "account_size", overrides.account_size)?,
            risk_percent: resolve_key(config, "risk_percent", overrides.risk_percent)?,
            tick_value: resolve_key(config, "tick_value", overrides.tick_value)?,
        })
    }

    pub fn plan(&self, entry: f64, stop: f64) -> SizingPlan {
        let stop_ticks = metrics::stop_ticks(Some(entry), Some(stop), Some(self.tick_value));
        let contracts = metrics::position_size(
            Some(self.account_size),
            Some(self.risk_percent),
            Some(stop_ticks),
            Some(self.tick_value),
        );

        SizingPlan {
            stop_ticks,
            contracts,
            risk_amount: self.account_size * self.risk_percent / 100.0,
            risk_per_contract: stop_ticks * self.tick_value,
        }
    }
}

fn resolve_key(
    config: Option<&dyn ConfigPort>,
    key: &str,
    flag: Option<f64>,
) -> Result<f64, JournalError> {
    let value = match (flag, config) {
        (Some(value), _) => value,
        (None, Some(config)) => read_number(config, key)?,
        (None, None) => {
            return Err(JournalError::ConfigMissing {
                section: SECTION.into(),
                key: key.into(),
            });
        }
    };

    if !value.is_finite() || value <= 0.0 {
        return Err(JournalError::ConfigInvalid {
            section: SECTION.into(),
            key: key.into(),
            reason: "must be a positive number".into(),
        });
    }
    Ok(value)
}

fn read_number(config: &dyn ConfigPort, key: &str) -> Result<f64, JournalError> {
    config
        .get_float(SECTION, key)
        .map_err(|reason| JournalError::ConfigInvalid {
            section: SECTION.into(),
            key: key.into(),
            reason: format!("not a number: {reason}"),
        })?
        .ok_or_else(|| JournalError::ConfigMissing {
            section: SECTION.into(),
            key: key.into(),
        })
}
