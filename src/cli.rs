//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::error::JournalError;
use crate::domain::sizing::{SizingConfig, SizingOverrides, SizingPlan};
use crate::domain::summary::TradeSummary;
use crate::domain::trade::TradeRecord;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::trade_port::TradePort;

#[derive(Parser, Debug)]
#[command(name = "rtrade", about = "Risk and R-multiple metrics for trade journals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a CSV trade journal
    Report {
        #[arg(short, long)]
        trades: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Size a position from account risk settings
    Size {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, allow_hyphen_values = true)]
        entry: f64,
        #[arg(long, allow_hyphen_values = true)]
        stop: f64,
        #[arg(long)]
        account_size: Option<f64>,
        #[arg(long)]
        risk_percent: Option<f64>,
        #[arg(long)]
        tick_value: Option<f64>,
    },
    /// Show R metrics for a single trade
    Trade {
        #[arg(long, allow_hyphen_values = true)]
        entry: f64,
        #[arg(long, allow_hyphen_values = true)]
        stop: f64,
        #[arg(long, allow_hyphen_values = true)]
        target: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        exit: Option<f64>,
        #[arg(long)]
        stopped_out: bool,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Report { trades, config } => run_report(trades.as_ref(), config.as_ref()),
        Command::Size {
            config,
            entry,
            stop,
            account_size,
            risk_percent,
            tick_value,
        } => run_size(
            config.as_ref(),
            entry,
            stop,
            SizingOverrides {
                account_size,
                risk_percent,
                tick_value,
            },
        ),
        Command::Trade {
            entry,
            stop,
            target,
            exit,
            stopped_out,
        } => {
            let mut trade = TradeRecord::new(entry, stop);
            trade.target = target;
            trade.exit = exit;
            trade.stopped_out = Some(stopped_out);
            print!("{}", format_trade(&trade));
            ExitCode::SUCCESS
        }
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    tracing::info!(path = %path.display(), "loading config");
    FileConfigAdapter::from_file(path).map_err(|e| fail(&e))
}

fn load_optional_config(path: Option<&PathBuf>) -> Result<Option<FileConfigAdapter>, ExitCode> {
    path.map(|p| load_config(p)).transpose()
}

fn fail(err: &JournalError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(err)
}

/// The `--trades` flag wins over `[journal] trades` in the config file.
pub fn resolve_trades_path(
    flag: Option<&PathBuf>,
    config: Option<&dyn ConfigPort>,
) -> Result<PathBuf, JournalError> {
    if let Some(path) = flag {
        return Ok(path.clone());
    }
    config
        .and_then(|c| c.get_string("journal", "trades"))
        .map(PathBuf::from)
        .ok_or_else(|| JournalError::ConfigMissing {
            section: "journal".into(),
            key: "trades".into(),
        })
}

/// Loads the journal, summarizes it and renders the report into `out`.
pub fn write_report(
    trades: &dyn TradePort,
    report: &dyn ReportPort,
    out: &mut dyn Write,
) -> Result<TradeSummary, JournalError> {
    let trades = trades.load_trades()?;
    if trades.is_empty() {
        tracing::warn!("trade journal is empty");
    }
    let summary = TradeSummary::compute(&trades);
    report.write(&summary, out)?;
    Ok(summary)
}

fn run_report(trades_flag: Option<&PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_optional_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);

    let trades_path = match resolve_trades_path(trades_flag, config_port) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    tracing::info!(path = %trades_path.display(), "loading trade journal");

    let report = match config_port {
        Some(c) => TextReportAdapter::from_config(c),
        None => TextReportAdapter::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match write_report(&CsvAdapter::new(trades_path), &report, &mut out) {
        Ok(summary) => {
            tracing::info!(trades = summary.trade_count, "report complete");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_size(
    config_path: Option<&PathBuf>,
    entry: f64,
    stop: f64,
    overrides: SizingOverrides,
) -> ExitCode {
    let config = match load_optional_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);

    let sizing = match SizingConfig::resolve(config_port, overrides) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    let plan = sizing.plan(entry, stop);
    if plan.contracts == 0 {
        tracing::warn!(
            risk_amount = plan.risk_amount,
            risk_per_contract = plan.risk_per_contract,
            "risk budget does not cover a single contract"
        );
    }
    print!("{}", format_plan(&plan));
    ExitCode::SUCCESS
}

pub fn format_plan(plan: &SizingPlan) -> String {
    format!(
        "Stop ticks:        {:.2}\n\
         Risk amount:       {:.2}\n\
         Risk per contract: {:.2}\n\
         Contracts:         {}\n",
        plan.stop_ticks, plan.risk_amount, plan.risk_per_contract, plan.contracts
    )
}

pub fn format_trade(trade: &TradeRecord) -> String {
    let result = trade
        .realized_r()
        .map(|r| format!("{r:.2}"))
        .unwrap_or_else(|| "open".to_string());
    let chicken = if trade.is_chicken_out() { "yes" } else { "no" };

    format!(
        "Risk:        {:.2}\n\
         Potential R: {:.2}\n\
         Result R:    {}\n\
         Chicken out: {}\n",
        trade.risk(),
        trade.potential_r(),
        result,
        chicken
    )
}
