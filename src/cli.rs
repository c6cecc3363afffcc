use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

/// Savings projection engine.
#[derive(Parser)]
#[command(
    name = "projection-engine",
    version,
    about = "Calendar-aware savings accrual and goal projection"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the projection summary as JSON.
    Report(ReportArgs),
    /// Serve the projection HTTP API.
    Serve(ServeArgs),
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Directory holding plan.yaml and holidays.yaml.
    #[arg(short, long, default_value = "config/brl_btc")]
    pub config: PathBuf,

    /// Evaluate at this local time (e.g. 2026-01-16T10:30:00) instead of now.
    #[arg(long)]
    pub now: Option<NaiveDateTime>,

    /// Omit the audit trace from the output.
    #[arg(long)]
    pub no_audit: bool,
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Directory holding plan.yaml and holidays.yaml.
    #[arg(short, long, default_value = "config/brl_btc")]
    pub config: PathBuf,

    /// Address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,
}
