use clap::{Parser, Subcommand};
use configuration::LogLevel;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// A small inventory tool: products, markups, stock value and profit.
#[derive(Parser, Debug)]
#[command(name = "nova", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to an optional `nova.toml` in the working directory).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Inventory file to use instead of `storage.path`.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Log level override.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive menu (default).
    Shell,

    /// Add one product and sync. Missing fields are asked for.
    Add(AddArgs),

    /// Show every product with its sell price.
    List,

    /// Remove the product at ROW (as numbered by `list`) and sync.
    Remove {
        row: usize,
    },

    /// Show investment, estimated revenue and net profit.
    Report {
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug, Clone, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Cost price per unit.
    #[arg(long)]
    pub cost: Option<Decimal>,

    /// Markup in percent, e.g. 20 for +20%.
    #[arg(long)]
    pub markup: Option<Decimal>,

    /// Units in stock.
    #[arg(long)]
    pub stock: Option<i64>,
}
