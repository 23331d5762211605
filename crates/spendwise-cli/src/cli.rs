//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spendwise - Track spending against monthly budgets
#[derive(Parser)]
#[command(name = "spendwise")]
#[command(about = "Self-hosted personal finance tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "spendwise.db", global = true)]
    pub db: PathBuf,

    /// Insight thresholds config file (TOML)
    ///
    /// Defaults to ~/.local/share/spendwise/config/insights.toml when present,
    /// otherwise built-in defaults are used.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set SPENDWISE_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory of static UI files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Manage transactions (list, add, edit, delete)
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Manage budgets (list, add, set, delete)
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Show spending overview
    Dashboard,

    /// Show insights about spending and budgets
    Insights,

    /// Generate reports
    Report {
        #[command(subcommand)]
        report: ReportType,
    },

    /// List categories and whether they have a budget
    Categories,
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List transactions, newest first
    List {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Record a new expense
    Add {
        /// Amount spent (positive)
        #[arg(short, long)]
        amount: f64,

        /// What the money was spent on (2-100 characters)
        #[arg(short, long)]
        description: String,

        /// Date (YYYY-MM-DD or RFC 3339, defaults to now)
        #[arg(long)]
        date: Option<String>,

        /// Category code (e.g. food, housing)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Change a transaction. Omitted fields keep their current values.
    Edit {
        /// Transaction ID
        id: i64,

        #[arg(short, long)]
        amount: Option<f64>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<String>,

        /// Category code, or "none" to clear
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// List budgets with spend so far
    List,

    /// Create a budget for a category
    Add {
        /// Category code (e.g. food)
        category: String,

        /// Monthly limit (positive)
        amount: f64,
    },

    /// Change the amount of an existing budget
    Set {
        /// Category code
        category: String,

        /// New monthly limit (positive)
        amount: f64,
    },

    /// Remove a category's budget
    Delete {
        /// Category code
        category: String,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Spending per category
    Categories,

    /// Budgeted versus spent
    Budgets,

    /// Spending per day of a month
    Daily {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}
