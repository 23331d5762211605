//! Spendwise CLI - Personal finance tracker
//!
//! Usage:
//!   spendwise init                              Initialize database
//!   spendwise transactions add -a 12.5 -d Lunch Record an expense
//!   spendwise budgets add food 400              Set a monthly budget
//!   spendwise insights                          Show spending insights
//!   spendwise serve --port 3000                 Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_serve(
                &cli.db,
                &host,
                port,
                cli.no_encrypt,
                static_dir.as_deref(),
                config,
            )
            .await
        }
        Commands::Transactions { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_transactions_list(&db, 20),
                Some(TransactionsAction::List { limit }) => {
                    commands::cmd_transactions_list(&db, limit)
                }
                Some(TransactionsAction::Add {
                    amount,
                    description,
                    date,
                    category,
                }) => commands::cmd_transactions_add(
                    &db,
                    amount,
                    &description,
                    date.as_deref(),
                    category.as_deref(),
                ),
                Some(TransactionsAction::Edit {
                    id,
                    amount,
                    description,
                    date,
                    category,
                }) => commands::cmd_transactions_edit(
                    &db,
                    id,
                    commands::TransactionEdit {
                        amount,
                        description,
                        date,
                        category,
                    },
                ),
                Some(TransactionsAction::Delete { id }) => {
                    commands::cmd_transactions_delete(&db, id)
                }
            }
        }
        Commands::Budgets { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(BudgetsAction::List) => commands::cmd_budgets_list(&db),
                Some(BudgetsAction::Add { category, amount }) => {
                    commands::cmd_budgets_add(&db, &category, amount)
                }
                Some(BudgetsAction::Set { category, amount }) => {
                    commands::cmd_budgets_set(&db, &category, amount)
                }
                Some(BudgetsAction::Delete { category }) => {
                    commands::cmd_budgets_delete(&db, &category)
                }
            }
        }
        Commands::Dashboard => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_dashboard(&db, &config)
        }
        Commands::Insights => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_insights(&db, &config)
        }
        Commands::Report { report } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match report {
                ReportType::Categories => commands::cmd_report_categories(&db),
                ReportType::Budgets => commands::cmd_report_budgets(&db),
                ReportType::Daily { month } => {
                    commands::cmd_report_daily(&db, month.as_deref())
                }
            }
        }
        Commands::Categories => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_categories(&db)
        }
    }
}
