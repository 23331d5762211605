//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use spendwise_core::InsightConfig;

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    no_encrypt: bool,
    static_dir: Option<&Path>,
    insights: InsightConfig,
) -> Result<()> {
    println!("🚀 Starting Spendwise web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    println!(
        "   Insights: warn past {}% of budget, flag transactions over ${:.2}",
        insights.near_limit_percent, insights.large_transaction_amount
    );
    if no_encrypt {
        println!("   ⚠️  Encryption DISABLED (--no-encrypt)");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path, no_encrypt)?;

    let config = spendwise_server::ServerConfig::from_env(insights);

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;
    spendwise_server::serve_with_config(db, host, port, static_dir_str, config).await?;

    Ok(())
}
