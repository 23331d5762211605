//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `load_config` - Load insight thresholds
//! - `parse_category` - Parse a category code argument
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use spendwise_core::models::Category;
use spendwise_core::{Database, InsightConfig};

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

/// Load insight thresholds from --config, the data-dir override, or built-in defaults
pub fn load_config(config_path: Option<&Path>) -> Result<InsightConfig> {
    InsightConfig::load(config_path).context("Failed to load insight config")
}

/// Parse a category code such as "food"
pub fn parse_category(code: &str) -> Result<Category> {
    code.parse::<Category>().map_err(|e| {
        let known: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        anyhow::anyhow!("{} (expected one of: {})", e, known.join(", "))
    })
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;

    if !db.is_encrypted() {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Set a budget: spendwise budgets add food 400");
    println!("  2. Record spending: spendwise transactions add -a 12.50 -d \"Lunch\" -c food");
    println!("  3. Start web UI: spendwise serve");

    Ok(())
}
