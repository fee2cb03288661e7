//! Message splitter binary - splits legacy single-file locales into
//! namespace files.
//!
//! Older checkouts keep one `<locale>.json` per language at the root of
//! the messages tree. This binary splits each of those into the
//! per-namespace layout the app loads (`<locale>/<namespace>.json`),
//! routing top-level keys through a fixed namespace mapping.
//!
//! Usage:
//!   cargo run --bin split
//!
//! Optional environment variables:
//! - MESSAGES_DIR (defaults to messages)

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use translation_audit::config::Config;
use translation_audit::i18n::LanguageRegistry;

/// Map a top-level message key to its namespace file.
fn namespace_for(key: &str) -> Option<&'static str> {
    match key {
        // Shared elements
        "Navigation" | "Common" => Some("common"),

        // Individual page namespaces
        "Dashboard" => Some("dashboard"),
        "Customers" => Some("customers"),
        "Vehicles" => Some("vehicles"),
        "Bookings" => Some("bookings"),
        "Calendar" => Some("calendar"),
        "Branches" => Some("branches"),
        "Cautions" => Some("cautions"),
        "Damages" => Some("damages"),
        "Maintenance" => Some("maintenance"),
        "Analytics" => Some("analytics"),
        "Notifications" => Some("notifications"),
        "Settings" => Some("settings"),

        // Auth & Home combined
        "Auth" => Some("auth"),
        "Home" => Some("home"),
        "Register" | "Login" => Some("landing"),

        _ => None,
    }
}

/// Split one locale's single-file messages into namespace files.
///
/// Returns the number of namespace files written; 0 means the locale had
/// no single-file source to split.
fn split_locale(messages_dir: &Path, code: &str) -> Result<usize> {
    let source_file = messages_dir.join(format!("{}.json", code));
    if !source_file.exists() {
        info!("Skipping {}: source file not found", code);
        return Ok(0);
    }

    let contents = fs::read_to_string(&source_file)
        .with_context(|| format!("Failed to read {}", source_file.display()))?;
    let source: Map<String, Value> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", source_file.display()))?;

    let target_dir = messages_dir.join(code);
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    // Group top-level keys by namespace; unknown keys land in common
    let mut namespaces: BTreeMap<&'static str, Map<String, Value>> = BTreeMap::new();
    for (key, value) in source {
        let namespace = match namespace_for(&key) {
            Some(namespace) => namespace,
            None => {
                warn!("Unknown key {} in {}.json, adding to common", key, code);
                "common"
            }
        };
        namespaces.entry(namespace).or_default().insert(key, value);
    }

    for (namespace, data) in &namespaces {
        let target_file = target_dir.join(format!("{}.json", namespace));
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&target_file, json)
            .with_context(|| format!("Failed to write {}", target_file.display()))?;
        info!("Created {}/{}.json", code, namespace);
    }

    Ok(namespaces.len())
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_audit=info".parse()?)
                .add_directive("split=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    let locales = LanguageRegistry::get().list_enabled();

    info!(
        "Splitting {} locales under {}",
        locales.len(),
        config.messages_dir.display()
    );

    let mut split_count = 0;
    for lang in locales {
        match split_locale(&config.messages_dir, lang.code) {
            Ok(0) => {}
            Ok(namespace_count) => {
                split_count += 1;
                info!(
                    "Split {}.json into {} namespace files",
                    lang.code, namespace_count
                );
            }
            Err(e) => warn!("Error processing {}: {:#}", lang.code, e),
        }
    }

    info!("Done: {} locales split", split_count);
    Ok(())
}
