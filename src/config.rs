use std::path::PathBuf;

/// Namespace files expected in every language directory.
pub const TRANSLATION_FILES: [&str; 15] = [
    "analytics.json",
    "auth.json",
    "bookings.json",
    "branches.json",
    "calendar.json",
    "cautions.json",
    "common.json",
    "customers.json",
    "damages.json",
    "dashboard.json",
    "landing.json",
    "maintenance.json",
    "notifications.json",
    "settings.json",
    "vehicles.json",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the messages tree, one subdirectory per language code
    pub messages_dir: PathBuf,

    /// How many example keys to print per file before truncating
    pub max_example_keys: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            messages_dir: std::env::var("MESSAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("messages")),
            max_example_keys: 5,
        }
    }
}
