use anyhow::Result;
use tracing::info;
use translation_audit::config::Config;
use translation_audit::i18n::AuditMetrics;
use translation_audit::{audit, report};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_audit=info".parse()?),
        )
        .init();

    info!("Starting translation key audit");

    let config = Config::from_env();
    info!("Messages directory: {}", config.messages_dir.display());

    let findings = audit::run_audit(&config);
    print!("{}", report::render(&findings, &config));

    let metrics = AuditMetrics::global().report();
    info!(
        "Done: {} missing keys, {} extra keys, {} placeholder warnings ({} files loaded, {} failed)",
        metrics.missing_keys,
        metrics.extra_keys,
        metrics.placeholder_warnings,
        metrics.files_loaded,
        metrics.load_failures
    );

    Ok(())
}
