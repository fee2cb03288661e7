//! Console rendering of an audit report.
//!
//! Output keeps the shape the team is used to from the old comparison
//! script: one section per direction, grouped by language then by
//! namespace file, with a handful of example keys and a count of the rest.

use crate::audit::{AuditReport, FindingsByLanguage};
use crate::config::Config;
use crate::i18n::Language;
use chrono::Utc;

/// Render the full report to a string ready for stdout.
pub fn render(report: &AuditReport, config: &Config) -> String {
    let reference = Language::reference();
    let mut out = String::new();

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M UTC");
    out.push_str(&format!("Translation audit - {}\n", timestamp));

    if report.is_clean() {
        out.push_str(&format!(
            "\nAll translations are in sync with {} ({}).\n",
            reference.name(),
            reference.code()
        ));
        return out;
    }

    render_section(
        &mut out,
        &format!(
            "KEYS IN {} ({}) BUT MISSING IN OTHER LANGUAGES",
            reference.name().to_uppercase(),
            reference.code()
        ),
        "missing keys",
        &report.missing,
        config.max_example_keys,
    );

    render_section(
        &mut out,
        &format!(
            "KEYS IN OTHER LANGUAGES BUT MISSING IN {} ({})",
            reference.name().to_uppercase(),
            reference.code()
        ),
        "extra keys",
        &report.extra,
        config.max_example_keys,
    );

    render_section(
        &mut out,
        "PLACEHOLDER WARNINGS",
        "warnings",
        &report.placeholder_warnings,
        config.max_example_keys,
    );

    out
}

fn render_section(
    out: &mut String,
    title: &str,
    label: &str,
    findings: &FindingsByLanguage,
    max_examples: usize,
) {
    out.push_str(&format!("\n=== {} ===\n", title));

    if findings.is_empty() {
        out.push_str("(none)\n");
        return;
    }

    for (lang, files) in findings {
        out.push_str(&format!("\n--- {} ---\n", lang.to_uppercase()));
        for (filename, keys) in files {
            out.push_str(&format!("  {}: {} {}\n", filename, keys.len(), label));
            for key in keys.iter().take(max_examples) {
                out.push_str(&format!("    - {}\n", key));
            }
            if keys.len() > max_examples {
                out.push_str(&format!("    ... and {} more\n", keys.len() - max_examples));
            }
        }
    }
}
