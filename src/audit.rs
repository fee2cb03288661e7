//! Audit driver: sweeps the messages tree and collects key findings.
//!
//! For every namespace file, the reference document is loaded and
//! flattened once, then each translation target is loaded, flattened and
//! diffed against it. A file that cannot be read or parsed only skips its
//! own (language, file) pair; the sweep always continues.

use crate::config::{Config, TRANSLATION_FILES};
use crate::i18n::{AuditMetrics, LanguageRegistry, PlaceholderValidator};
use crate::keys::{self, KeyDiff};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// A message file that could not be read or parsed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Findings keyed by language code, then by filename.
pub type FindingsByLanguage = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Everything one audit sweep found.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Keys present in the reference but missing in a translation
    pub missing: FindingsByLanguage,

    /// Keys present in a translation but missing in the reference
    pub extra: FindingsByLanguage,

    /// Placeholder drift in strings present in both documents
    pub placeholder_warnings: FindingsByLanguage,
}

impl AuditReport {
    /// Check if the sweep found nothing to report
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.placeholder_warnings.is_empty()
    }
}

/// Load and parse one message file.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Look up the value at a dotted key path.
///
/// Returns `None` for paths that do not resolve, including paths whose
/// individual JSON keys themselves contain dots.
fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |value, segment| value.get(segment))
}

/// Compare placeholder usage for keys present in both documents.
///
/// Only string leaves are compared; container keys and non-string leaves
/// have no placeholders to drift.
fn check_placeholders<'a>(
    reference: &Value,
    translation: &Value,
    shared_keys: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for key in shared_keys {
        let (Some(Value::String(ref_text)), Some(Value::String(trans_text))) =
            (lookup(reference, key), lookup(translation, key))
        else {
            continue;
        };

        let report = PlaceholderValidator::validate(ref_text, trans_text);
        for warning in report.warnings {
            warnings.push(format!("{}: {}", key, warning));
        }
    }

    warnings
}

/// Run the full audit sweep over the configured messages tree.
pub fn run_audit(config: &Config) -> AuditReport {
    let registry = LanguageRegistry::get();
    let reference = registry.reference();
    let translations = registry.list_translations();
    let metrics = AuditMetrics::global();
    let mut report = AuditReport::default();

    info!(
        "Auditing {} files in {} languages against {} ({})",
        TRANSLATION_FILES.len(),
        translations.len(),
        reference.name,
        reference.code
    );

    for filename in TRANSLATION_FILES {
        let reference_path = config.messages_dir.join(reference.code).join(filename);
        let reference_doc = match load_document(&reference_path) {
            Ok(doc) => {
                metrics.record_file_loaded();
                doc
            }
            Err(e) => {
                metrics.record_load_failure();
                warn!("✗ {} - {}", filename, e);
                continue;
            }
        };
        let reference_keys = keys::flatten(&reference_doc, "");

        for lang in &translations {
            let translation_path = config.messages_dir.join(lang.code).join(filename);
            let translation_doc = match load_document(&translation_path) {
                Ok(doc) => {
                    metrics.record_file_loaded();
                    doc
                }
                Err(e) => {
                    metrics.record_load_failure();
                    warn!("✗ {}/{} - {}", lang.code, filename, e);
                    continue;
                }
            };
            let translation_keys = keys::flatten(&translation_doc, "");

            let KeyDiff { missing, extra } = keys::diff(&reference_keys, &translation_keys);
            metrics.record_missing_keys(missing.len());
            metrics.record_extra_keys(extra.len());

            let warnings = check_placeholders(
                &reference_doc,
                &translation_doc,
                reference_keys.intersection(&translation_keys),
            );
            metrics.record_placeholder_warnings(warnings.len());

            if !missing.is_empty() {
                report
                    .missing
                    .entry(lang.code.to_string())
                    .or_default()
                    .insert(filename.to_string(), missing);
            }
            if !extra.is_empty() {
                report
                    .extra
                    .entry(lang.code.to_string())
                    .or_default()
                    .insert(filename.to_string(), extra);
            }
            if !warnings.is_empty() {
                report
                    .placeholder_warnings
                    .entry(lang.code.to_string())
                    .or_default()
                    .insert(filename.to_string(), warnings);
            }
        }
    }

    info!(
        "Audit sweep complete: {} files loaded, {} failures",
        metrics.files_loaded(),
        metrics.load_failures()
    );

    report
}
