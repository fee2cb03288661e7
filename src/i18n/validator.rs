//! Translation quality validation module.
//!
//! This module provides validation for translated messages to ensure that
//! interpolation placeholders are preserved during translation. The app
//! renders messages with next-intl, so a `{variable}` that exists in the
//! reference string but not in the translation silently drops data at
//! render time, and an invented placeholder fails to resolve.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing warnings about a translated string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Non-fatal findings about placeholder drift
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean
    pub fn is_clean(&self) -> bool {
        !self.has_warnings()
    }
}

/// Validator for placeholder consistency between a reference string and
/// its translation.
pub struct PlaceholderValidator;

// Regex pattern for extraction (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl PlaceholderValidator {
    /// Validate that a translation preserves the `{placeholder}` variables
    /// of the reference string.
    ///
    /// Placeholders are compared as sets: translations reorder words
    /// freely, so position does not matter, only presence.
    ///
    /// # Arguments
    /// * `reference` - The reference-language string
    /// * `translated` - The translated string
    ///
    /// # Returns
    /// A `ValidationReport` containing any warnings found.
    pub fn validate(reference: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let ref_placeholders = Self::extract_placeholders(reference);
        let trans_placeholders = Self::extract_placeholders(translated);

        let dropped: Vec<_> = ref_placeholders.difference(&trans_placeholders).collect();
        if !dropped.is_empty() {
            report
                .warnings
                .push(format!("translation drops {:?}", dropped));
        }

        let invented: Vec<_> = trans_placeholders.difference(&ref_placeholders).collect();
        if !invented.is_empty() {
            report
                .warnings
                .push(format!("translation adds {:?}", invented));
        }

        report
    }

    /// Extract all `{placeholder}` names from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
