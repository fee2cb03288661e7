//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a lightweight handle that
//! validates against the registry instead of hardcoding an enum per locale.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// This type represents a language that has been validated against the
/// registry. It ensures that only supported, enabled languages can be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "el", "en")
    code: &'static str,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "el", "de")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the reference language.
    ///
    /// This is the locale whose key set the audit treats as complete, and
    /// against which every other locale is compared.
    pub fn reference() -> Language {
        let config = LanguageRegistry::get().reference();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or `reference`).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "Greek", "Serbian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Ελληνικά", "Српски").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the reference language.
    pub fn is_reference(&self) -> bool {
        self.config().is_reference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_greek() {
        let language = Language::from_code("el").expect("Should succeed");
        assert_eq!(language.code(), "el");
        assert_eq!(language.name(), "Greek");
    }

    #[test]
    fn test_from_code_albanian() {
        let language = Language::from_code("sq").expect("Should succeed");
        assert_eq!(language.code(), "sq");
        assert_eq!(language.name(), "Albanian");
        assert_eq!(language.native_name(), "Shqip");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("ja");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        let result = Language::from_code("");
        assert!(result.is_err());
    }

    // ==================== reference Tests ====================

    #[test]
    fn test_reference_returns_greek() {
        let reference = Language::reference();
        assert_eq!(reference.code(), "el");
        assert!(reference.is_reference());
    }

    #[test]
    fn test_non_reference_language() {
        let english = Language::from_code("en").unwrap();
        assert!(!english.is_reference());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::reference();
        let lang2 = Language::from_code("el").unwrap();
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_language_inequality() {
        let greek = Language::from_code("el").unwrap();
        let german = Language::from_code("de").unwrap();
        assert_ne!(greek, german);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::from_code("fr").unwrap();
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }

    #[test]
    fn test_language_debug() {
        let lang = Language::from_code("mk").unwrap();
        let debug = format!("{:?}", lang);
        assert!(debug.contains("mk"));
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_config_access() {
        let lang = Language::from_code("sr").unwrap();
        let config = lang.config();
        assert_eq!(config.code, "sr");
        assert_eq!(config.name, "Serbian");
        assert_eq!(config.native_name, "Српски");
    }
}
