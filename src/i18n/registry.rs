//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every locale the messages
//! tree carries. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "el", "en", "de")
    pub code: &'static str,

    /// English name of the language (e.g., "Greek", "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Ελληνικά", "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the reference language the audit treats as the
    /// source of truth (only one should be true)
    pub is_reference: bool,

    /// Whether this language is enabled for auditing
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Contains all supported languages and provides methods to query them.
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "el", "en")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, reference included.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all enabled translation targets (everything except the reference).
    ///
    /// These are the languages each audit pass compares against the
    /// reference, in registry order.
    pub fn list_translations(&self) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| lang.enabled && !lang.is_reference)
            .collect()
    }

    /// Get the reference language configuration.
    ///
    /// The reference language is the locale whose key set is treated as
    /// complete. There should be exactly one.
    ///
    /// # Panics
    /// Panics if no reference language is found or if multiple are defined
    /// (this indicates a configuration error).
    pub fn reference(&self) -> &LanguageConfig {
        let reference_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_reference)
            .collect();

        match reference_langs.len() {
            0 => panic!("No reference language found in registry"),
            1 => reference_langs[0],
            _ => panic!("Multiple reference languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
///
/// Greek is the reference locale; the rest are the translation targets
/// shipped in the messages tree.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "el",
            name: "Greek",
            native_name: "Ελληνικά",
            is_reference: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ro",
            name: "Romanian",
            native_name: "Română",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "sq",
            name: "Albanian",
            native_name: "Shqip",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "sr",
            name: "Serbian",
            native_name: "Српски",
            is_reference: false,
            enabled: true,
        },
        LanguageConfig {
            code: "mk",
            name: "Macedonian",
            native_name: "Македонски",
            is_reference: false,
            enabled: true,
        },
    ]
}
