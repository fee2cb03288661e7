//! Internationalization (i18n) module.
//!
//! This module centralizes everything locale-related: the registry of
//! supported languages, the validated `Language` type, placeholder
//! validation for translated strings, and audit observability.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `validator`: Placeholder consistency validation between reference and translation
//! - `metrics`: Audit observability counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! // Get the reference language (Greek)
//! let reference = Language::reference();
//!
//! // Create language from code
//! let german = Language::from_code("de")?;
//!
//! // List all translation targets
//! let targets = LanguageRegistry::get().list_translations();
//! ```

mod language;
mod metrics;
mod registry;
mod validator;

pub use language::Language;
pub use metrics::{AuditMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{PlaceholderValidator, ValidationReport};
