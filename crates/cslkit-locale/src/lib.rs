//! CSL locale resolution, term tables, and selection ordering.
//!
//! This crate resolves locale tags (`en`, `de-AT`, `-DE`) into concrete
//! language/region pairs, holds per-locale term and date-format tables, and
//! ranks candidate locales by selection priority for a citation item.
//!
//! Configuration lives in an explicit [`LocaleRegistry`] context object:
//! the default locale tag, default options, and the static language↔region
//! defaulting tables. Construct and configure the registry during
//! initialization, then share `&LocaleRegistry` with every reader.
//!
//! # Example
//!
//! ```rust
//! use cslkit_locale::{Locale, LocaleRegistry};
//!
//! let registry = LocaleRegistry::new();
//!
//! // A bare language tag is completed from the default tables.
//! let locale = Locale::new("de", &registry).unwrap();
//! assert_eq!(locale.to_string(), "de-DE");
//! assert!(Locale::new("en-US", &registry).unwrap().is_default(&registry));
//! ```

pub mod error;
pub mod locale;
pub mod metadata;
pub mod options;
pub mod registry;

// Re-export main types
pub use error::{Error, Result};
pub use locale::{DateFormat, Locale, LocaleRecord, Term};
pub use metadata::{Metadata, Translator};
pub use options::LocaleOptions;
pub use registry::LocaleRegistry;
