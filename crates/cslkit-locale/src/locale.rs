//! A resolved locale: language/region pair, term and date-format tables.

use crate::metadata::Metadata;
use crate::options::LocaleOptions;
use crate::registry::{LocaleRegistry, parse_tag};
use crate::{Error, Result};
use hashlink::LinkedHashMap;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

/// A translated term: either a plain value or single/multiple variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Term {
    /// Term key (e.g. "and", "et-al", "editor").
    pub name: String,
    /// Singular form of the term.
    #[serde(default)]
    pub single: Option<String>,
    /// Plural form of the term.
    #[serde(default)]
    pub multiple: Option<String>,
    /// Simple value (when single/multiple are not used).
    #[serde(default)]
    pub value: Option<String>,
}

impl Term {
    /// The rendered text for this term, preferring the requested plurality
    /// and falling back through the other variants.
    pub fn text(&self, plural: bool) -> Option<&str> {
        let (first, last) = if plural {
            (&self.multiple, &self.single)
        } else {
            (&self.single, &self.multiple)
        };
        first
            .as_deref()
            .or(self.value.as_deref())
            .or(last.as_deref())
    }
}

/// A named date format. The format body is kept opaque; rendering dates is
/// outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DateFormat {
    /// Format key (e.g. "text", "numeric").
    pub name: String,
    /// The format specification, as written in the source record.
    #[serde(default)]
    pub format: String,
}

/// A deserializable locale source record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleRecord {
    /// Locale tag (`xx`, `xx-YY`, or `-YY`); the registry default applies
    /// when absent.
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub options: Option<LocaleOptions>,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub dates: Vec<DateFormat>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// One resolved language/region pair with its term and date-format tables.
///
/// At least one of language/region is always set; partial tags are
/// completed from the registry's default tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    language: Option<String>,
    region: Option<String>,
    options: LocaleOptions,
    terms: LinkedHashMap<String, Term>,
    dates: LinkedHashMap<String, DateFormat>,
    metadata: Option<Metadata>,
}

impl Locale {
    /// Create a locale from a tag, completing the missing part from the
    /// registry's default tables and starting from its default options.
    pub fn new(tag: &str, registry: &LocaleRegistry) -> Result<Self> {
        let mut locale = Self {
            language: None,
            region: None,
            options: registry.options().clone(),
            terms: LinkedHashMap::new(),
            dates: LinkedHashMap::new(),
            metadata: None,
        };
        locale.set(tag, registry)?;
        Ok(locale)
    }

    /// Build a locale from a source record. The record's tag (or the
    /// registry default when absent) resolves language and region; terms,
    /// date formats, options, and metadata are copied over.
    pub fn from_record(record: LocaleRecord, registry: &LocaleRegistry) -> Result<Self> {
        let tag = record.lang.as_deref().unwrap_or(registry.default_tag());
        let mut locale = Self::new(tag, registry)?;
        if let Some(options) = record.options {
            locale.options = options;
        }
        for term in record.terms {
            locale.store_term(term);
        }
        for date in record.dates {
            locale.store_date_format(date);
        }
        locale.metadata = record.metadata;
        Ok(locale)
    }

    /// Set language and region from a locale tag.
    ///
    /// `en` sets the language to `en` and the region to its default (`US`);
    /// `de-AT` sets both as given; `-DE` sets the region to `DE` and the
    /// language to its default (`de`). A malformed tag fails with
    /// [`Error::InvalidLocaleFormat`] and leaves the locale unchanged.
    pub fn set(&mut self, tag: &str, registry: &LocaleRegistry) -> Result<&mut Self> {
        let (language, region) = parse_tag(tag)?;
        match (language, region) {
            (Some(language), Some(region)) => {
                self.language = Some(language.to_string());
                self.region = Some(region.to_string());
            }
            (Some(language), None) => {
                self.language = Some(language.to_string());
                self.region = registry.default_region(language).map(str::to_string);
            }
            (None, Some(region)) => {
                self.language = registry.default_language(region).map(str::to_string);
                self.region = Some(region.to_string());
            }
            (None, None) => unreachable!("parse_tag rejects tags with neither part"),
        }
        Ok(self)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn set_language(&mut self, language: Option<&str>) {
        self.language = language.map(str::to_string);
    }

    pub fn set_region(&mut self, region: Option<&str>) {
        self.region = region.map(str::to_string);
    }

    /// The locale's options.
    pub fn options(&self) -> &LocaleOptions {
        &self.options
    }

    /// The locale's source-record metadata, if any.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Whether this locale's tag equals the registry's default tag.
    pub fn is_default(&self, registry: &LocaleRegistry) -> bool {
        self.to_string() == registry.default_tag()
    }

    /// Whether the region is the default region for the language.
    pub fn is_default_region(&self, registry: &LocaleRegistry) -> bool {
        match (self.language.as_deref(), self.region.as_deref()) {
            (Some(language), Some(region)) => {
                registry.default_region(language) == Some(region)
            }
            _ => false,
        }
    }

    /// Whether the language is the default language for the region.
    pub fn is_default_language(&self, registry: &LocaleRegistry) -> bool {
        match (self.language.as_deref(), self.region.as_deref()) {
            (Some(language), Some(region)) => {
                registry.default_language(region) == Some(language)
            }
            _ => false,
        }
    }

    /// Store a term, replacing any previous definition of the same key.
    pub fn store_term(&mut self, term: Term) {
        self.terms.insert(term.name.clone(), term);
    }

    /// Look up a term by key.
    pub fn term(&self, name: &str) -> Option<&Term> {
        self.terms.get(name)
    }

    /// The rendered text of a term, honoring the plurality fallback chain.
    pub fn term_text(&self, name: &str, plural: bool) -> Option<&str> {
        self.term(name).and_then(|t| t.text(plural))
    }

    /// Iterate all terms in insertion order. Lazy and restartable.
    pub fn each_term(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    /// Store a date format, replacing any previous definition of the key.
    pub fn store_date_format(&mut self, format: DateFormat) {
        self.dates.insert(format.name.clone(), format);
    }

    /// Look up a date format by key.
    pub fn date_format(&self, name: &str) -> Option<&DateFormat> {
        self.dates.get(name)
    }

    /// Iterate all date formats in insertion order. Lazy and restartable.
    pub fn each_date(&self) -> impl Iterator<Item = &DateFormat> {
        self.dates.values()
    }

    /// Ordinal-number formatting is intentionally not implemented; callers
    /// must treat this as a hard failure.
    pub fn ordinalize(&self, _number: u32) -> Result<String> {
        Err(Error::NotImplemented {
            operation: "ordinalize",
        })
    }

    /// Rank this locale against another for selection priority.
    ///
    /// Locales sort by language, then region, alphabetically, with two
    /// exceptions: the registry's default locale always comes first, and
    /// within a language its default region comes before the others (de-DE
    /// before de-AT). An absent language or region sorts before any
    /// present one.
    pub fn compare(&self, other: &Locale, registry: &LocaleRegistry) -> Ordering {
        if self.language == other.language && self.region == other.region {
            Ordering::Equal
        } else if self.is_default(registry) {
            Ordering::Less
        } else if other.is_default(registry) {
            Ordering::Greater
        } else if self.language == other.language {
            if self.is_default_region(registry) {
                Ordering::Less
            } else if other.is_default_region(registry) {
                Ordering::Greater
            } else {
                self.region.cmp(&other.region)
            }
        } else {
            self.language.cmp(&other.language)
        }
    }
}

impl fmt::Display for Locale {
    /// Language and region joined by `-`, omitting whichever is absent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.language.as_deref(), self.region.as_deref()) {
            (Some(language), Some(region)) => write!(f, "{}-{}", language, region),
            (Some(language), None) => write!(f, "{}", language),
            (None, Some(region)) => write!(f, "{}", region),
            (None, None) => Ok(()),
        }
    }
}
