//! Locale defaults and global options.
//!
//! [`LocaleRegistry`] is an explicit context object holding the default
//! locale tag, the default locale options, and the static language↔region
//! default tables that drive auto-completion of partial locale tags.
//! Intended lifecycle: construct and configure during initialization, then
//! share immutably (`&LocaleRegistry`) with every reader.

use crate::locale::Locale;
use crate::options::LocaleOptions;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Default region per language. When a language maps to several regions in
/// the source list, the later pair wins (zh → TW).
static REGIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("af", "ZA"),
        ("ar", "AR"),
        ("bg", "BG"),
        ("ca", "AD"),
        ("cs", "CZ"),
        ("da", "DK"),
        ("de", "DE"),
        ("el", "GR"),
        ("en", "US"),
        ("es", "ES"),
        ("et", "EE"),
        ("fa", "IR"),
        ("fr", "FR"),
        ("he", "IL"),
        ("hu", "HU"),
        ("is", "IS"),
        ("it", "IT"),
        ("ja", "JP"),
        ("km", "KH"),
        ("ko", "KR"),
        ("mn", "MN"),
        ("nb", "NO"),
        ("nl", "NL"),
        ("nn", "NO"),
        ("pl", "PL"),
        ("pt", "PT"),
        ("ro", "RO"),
        ("ru", "RU"),
        ("sk", "SK"),
        ("sl", "SI"),
        ("sr", "RS"),
        ("sv", "SE"),
        ("th", "TH"),
        ("tr", "TR"),
        ("uk", "UA"),
        ("vi", "VN"),
        ("zh", "TW"),
    ])
});

/// Default language per region: the inversion of [`REGIONS`] (NO → nn,
/// CN and TW → zh) plus regions that default to another region's language.
static LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static str> =
        REGIONS.iter().map(|(lang, region)| (*region, *lang)).collect();
    map.insert("NO", "nn");
    map.insert("CN", "zh");
    map.insert("TW", "zh");
    map.extend([
        ("AT", "de"),
        ("BR", "pt"),
        ("CA", "en"),
        ("CH", "de"),
        ("GB", "en"),
    ]);
    map
});

/// Parse a locale tag of the form `xx`, `xx-YY`, or `-YY`, anchored at the
/// start of the string; trailing text is ignored. Returns the language and
/// region parts, at least one of which is present.
pub(crate) fn parse_tag(tag: &str) -> Result<(Option<&str>, Option<&str>)> {
    let bytes = tag.as_bytes();
    let mut pos = 0;

    let language = if bytes.len() >= 2
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_lowercase()
    {
        pos = 2;
        Some(&tag[0..2])
    } else {
        None
    };

    let region = if bytes.len() >= pos + 3
        && bytes[pos] == b'-'
        && bytes[pos + 1].is_ascii_uppercase()
        && bytes[pos + 2].is_ascii_uppercase()
    {
        Some(&tag[pos + 1..pos + 3])
    } else {
        None
    };

    if language.is_none() && region.is_none() {
        return Err(Error::InvalidLocaleFormat {
            tag: tag.to_string(),
        });
    }
    Ok((language, region))
}

/// Default-locale configuration and language↔region defaulting tables.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleRegistry {
    default: String,
    options: LocaleOptions,
}

impl LocaleRegistry {
    /// Create a registry with the standard defaults: default locale
    /// `en-US`, `punctuation-in-quote` on.
    pub fn new() -> Self {
        Self {
            default: "en-US".to_string(),
            options: LocaleOptions::default(),
        }
    }

    /// The default locale tag.
    pub fn default_tag(&self) -> &str {
        &self.default
    }

    /// Set the default locale tag. The tag is validated first; on failure
    /// the existing default is left unchanged.
    pub fn set_default(&mut self, tag: &str) -> Result<()> {
        parse_tag(tag)?;
        self.default = tag.to_string();
        Ok(())
    }

    /// The default locale options new locales start from.
    pub fn options(&self) -> &LocaleOptions {
        &self.options
    }

    /// Replace the default locale options.
    pub fn set_options(&mut self, options: LocaleOptions) {
        self.options = options;
    }

    /// The default region for a language, per the static tables.
    pub fn default_region(&self, language: &str) -> Option<&'static str> {
        REGIONS.get(language).copied()
    }

    /// The default language for a region, per the static tables.
    pub fn default_language(&self, region: &str) -> Option<&'static str> {
        LANGUAGES.get(region).copied()
    }

    /// Rank two candidate locales by selection priority; see
    /// [`Locale::compare`].
    pub fn compare(&self, a: &Locale, b: &Locale) -> Ordering {
        a.compare(b, self)
    }

    /// Sort candidate locales so the best match for this registry's
    /// defaults comes first.
    pub fn rank_candidates(&self, candidates: &mut [Locale]) {
        candidates.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
