//! Locale rendering options.

use serde::{Deserialize, Serialize};

/// Style-behavior options a locale carries.
///
/// New locales start from the registry's defaults and may be overridden by
/// a locale source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOptions {
    /// Whether punctuation is moved inside closing quotation marks.
    #[serde(rename = "punctuation-in-quote", default = "default_true")]
    pub punctuation_in_quote: bool,

    /// Whether ordinal day numbers are limited to the first of the month.
    #[serde(rename = "limit-day-ordinals-to-day-1", default)]
    pub limit_day_ordinals_to_day_1: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LocaleOptions {
    fn default() -> Self {
        Self {
            punctuation_in_quote: true,
            limit_day_ordinals_to_day_1: false,
        }
    }
}
