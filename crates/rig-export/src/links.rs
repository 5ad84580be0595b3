//! Buy-search link construction.

use rig_commerce::Part;
use rig_i18n::Locale;

/// Where a locale's "Buy" action searches for a part.
///
/// One mapping for the whole application; every surface that renders a
/// buy link goes through here so the targets cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTarget {
    base: &'static str,
}

impl SearchTarget {
    /// The search target for a locale.
    ///
    /// Bahasa Melayu shoppers land on a Malaysian marketplace search;
    /// English falls back to a general web search.
    pub fn for_locale(locale: Locale) -> Self {
        let base = match locale {
            Locale::Ms => "https://shopee.com.my/search?keyword=",
            Locale::En => "https://www.google.com/search?q=",
        };
        Self { base }
    }

    /// A search URL for a part, built from its brand and name.
    pub fn url(&self, part: &Part) -> String {
        let query = format!("{} {}", part.brand, part.name);
        format!("{}{}", self.base, urlencoding::encode(&query))
    }
}
