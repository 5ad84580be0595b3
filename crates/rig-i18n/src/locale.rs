//! Locale enumeration and locale-prefix path handling.

use crate::dict::{Dictionary, DICT_EN, DICT_MS};
use rig_commerce::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The default locale, used whenever a path carries no recognized prefix.
pub const DEFAULT_LOCALE: Locale = Locale::Ms;

/// Path prefixes that bypass locale resolution entirely: bundled assets,
/// the API surface, the favicon and the health probe.
const RESERVED_PREFIXES: [&str; 2] = ["/_next", "/api"];
const RESERVED_EXACT: [&str; 2] = ["/favicon.ico", "/_health"];

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Bahasa Melayu (default).
    #[default]
    Ms,
    /// English.
    En,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Ms, Locale::En];

    /// The path-segment form ("ms" / "en").
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ms => "ms",
            Locale::En => "en",
        }
    }

    /// Parse a path segment; `None` for anything unsupported.
    pub fn from_segment(s: &str) -> Option<Self> {
        match s {
            "ms" => Some(Locale::Ms),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// The other supported locale.
    pub fn other(&self) -> Self {
        match self {
            Locale::Ms => Locale::En,
            Locale::En => Locale::Ms,
        }
    }

    /// The string table for this locale.
    pub fn dict(&self) -> &'static Dictionary {
        match self {
            Locale::Ms => &DICT_MS,
            Locale::En => &DICT_EN,
        }
    }

    /// Resolve the locale for a request path.
    ///
    /// Total over all inputs: the first non-empty segment decides, and
    /// anything unrecognized (including reserved paths) resolves to the
    /// default.
    pub fn resolve(path: &str) -> Self {
        match Resolution::of(path) {
            Resolution::Resolved(locale) => locale,
            Resolution::Rewrite { .. } | Resolution::Bypass => DEFAULT_LOCALE,
        }
    }

    /// Format a price the way this locale writes MYR amounts.
    ///
    /// Bahasa Melayu separates the currency code from the amount
    /// ("RM 189.00"); English runs them together ("RM189.00").
    pub fn format_price(&self, price: Price) -> String {
        let plain = price.display();
        match self {
            Locale::Ms => plain.replacen("RM", "RM ", 1),
            Locale::En => plain,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of locale resolution for a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Reserved infrastructure path; pass through untouched.
    Bypass,
    /// The path already carries a supported locale prefix.
    Resolved(Locale),
    /// No recognized prefix; serve the default locale and rewrite the
    /// request to the default-prefixed path.
    Rewrite {
        /// Always the default locale.
        locale: Locale,
        /// `/ms` + the original path, unchanged.
        target: String,
    },
}

impl Resolution {
    /// Classify a request path.
    pub fn of(path: &str) -> Self {
        if is_reserved(path) {
            return Resolution::Bypass;
        }

        let first = path.split('/').find(|seg| !seg.is_empty()).unwrap_or("");
        match Locale::from_segment(first) {
            Some(locale) => Resolution::Resolved(locale),
            None => Resolution::Rewrite {
                locale: DEFAULT_LOCALE,
                target: format!("/{}{}", DEFAULT_LOCALE.as_str(), path),
            },
        }
    }
}

fn is_reserved(path: &str) -> bool {
    RESERVED_EXACT.contains(&path)
        || RESERVED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

/// Swap the locale segment of a path for the other supported locale,
/// preserving the remainder.
///
/// A path with no locale segment is treated as already under the default,
/// so toggling it lands on `/en`.
pub fn toggle(path: &str) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    let (next, remainder) = match Locale::from_segment(first) {
        Some(locale) => (locale.other(), rest),
        None => (
            DEFAULT_LOCALE.other(),
            if trimmed.is_empty() { None } else { Some(trimmed) },
        ),
    };

    match remainder {
        Some(rest) if !rest.is_empty() => format!("/{}/{}", next.as_str(), rest),
        _ => format!("/{}", next.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefixed_paths() {
        assert_eq!(Locale::resolve("/en/anything"), Locale::En);
        assert_eq!(Locale::resolve("/ms/anything"), Locale::Ms);
        assert_eq!(Locale::resolve("/en"), Locale::En);
    }

    #[test]
    fn test_resolve_defaults_on_unknown_prefix() {
        assert_eq!(Locale::resolve("/xx/anything"), Locale::Ms);
        assert_eq!(Locale::resolve("/foo"), Locale::Ms);
        assert_eq!(Locale::resolve("/"), Locale::Ms);
        assert_eq!(Locale::resolve(""), Locale::Ms);
    }

    #[test]
    fn test_rewrite_prepends_default_unchanged() {
        match Resolution::of("/foo") {
            Resolution::Rewrite { locale, target } => {
                assert_eq!(locale, Locale::Ms);
                assert_eq!(target, "/ms/foo");
            }
            other => panic!("expected rewrite, got {:?}", other),
        }

        match Resolution::of("/xx/anything") {
            Resolution::Rewrite { target, .. } => assert_eq!(target, "/ms/xx/anything"),
            other => panic!("expected rewrite, got {:?}", other),
        }
    }

    #[test]
    fn test_reserved_paths_bypass() {
        assert_eq!(Resolution::of("/_next/chunk.js"), Resolution::Bypass);
        assert_eq!(Resolution::of("/api/parts"), Resolution::Bypass);
        assert_eq!(Resolution::of("/favicon.ico"), Resolution::Bypass);
        assert_eq!(Resolution::of("/_health"), Resolution::Bypass);
    }

    #[test]
    fn test_prefixed_path_is_resolved_not_rewritten() {
        assert_eq!(Resolution::of("/en/builds"), Resolution::Resolved(Locale::En));
        assert_eq!(Resolution::of("/ms"), Resolution::Resolved(Locale::Ms));
    }

    #[test]
    fn test_toggle_swaps_locale_segment() {
        assert_eq!(toggle("/ms/x"), "/en/x");
        assert_eq!(toggle("/en/x"), "/ms/x");
        assert_eq!(toggle("/en"), "/ms");
        assert_eq!(toggle("/ms"), "/en");
    }

    #[test]
    fn test_toggle_unprefixed_treated_as_default() {
        assert_eq!(toggle("/x"), "/en/x");
        assert_eq!(toggle("/"), "/en");
    }

    #[test]
    fn test_toggle_preserves_deep_paths() {
        assert_eq!(toggle("/ms/a/b/c"), "/en/a/b/c");
    }

    #[test]
    fn test_format_price_per_locale() {
        let price = Price::from_ringgit(1234.5);
        assert_eq!(Locale::En.format_price(price), "RM1,234.50");
        assert_eq!(Locale::Ms.format_price(price), "RM 1,234.50");
    }
}
