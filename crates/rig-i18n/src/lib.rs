//! Locales, locale-prefix path resolution and string tables for BinaRig.
//!
//! The active locale is a pure function of the request path: the first
//! path segment either names a supported locale or the request is
//! rewritten under the default (`/ms`). Nothing is persisted server-side.

mod dict;
mod locale;

pub use dict::{
    ActionStrings, DialogStrings, Dictionary, GeneralStrings, TableStrings, DICT_EN, DICT_MS,
};
pub use locale::{toggle, Locale, Resolution, DEFAULT_LOCALE};
