//! Locale-aware ordering for catalog entries.
//!
//! The comparator is an explicit value built once and passed to the sort,
//! never process-wide locale state. Turkish is the default target locale, so
//! `C < Ç < D`, `G < Ğ < H`, `I`/`ı` before `İ`/`i`, `O < Ö`, `S < Ş`, `U < Ü`.
//!
//! When the locale tag does not parse or collation data cannot be loaded the
//! comparator degrades to plain code-point order without surfacing an error.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::Locale;
use std::cmp::Ordering;

/// A string comparator for one target locale.
pub enum Collation {
    /// CLDR collation for the configured locale.
    Locale(CollatorBorrowed<'static>),
    /// Code-point order. Total and deterministic.
    Ordinal,
}

impl Collation {
    /// Build a comparator for a BCP-47 locale tag such as `"tr"`.
    ///
    /// An empty tag selects [`Collation::Ordinal`] directly.
    pub fn for_locale(tag: &str) -> Self {
        if tag.trim().is_empty() {
            return Self::Ordinal;
        }
        let locale = match tag.parse::<Locale>() {
            Ok(locale) => locale,
            Err(e) => {
                tracing::debug!("collation locale {tag:?} did not parse ({e}), using ordinal order");
                return Self::Ordinal;
            }
        };
        match Collator::try_new(locale.into(), CollatorOptions::default()) {
            Ok(collator) => Self::Locale(collator),
            Err(e) => {
                tracing::debug!("no collation data for {tag:?} ({e}), using ordinal order");
                Self::Ordinal
            }
        }
    }

    pub fn is_ordinal(&self) -> bool {
        matches!(self, Self::Ordinal)
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            Self::Locale(collator) => collator.compare(left, right),
            Self::Ordinal => left.cmp(right),
        }
    }

    /// Compare two `(category, title)` keys: category first, then title.
    pub fn compare_keys(&self, left: (&str, &str), right: (&str, &str)) -> Ordering {
        self.compare(left.0, right.0)
            .then_with(|| self.compare(left.1, right.1))
    }

    /// Stable sort by a `(category, title)` key. Ties keep their input order.
    pub fn sort_by_key<T>(&self, items: &mut [T], key: impl Fn(&T) -> (&str, &str)) {
        items.sort_by(|a, b| self.compare_keys(key(a), key(b)));
    }
}

impl std::fmt::Debug for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locale(_) => f.write_str("Collation::Locale"),
            Self::Ordinal => f.write_str("Collation::Ordinal"),
        }
    }
}
