//! Locale-aware string ordering for vendor names.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use crate::config::DEFAULT_COLLATION_LOCALE;
use crate::error::CommerceError;

/// Compares display names the way a reader of `locale` expects.
///
/// Codepoint order puts Persian letters such as `چ` after `و`; the collator
/// follows the alphabet instead.
pub struct NameCollator {
    locale: Locale,
    collator: Collator,
}

impl NameCollator {
    /// Build a collator for a BCP-47 locale tag.
    pub fn new(locale: &str) -> Result<Self, CommerceError> {
        let parsed: Locale = locale.parse().map_err(|e| CommerceError::InvalidLocale {
            locale: locale.to_string(),
            reason: format!("{}", e),
        })?;
        let collator = Collator::try_new(&parsed.clone().into(), CollatorOptions::new())
            .map_err(|e| CommerceError::InvalidLocale {
                locale: locale.to_string(),
                reason: format!("{}", e),
            })?;
        Ok(Self {
            locale: parsed,
            collator,
        })
    }

    /// Collator for the default storefront locale.
    pub fn persian() -> Result<Self, CommerceError> {
        Self::new(DEFAULT_COLLATION_LOCALE)
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollator")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}
