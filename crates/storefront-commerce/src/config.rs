//! Storefront engine configuration.

use std::time::Duration;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Products shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Artificial latency of a load-more request, in milliseconds.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;

/// Locale used to order vendor names.
pub const DEFAULT_COLLATION_LOCALE: &str = "fa";

/// Largest page size accepted by [`StorefrontConfig::validate`].
pub const MAX_PAGE_SIZE: usize = 100;

/// Tunables for the query and vendor-match engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated load-more latency in milliseconds.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,

    /// BCP-47 locale for vendor name collation.
    #[serde(default = "default_collation_locale")]
    pub collation_locale: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_load_delay_ms() -> u64 {
    DEFAULT_LOAD_DELAY_MS
}

fn default_collation_locale() -> String {
    DEFAULT_COLLATION_LOCALE.to_string()
}

impl StorefrontConfig {
    /// The load-more latency as a duration.
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the load-more latency.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Reject values the engines cannot work with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.page_size == 0 {
            return Err(CommerceError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(CommerceError::InvalidConfig(format!(
                "page_size {} exceeds maximum {}",
                self.page_size, MAX_PAGE_SIZE
            )));
        }
        if self.collation_locale.trim().is_empty() {
            return Err(CommerceError::InvalidConfig(
                "collation_locale must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            load_delay_ms: default_load_delay_ms(),
            collation_locale: default_collation_locale(),
        }
    }
}
