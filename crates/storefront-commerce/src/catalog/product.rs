//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Number of stars a rating is drawn with.
const STAR_COUNT: u8 = 5;

/// Average customer rating on a 0.0 to 5.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Create a rating. Values outside 0.0..=5.0 are rejected by
    /// [`Product::validate`], not here.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Check the rating lies on the five-star scale.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && (0.0..=MAX_RATING).contains(&self.0)
    }

    /// Split the rating into full, half and empty stars.
    ///
    /// Any fractional part is drawn as a single half star.
    pub fn stars(&self) -> StarBreakdown {
        let clamped = self.0.clamp(0.0, MAX_RATING);
        let full = clamped.floor() as u8;
        let half = u8::from(clamped.fract() > 0.0);
        StarBreakdown {
            full,
            half,
            empty: STAR_COUNT - full - half,
        }
    }
}

/// Star counts for drawing a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description shown on the product card.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Current price.
    pub price: Money,
    /// Price before discount, when discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Whether the product carries a discount badge.
    #[serde(default)]
    pub is_discounted: bool,
    /// Average customer rating.
    pub rating: Rating,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Image reference.
    pub image: String,
}

impl Product {
    /// Create a product with no discount, rating or image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price,
            original_price: None,
            is_discounted: false,
            rating: Rating::default(),
            review_count: 0,
            image: String::new(),
        }
    }

    /// Mark the product as discounted from `original_price`.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self.is_discounted = true;
        self
    }

    /// Set the rating and the number of reviews behind it.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = Rating::new(rating);
        self.review_count = review_count;
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check whether the product's searchable text contains `needle`.
    ///
    /// `needle` must already be lowercased and trimmed.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }

    /// Discount relative to the original price, rounded to whole percent.
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price?;
        if original.currency != self.price.currency || original.amount <= self.price.amount {
            return None;
        }
        let saved = original.amount - self.price.amount;
        let percent = (saved * 100 + original.amount / 2) / original.amount;
        u8::try_from(percent).ok()
    }

    /// Check the product's static data is consistent.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "product id must not be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if !self.price.is_positive() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has non-positive price {}",
                self.id, self.price.amount
            )));
        }
        if let Some(original) = self.original_price {
            if original.currency != self.price.currency || original.amount <= self.price.amount {
                return Err(CommerceError::ValidationError(format!(
                    "product {} original price {} must exceed price {}",
                    self.id, original, self.price
                )));
            }
        }
        if !self.rating.is_valid() {
            return Err(CommerceError::ValidationError(format!(
                "product {} rating {} is outside 0-{}",
                self.id,
                self.rating.value(),
                MAX_RATING
            )));
        }
        Ok(())
    }
}
