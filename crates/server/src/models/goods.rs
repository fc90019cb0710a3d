//! Goods domain types.

use market_records_core::{GoodsId, Price};
use serde::{Deserialize, Serialize};

use super::{FieldError, ValidationError, check_max_chars};

/// Maximum length of a goods name.
pub const NAME_MAX: usize = 64;
/// Maximum length of a goods description.
pub const DESCRIPTION_MAX: usize = 1000;

/// Client-supplied goods body (no identifier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl GoodsPayload {
    /// Validate the payload against the field constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        check_max_chars(&mut errors, "name", &self.name, NAME_MAX);
        if let Some(description) = &self.description {
            check_max_chars(&mut errors, "description", description, DESCRIPTION_MAX);
        }
        if let Err(e) = Price::new(self.price) {
            errors.push(FieldError {
                field: "price",
                message: e.to_string(),
            });
        }

        ValidationError::from_fields(errors)
    }
}

/// A goods record, including its store-assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Goods {
    pub goods_id: GoodsId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Goods {
    /// Build a record from a validated payload and a store-assigned id.
    #[must_use]
    pub fn new(goods_id: GoodsId, payload: GoodsPayload) -> Self {
        Self {
            goods_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
        }
    }
}
