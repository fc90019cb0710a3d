//! Validated price type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be greater than 0")]
    NotPositive,
    /// The amount exceeds the maximum allowed.
    #[error("price must be at most {max}")]
    TooLarge {
        /// Maximum allowed amount.
        max: f64,
    },
    /// The amount is NaN or infinite.
    #[error("price must be a finite number")]
    NotFinite,
}

/// A goods price in the store's single implicit currency.
///
/// ## Constraints
///
/// - Must be finite
/// - Must satisfy `0 < price <= 100000`
///
/// ## Examples
///
/// ```
/// use market_records_core::Price;
///
/// assert!(Price::new(19.99).is_ok());
/// assert!(Price::new(100_000.0).is_ok());
///
/// assert!(Price::new(0.0).is_err());
/// assert!(Price::new(-1.0).is_err());
/// assert!(Price::new(100_000.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct Price(f64);

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl Price {
    /// Maximum allowed price.
    pub const MAX: f64 = 100_000.0;

    /// Construct a `Price`, validating the range.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not finite, is zero or negative,
    /// or exceeds [`Price::MAX`].
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if amount <= 0.0 {
            return Err(PriceError::NotPositive);
        }
        if amount > Self::MAX {
            return Err(PriceError::TooLarge { max: Self::MAX });
        }
        Ok(Self(amount))
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "sqlite")]
impl ::sqlx::Type<::sqlx::Sqlite> for Price {
    fn type_info() -> ::sqlx::sqlite::SqliteTypeInfo {
        <f64 as ::sqlx::Type<::sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &::sqlx::sqlite::SqliteTypeInfo) -> bool {
        <f64 as ::sqlx::Type<::sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> ::sqlx::Decode<'r, ::sqlx::Sqlite> for Price {
    fn decode(
        value: ::sqlx::sqlite::SqliteValueRef<'r>,
    ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
        let amount = <f64 as ::sqlx::Decode<::sqlx::Sqlite>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> ::sqlx::Encode<'q, ::sqlx::Sqlite> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<::sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
        <f64 as ::sqlx::Encode<'q, ::sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}
