//! Money Type
//!
//! Exact monetary amounts with a fixed scale of 2 fractional digits.
//! All wallet balances and transfer amounts MUST go through this type.
//!
//! ## Design Principles
//! 1. No floating point anywhere: amounts are `rust_decimal::Decimal`
//! 2. Explicit error handling: no silent truncation or rounding
//! 3. Checked arithmetic: overflow is an error, never a wrap
//!
//! ## Usage
//! ```ignore
//! let a: Money = "100.00".parse()?;
//! let b: Money = "0.01".parse()?;
//! let sum = a.checked_add(b)?;
//! assert_eq!(sum.to_string(), "100.01");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed number of fractional digits for every amount
pub const SCALE: u32 = 2;

/// Money conversion and arithmetic errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount too large, would overflow")]
    Overflow,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Signed fixed-point amount, scale 2
///
/// Construction rejects values carrying more than [`SCALE`] fractional
/// digits (even trailing zeros), so every `Money` in the system compares
/// exactly and round-trips through storage without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// 0.00
    pub fn zero() -> Self {
        Money(Decimal::new(0, SCALE))
    }

    /// Validate a raw decimal into Money
    ///
    /// # Errors
    /// * `PrecisionOverflow` - more than 2 fractional digits
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.scale() > SCALE {
            return Err(MoneyError::PrecisionOverflow {
                provided: value.scale(),
                max: SCALE,
            });
        }
        let mut v = value;
        v.rescale(SCALE);
        Ok(Money(v))
    }

    /// The underlying decimal value (always scale 2)
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Checked addition, errors on overflow
    pub fn checked_add(self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction, errors on overflow
    pub fn checked_sub(self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(m: Money) -> Decimal {
        m.0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| MoneyError::InvalidFormat(s.to_string()))?;
        Money::new(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.prec$}", self.0, prec = SCALE as usize)
    }
}
