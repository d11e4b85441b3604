//! Asset quantity as an 18-decimal fixed-point integer.
//!
//! A [`Quantity`] stores a fractional amount of the tracked asset as an
//! `i128` scaled by 10^18, so the smallest representable unit is 10^-18 of
//! one asset unit. All arithmetic stays in scaled integers; there is no
//! floating point anywhere on the quantity path.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a quantity literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuantityError {
    /// The input is not of the form `[integer]["." fractional]` with decimal
    /// digits only, or its value does not fit the scaled representation.
    #[error("invalid quantity literal {input:?}")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },
}

/// A fixed-point asset quantity scaled by 10^18.
///
/// Signed: purchase lines carry negative quantities for returns. Stored
/// inventory movements keep quantities non-negative and express direction
/// structurally (`qty_in` vs `qty_out`).
///
/// # Examples
///
/// ```
/// use coincount_core::Quantity;
///
/// let q: Quantity = "1.5".parse().unwrap();
/// assert_eq!(q.scaled(), 1_500_000_000_000_000_000);
/// assert_eq!(q.to_string(), "1.500000000000000000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i128);

impl Quantity {
    /// Number of scaled units per whole asset unit.
    pub const SCALE: i128 = 1_000_000_000_000_000_000;

    /// Fractional digits carried by the scaled representation.
    pub const DECIMALS: usize = 18;

    /// The zero quantity.
    pub const ZERO: Self = Self(0);

    /// Build a quantity from an already-scaled integer.
    #[must_use]
    pub const fn from_scaled(scaled: i128) -> Self {
        Self(scaled)
    }

    /// The underlying scaled integer.
    #[must_use]
    pub const fn scaled(self) -> i128 {
        self.0
    }

    /// Check whether the quantity is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check whether the quantity is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a decimal literal of the form `[integer]["." fractional]`.
    ///
    /// The fractional part is right-padded with zeros, or truncated, to
    /// exactly 18 digits before being combined with the integer part. An
    /// absent integer part is treated as zero, so `".5"` parses as half a
    /// unit.
    pub fn from_decimal_str(input: &str) -> Result<Self, ParseQuantityError> {
        let invalid = || ParseQuantityError::InvalidFormat {
            input: input.to_string(),
        };

        let (whole, frac) = match input.split_once('.') {
            Some((w, f)) => (w, f),
            None => (input, ""),
        };
        // A second '.' lands in `frac` and fails the digit check below.
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole_units: i128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let mut padded = [b'0'; Self::DECIMALS];
        for (slot, digit) in padded.iter_mut().zip(frac.bytes()) {
            *slot = digit;
        }
        let frac_units = padded
            .iter()
            .fold(0_i128, |acc, &digit| acc * 10 + i128::from(digit - b'0'));

        whole_units
            .checked_mul(Self::SCALE)
            .and_then(|w| w.checked_add(frac_units))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Render the scaled integer as lowercase base-16 text.
    ///
    /// This is the persisted encoding for quantities; it round-trips exactly
    /// through [`Quantity::from_base16`] and is what the serde impl emits.
    #[must_use]
    pub fn to_base16(self) -> String {
        if self.0 < 0 {
            format!("-{:x}", self.0.unsigned_abs())
        } else {
            format!("{:x}", self.0)
        }
    }

    /// Parse base-16 text produced by [`Quantity::to_base16`].
    pub fn from_base16(input: &str) -> Result<Self, ParseQuantityError> {
        i128::from_str_radix(input, 16)
            .map(Self)
            .map_err(|_| ParseQuantityError::InvalidFormat {
                input: input.to_string(),
            })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / Self::SCALE.unsigned_abs();
        let frac = magnitude % Self::SCALE.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{whole}.{frac:018}")
    }
}

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base16())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_base16(&text).map_err(serde::de::Error::custom)
    }
}
