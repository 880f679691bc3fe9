//! Laboratory records and their cost type

use super::errors::RecordError;
use super::fields;
use crate::core::codec::{check_arity, RecordKind};
use crate::core::lookup::{Keyed, Named};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Non-negative monetary amount with cent precision
///
/// Stored as whole cents so a cost always re-encodes to the same two-decimal text.
///
/// # Examples
///
/// ```
/// use ahms::domain::Cost;
///
/// let cost: Cost = "45".parse().unwrap();
/// assert_eq!(cost.to_string(), "45.00");
/// assert!("-1".parse::<Cost>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct Cost {
    cents: u64,
}

impl Cost {
    /// Creates a cost from a whole number of cents
    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Creates a cost from a decimal amount, rounded to the nearest cent
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative, not finite, or too large to hold
    /// in cents.
    pub fn new(amount: f64) -> Result<Self, RecordError> {
        if !amount.is_finite() {
            return Err(RecordError::InvalidField {
                field: "cost",
                value: amount.to_string(),
            });
        }
        if amount < 0.0 {
            return Err(negative(amount));
        }
        let cents = (amount * 100.0).round();
        // u64::MAX as f64 rounds up to 2^64, the first value that does not fit
        if cents >= u64::MAX as f64 {
            return Err(out_of_range(amount));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    pub fn cents(self) -> u64 {
        self.cents
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Cost {
    type Err = RecordError;

    /// Plain decimals (`45`, `12.5`, `.75`) are read digit by digit into cents, so
    /// every value [`Display`](fmt::Display) produces parses back exactly. Anything
    /// else that reads as a number, such as `1e3`, goes through [`Cost::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let Some((whole, fraction)) = plain_decimal(digits) else {
            return Self::new(fields::decimal("cost", s)?);
        };
        if sign {
            return Err(negative(text));
        }
        to_cents(whole, fraction)
            .map(Self::from_cents)
            .ok_or_else(|| out_of_range(text))
    }
}

/// Splits `digits[.digits]` into its whole and fractional parts
fn plain_decimal(text: &str) -> Option<(&str, &str)> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    (all_digits(whole) && all_digits(fraction)).then_some((whole, fraction))
}

/// Whole cents for an already split decimal, rounding half up on the third
/// fractional digit. `None` when the amount overflows.
fn to_cents(whole: &str, fraction: &str) -> Option<u64> {
    let digit = |b: u8| u64::from(b - b'0');
    let mut cents = whole
        .bytes()
        .try_fold(0u64, |acc, b| acc.checked_mul(10)?.checked_add(digit(b)))?
        .checked_mul(100)?;

    let mut rest = fraction.bytes();
    let tenths = rest.next().map_or(0, digit);
    let hundredths = rest.next().map_or(0, digit);
    cents = cents.checked_add(tenths * 10 + hundredths)?;
    if rest.next().is_some_and(|b| b >= b'5') {
        cents = cents.checked_add(1)?;
    }
    Some(cents)
}

fn negative(amount: impl fmt::Display) -> RecordError {
    RecordError::constraint("cost", format!("must not be negative, got {amount}"))
}

fn out_of_range(amount: impl fmt::Display) -> RecordError {
    RecordError::constraint("cost", format!("is out of range, got {amount}"))
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> f64 {
        cost.cents as f64 / 100.0
    }
}

/// A laboratory service and what it costs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Laboratory {
    name: String,
    cost: Cost,
}

impl Laboratory {
    /// Creates a new laboratory record
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ConstraintViolation`] if the name contains the delimiter
    /// or a line break.
    pub fn new(name: impl Into<String>, cost: Cost) -> Result<Self, RecordError> {
        Ok(Self {
            name: fields::text("name", name)?,
            cost,
        })
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

impl RecordKind for Laboratory {
    const KIND: &'static str = "laboratory";
    const HEADER: &'static str = "Facility_Cost";
    const COLUMNS: &'static [&'static str] = &["Lab", "Cost"];

    fn fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.cost.to_string()]
    }

    fn from_fields(f: &[&str]) -> Result<Self, RecordError> {
        check_arity(Self::COLUMNS.len(), f.len())?;
        Self::new(f[0], f[1].parse()?)
    }
}

impl Keyed for Laboratory {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }
}

impl Named for Laboratory {
    fn name(&self) -> &str {
        &self.name
    }
}
