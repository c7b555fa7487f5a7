use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::LoadError;

/// Currency prefix every amount literal starts with
pub const AMOUNT_PREFIX: char = '$';

/// Composite identity of a load: load ids are only unique per customer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadKey {
    pub load_id: String,
    pub customer_id: String,
}

/// A funding request for a customer account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Load {
    pub id: String,
    pub customer_id: String,
    pub amount: Decimal,
    pub time: DateTime<Utc>,
}

/// Wire shape of an input line, amount still in its literal form
#[derive(Debug, Deserialize)]
struct LoadRecord {
    id: String,
    customer_id: String,
    load_amount: String,
    time: DateTime<Utc>,
}

impl Load {
    /// Decode one JSON input line
    ///
    /// Structural problems (missing field, wrong type, bad timestamp) give
    /// `LoadError::Decode`; a well-formed record whose amount literal does not
    /// parse gives `LoadError::AmountFormat`.
    pub fn from_json(line: &str) -> Result<Self, LoadError> {
        let record: LoadRecord = serde_json::from_str(line).map_err(LoadError::Decode)?;
        let amount = parse_amount(&record.load_amount)?;

        Ok(Self {
            id: record.id,
            customer_id: record.customer_id,
            amount,
            time: record.time,
        })
    }

    pub fn key(&self) -> LoadKey {
        LoadKey {
            load_id: self.id.clone(),
            customer_id: self.customer_id.clone(),
        }
    }
}

/// Parse a `$<digits>.<digits>` literal
///
/// Signs, exponents, separators and surrounding whitespace are rejected so
/// that only non-negative plain decimals get through.
pub fn parse_amount(literal: &str) -> Result<Decimal, LoadError> {
    let invalid = || LoadError::AmountFormat {
        literal: literal.to_string(),
    };

    let digits = literal.strip_prefix(AMOUNT_PREFIX).ok_or_else(invalid)?;
    if digits.is_empty()
        || digits.starts_with('.')
        || digits.ends_with('.')
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return Err(invalid());
    }

    Decimal::from_str(digits).map_err(|_| invalid())
}
