//! Transaction identifiers
//!
//! Ids are creation timestamps in milliseconds since the Unix epoch. They
//! double as the only lookup key, so they must be unique within the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Mint an id from the given clock reading
    ///
    /// Never returns a value at or below `newest`, so two additions inside the
    /// same millisecond (or after a clock step backwards) still get distinct,
    /// increasing ids.
    pub fn mint(now_millis: i64, newest: Option<TransactionId>) -> Self {
        match newest {
            Some(newest) if newest.0 >= now_millis => Self(newest.0 + 1),
            _ => Self(now_millis),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
