//! The fixed two-user allowlist that owns every expense in the ledger.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// One of the two people allowed to record expenses.
///
/// There is no registration and no user database: the allowlist is the type.
/// Identifiers are parsed case-insensitively (`"Matt"`, `"matt"` and
/// `"MATT"` are all accepted) and serialised in title case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum User {
    /// The user identified as "Matt" (or "matt").
    Matt,
    /// The user identified as "Eileen" (or "eileen").
    Eileen,
}

impl FromStr for User {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matt" => Ok(User::Matt),
            "eileen" => Ok(User::Eileen),
            _ => Err(Error::InvalidUser),
        }
    }
}

impl TryFrom<String> for User {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            User::Matt => write!(f, "Matt"),
            User::Eileen => write!(f, "Eileen"),
        }
    }
}
