//! Blockchain address value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{ADDRESS_SHORT_PREFIX_LEN, ADDRESS_SHORT_SUFFIX_LEN};
use crate::errors::{AppError, AppResult};

/// Number of hex digits in an address payload
const ADDRESS_HEX_LEN: usize = 40;

/// A validated, case-normalized contract or account address.
///
/// Addresses are `0x` followed by 40 hex digits. Hex casing carries no
/// meaning on-chain, so the payload is lowercased on parse and equality
/// is exact on the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    /// Parse and validate an address literal.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let hex = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or_else(|| AppError::InvalidAddress(format!("{}: missing 0x prefix", raw)))?;

        if hex.len() != ADDRESS_HEX_LEN {
            return Err(AppError::InvalidAddress(format!(
                "{}: expected {} hex digits, got {}",
                raw,
                ADDRESS_HEX_LEN,
                hex.len()
            )));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidAddress(format!(
                "{}: contains non-hex characters",
                raw
            )));
        }

        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }

    /// Full normalized form, `0x` prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncated display form: first 6 and last 4 characters,
    /// e.g. `0x1234...abcd`. Used as the fallback display name for
    /// addresses with no registered user.
    pub fn short(&self) -> String {
        format!(
            "{}...{}",
            &self.0[..ADDRESS_SHORT_PREFIX_LEN],
            &self.0[self.0.len() - ADDRESS_SHORT_SUFFIX_LEN..]
        )
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Address::parse(&raw).map_err(serde::de::Error::custom)
    }
}
