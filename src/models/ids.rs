//! Strongly-typed ID wrapper for expenses
//!
//! A newtype keeps expense ids from being confused with other strings and
//! gives them a short, prefixed display form for the terminal.
//!
//! Ids are written as UUID strings. Documents saved by the browser version
//! of the tracker use millisecond timestamps (`1704067200000`) instead;
//! those and any other non-UUID id are mapped to a UUID v5, so the same
//! legacy id always reads back as the same [`ExpenseId`].

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Namespace for ids derived from legacy (non-UUID) values
const LEGACY_NAMESPACE: Uuid = Uuid::from_u128(0x6d1f_4c2e_8a3b_5f70_9e21_0c4d_7b6a_1e38);

/// Unique identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Stable id for a legacy non-UUID identifier
    pub fn from_legacy(legacy: &str) -> Self {
        Self(Uuid::new_v5(&LEGACY_NAMESPACE, legacy.as_bytes()))
    }

    /// Parse an ID from a full UUID string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether `identifier` is this id's short display form
    /// (`exp-1a2b3c4d`) or its bare 8-character prefix
    pub fn matches_short(&self, identifier: &str) -> bool {
        let short = identifier.strip_prefix(DISPLAY_PREFIX).unwrap_or(identifier);
        short.len() == 8 && self.0.to_string().starts_with(&short.to_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExpenseIdVisitor)
    }
}

struct ExpenseIdVisitor;

impl<'de> Visitor<'de> for ExpenseIdVisitor {
    type Value = ExpenseId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a UUID string or a legacy numeric id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ExpenseId, E> {
        match Uuid::parse_str(v) {
            Ok(uuid) => Ok(ExpenseId(uuid)),
            Err(_) if v.trim().is_empty() => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            Err(_) => Ok(ExpenseId::from_legacy(v)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ExpenseId, E> {
        Ok(ExpenseId::from_legacy(&v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ExpenseId, E> {
        Ok(ExpenseId::from_legacy(&v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ExpenseId, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        // 1704067200000.0 and 1704067200000 name the same expense
        Ok(ExpenseId::from_legacy(&v.to_string()))
    }
}
