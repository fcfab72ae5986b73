//! Entity records and resource identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical arrival index; strictly increasing in registration order.
pub type ArrivalIndex = u64;

/// Priority key. Lower value is served first; `1` is the most urgent of the
/// recommended `1..=5` range, but any value is accepted.
pub type Severity = i32;

/// Opaque stable key of a resource, independent of its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Current availability of a resource as seen by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Resource is free.
    Available,
    /// Resource has been marked busy by a dispatch.
    Busy,
    /// Identity has no availability entry (e.g. the fallback resource).
    Unknown,
}

impl Availability {
    /// Convert a known flag into an availability value.
    pub const fn from_flag(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Busy
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Unknown => "Unknown",
        };
        f.write_str(text)
    }
}

/// Snapshot of one admitted entity.
///
/// `arrival_index` and `assigned_resource` are fixed at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Identity key used by the record store.
    pub name: String,
    /// Age as supplied; not validated.
    pub age: i32,
    /// Priority key.
    pub severity: Severity,
    /// Tie-breaker assigned by the sequencer.
    pub arrival_index: ArrivalIndex,
    /// Free-form problem description.
    pub category: String,
    /// Resource resolved from `category` at registration.
    pub assigned_resource: ResourceId,
}

/// Caller-supplied registration input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Entity name.
    pub name: String,
    /// Entity age.
    pub age: i32,
    /// Severity, recommended `1..=5`.
    pub severity: Severity,
    /// Category matched case-sensitively against the directory.
    pub category: String,
}

impl Registration {
    /// Build a registration from its parts.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        severity: Severity,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            severity,
            category: category.into(),
        }
    }
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    /// The stored record.
    pub record: EntityRecord,
    /// Availability of the assigned resource at registration time.
    /// Informational only; dispatch does not re-check it.
    pub resource_status: Availability,
}
