//! Relationship labels. The label set is open: any string observed in the
//! edge table names its own partition.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The directed-relationship type of an edge (e.g. `SUPPORTS`, `REFUTES`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Evidence supports the claim.
    pub const SUPPORTS: &'static str = "SUPPORTS";
    /// Evidence refutes the claim.
    pub const REFUTES: &'static str = "REFUTES";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn supports() -> Self {
        Self::new(Self::SUPPORTS)
    }

    pub fn refutes() -> Self {
        Self::new(Self::REFUTES)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
