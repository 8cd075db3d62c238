use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique key of a formula record within a catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormulaId(u64);

impl FormulaId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormulaId({})", self.0)
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to parse formula id from {raw:?}")]
pub struct ParseFormulaIdError {
    raw: String,
}

impl FromStr for FormulaId {
    type Err = ParseFormulaIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(FormulaId::new)
            .map_err(|_| ParseFormulaIdError { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_id_display_and_parse() {
        let id: FormulaId = " 12 ".parse().unwrap();
        assert_eq!(id, FormulaId::new(12));
        assert_eq!(id.to_string(), "12");
        assert_eq!(format!("{id:?}"), "FormulaId(12)");
    }

    #[test]
    fn formula_id_rejects_garbage() {
        let err = "twelve".parse::<FormulaId>().unwrap_err();
        assert!(err.to_string().contains("twelve"));
    }

    #[test]
    fn formula_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&FormulaId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: FormulaId = serde_json::from_str("7").unwrap();
        assert_eq!(back, FormulaId::new(7));
    }
}
