use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::model::formula::Formula;
use crate::model::ids::FormulaId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("formula id {id} appears more than once")]
    DuplicateId { id: FormulaId },
}

/// Immutable, ordered list of formulas for one study topic.
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    formulas: Arc<[Formula]>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two formulas share an id.
    pub fn new(formulas: Vec<Formula>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(formulas.len());
        for formula in &formulas {
            if !seen.insert(formula.id()) {
                return Err(CatalogError::DuplicateId { id: formula.id() });
            }
        }

        Ok(Self {
            formulas: formulas.into(),
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Formula> {
        self.formulas.get(index)
    }

    #[must_use]
    pub fn find(&self, id: FormulaId) -> Option<&Formula> {
        self.formulas.iter().find(|formula| formula.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// True when both handles point at the same loaded records.
    #[must_use]
    pub fn same_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.formulas, &other.formulas)
    }
}
