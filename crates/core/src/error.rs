use thiserror::Error;

use crate::model::{CatalogError, DeckSettingsError, FormulaError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Formula(#[from] FormulaError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Settings(#[from] DeckSettingsError),
}
