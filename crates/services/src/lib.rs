#![forbid(unsafe_code)]

pub mod catalog;
pub mod deck;
pub mod error;

pub use formula_core::Clock;

pub use catalog::{CatalogSource, builtin_catalog};
pub use deck::{DeckNotice, DeckProgress, DeckSession, HintState, RecordOutcome, TrackingPhase};
pub use error::CatalogLoadError;
