mod catalog;
mod formula;
mod ids;
mod session;
mod settings;

pub use catalog::{Catalog, CatalogError};
pub use formula::{Formula, FormulaDraft, FormulaError};
pub use ids::FormulaId;
pub use session::{CompletionReport, Verdict, progress_percent};
pub use settings::{DeckSettings, DeckSettingsError};
