mod builtin;
mod source;

pub use builtin::builtin_catalog;
pub use source::CatalogSource;
