use std::fmt;
use std::path::{Path, PathBuf};

use formula_core::model::{Catalog, FormulaDraft};

use super::builtin::builtin_catalog;
use crate::error::CatalogLoadError;

/// Where the application gets its formula catalog from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Builtin,
    /// A JSON array of `{ id, title, question, answer, hint? }` objects.
    File(PathBuf),
}

impl CatalogSource {
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the file cannot be read or parsed, or a record is invalid.
    pub fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let catalog = match self {
            Self::Builtin => builtin_catalog()?,
            Self::File(path) => load_file(path)?,
        };
        tracing::info!(source = %self, formulas = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` for malformed JSON, invalid records or duplicate ids.
    pub fn parse_json(raw: &str) -> Result<Catalog, CatalogLoadError> {
        let drafts: Vec<FormulaDraft> = serde_json::from_str(raw)?;
        let formulas = drafts
            .into_iter()
            .map(FormulaDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog::new(formulas)?)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CatalogSource::parse_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_core::model::{CatalogError, FormulaError, FormulaId};
    use std::io::Write;

    const TWO_CARDS: &str = r#"[
        {"id": 10, "title": "Куб суммы", "question": "(a + b)³ = ?", "answer": "a³ + 3a²b + 3ab² + b³"},
        {"id": 11, "title": "Площадь круга", "question": "S = ?", "answer": "πr²", "hint": "Через радиус"}
    ]"#;

    #[test]
    fn parse_json_keeps_file_order() {
        let catalog = CatalogSource::parse_json(TWO_CARDS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.formulas()[0].id(), FormulaId::new(10));
        assert_eq!(catalog.formulas()[1].hint(), Some("Через радиус"));
    }

    #[test]
    fn parse_json_rejects_duplicates() {
        let raw = r#"[
            {"id": 1, "title": "A", "question": "q", "answer": "a"},
            {"id": 1, "title": "B", "question": "q", "answer": "a"}
        ]"#;
        let err = CatalogSource::parse_json(raw).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Catalog(CatalogError::DuplicateId { .. })
        ));
    }

    #[test]
    fn parse_json_rejects_blank_answer() {
        let raw = r#"[{"id": 4, "title": "A", "question": "q", "answer": "  "}]"#;
        let err = CatalogSource::parse_json(raw).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Formula(FormulaError::EmptyAnswer { .. })
        ));
    }

    #[test]
    fn parse_json_reports_syntax_errors() {
        let err = CatalogSource::parse_json("[{").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Json(_)));
    }

    #[test]
    fn load_reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_CARDS.as_bytes()).unwrap();

        let catalog = CatalogSource::file(file.path()).load().unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = CatalogSource::file(&path).load().unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn builtin_source_is_default() {
        assert_eq!(CatalogSource::default(), CatalogSource::Builtin);
        assert!(!CatalogSource::Builtin.load().unwrap().is_empty());
    }
}
