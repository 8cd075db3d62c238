use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::FormulaId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormulaError {
    #[error("formula {id} has an empty title")]
    EmptyTitle { id: FormulaId },

    #[error("formula {id} has an empty question")]
    EmptyQuestion { id: FormulaId },

    #[error("formula {id} has an empty answer")]
    EmptyAnswer { id: FormulaId },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated formula as it appears in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormulaDraft {
    pub id: FormulaId,
    pub title: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub hint: Option<String>,
}

impl FormulaDraft {
    /// # Errors
    ///
    /// Returns `FormulaError` if the title, question or answer is blank.
    pub fn validate(self) -> Result<Formula, FormulaError> {
        Formula::new(self.id, self.title, self.question, self.answer, self.hint)
    }
}

//
// ─── FORMULA ───────────────────────────────────────────────────────────────────
//

/// A single question/answer pair shown on a flash card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    id: FormulaId,
    title: String,
    question: String,
    answer: String,
    hint: Option<String>,
}

impl Formula {
    /// Creates a validated formula record.
    ///
    /// A blank hint is treated as no hint.
    ///
    /// # Errors
    ///
    /// Returns `FormulaError` if the title, question or answer is blank.
    pub fn new(
        id: FormulaId,
        title: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        hint: Option<String>,
    ) -> Result<Self, FormulaError> {
        let title = title.into();
        let question = question.into();
        let answer = answer.into();

        if title.trim().is_empty() {
            return Err(FormulaError::EmptyTitle { id });
        }
        if question.trim().is_empty() {
            return Err(FormulaError::EmptyQuestion { id });
        }
        if answer.trim().is_empty() {
            return Err(FormulaError::EmptyAnswer { id });
        }

        let hint = hint.filter(|h| !h.trim().is_empty());

        Ok(Self {
            id,
            title,
            question,
            answer,
            hint,
        })
    }

    #[must_use]
    pub fn id(&self) -> FormulaId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}
