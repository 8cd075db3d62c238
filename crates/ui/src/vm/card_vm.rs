use formula_core::model::{Formula, FormulaId};

use crate::vm::markdown_vm::formula_text_to_html;

/// UI-ready view of a single flash card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaCardVm {
    pub id: FormulaId,
    pub title: String,
    pub question_html: String,
    pub answer_html: String,
    pub hint: Option<String>,
}

impl From<&Formula> for FormulaCardVm {
    fn from(formula: &Formula) -> Self {
        Self {
            id: formula.id(),
            title: formula.title().to_string(),
            question_html: formula_text_to_html(formula.question()),
            answer_html: formula_text_to_html(formula.answer()),
            hint: formula.hint().map(str::to_string),
        }
    }
}

/// Flip state of one mounted card.
///
/// The answer is reported at most once per instance: on the first turn to the
/// answer side while tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardFaceVm {
    id: FormulaId,
    flipped: bool,
    reported: bool,
}

impl CardFaceVm {
    #[must_use]
    pub fn new(id: FormulaId) -> Self {
        Self {
            id,
            flipped: false,
            reported: false,
        }
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Turn the card over. Returns the id to record, if this flip counts.
    pub fn toggle(&mut self, tracking: bool) -> Option<FormulaId> {
        self.flipped = !self.flipped;
        if self.flipped && tracking && !self.reported {
            self.reported = true;
            return Some(self.id);
        }
        None
    }
}
