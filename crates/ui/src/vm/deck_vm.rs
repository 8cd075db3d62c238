use formula_core::Clock;
use formula_core::model::{Catalog, CompletionReport, DeckSettings, FormulaId, Verdict};
use services::{DeckNotice, DeckProgress, DeckSession};

use crate::vm::card_vm::FormulaCardVm;
use crate::vm::time_fmt::format_elapsed;
use crate::vm::toast_vm::ToastVm;

/// Shown by the deck-level hint button when the current card has no hint.
pub const HINT_UNAVAILABLE: &str = "Подсказка недоступна";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckIntent {
    Next,
    Previous,
    Shuffle,
    StartTracking,
    ResetProgress,
    /// A card was flipped to its answer side while tracking.
    Answered(FormulaId),
    ShowHint(String),
    /// Show the hint of the current card, or a fallback when it has none.
    ShowCurrentHint,
    CloseHint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckResultsVm {
    pub passed: bool,
    pub headline: &'static str,
    pub score_label: String,
    pub elapsed_label: Option<String>,
}

/// View model over a `DeckSession`; the single place UI intents mutate deck state.
pub struct DeckVm {
    session: DeckSession,
    last_report: Option<CompletionReport>,
    generation: u64,
}

impl DeckVm {
    #[must_use]
    pub fn new(catalog: Catalog, settings: DeckSettings, clock: Clock) -> Self {
        Self {
            session: DeckSession::new(catalog, settings, clock),
            last_report: None,
            generation: 0,
        }
    }

    /// Reload the deck when handed a different catalog. Returns true if it reloaded.
    pub fn sync_catalog(&mut self, catalog: &Catalog) -> bool {
        if self.session.catalog().same_source(catalog) {
            return false;
        }
        self.session.load(catalog.clone());
        self.restart();
        true
    }

    /// Apply an intent and return the toast it produced, if any.
    pub fn dispatch(&mut self, intent: DeckIntent) -> Option<ToastVm> {
        let notice = match intent {
            DeckIntent::Next => {
                self.session.advance();
                None
            }
            DeckIntent::Previous => {
                self.session.retreat();
                None
            }
            DeckIntent::Shuffle => {
                self.restart();
                Some(self.session.shuffle())
            }
            DeckIntent::StartTracking => {
                self.restart();
                Some(self.session.start_tracking())
            }
            DeckIntent::ResetProgress => {
                self.restart();
                self.session.reset_progress();
                None
            }
            DeckIntent::Answered(id) => self.session.record_answer(id).into_notice(),
            DeckIntent::ShowHint(text) => {
                if !text.trim().is_empty() {
                    self.session.request_hint(text);
                }
                None
            }
            DeckIntent::ShowCurrentHint => {
                let text = self
                    .session
                    .current()
                    .and_then(|formula| formula.hint())
                    .unwrap_or(HINT_UNAVAILABLE)
                    .to_string();
                self.session.request_hint(text);
                None
            }
            DeckIntent::CloseHint => {
                self.session.dismiss_hint();
                None
            }
        };

        if let Some(DeckNotice::SessionComplete(report)) = &notice {
            self.last_report = Some(report.clone());
        }
        notice.as_ref().map(ToastVm::from)
    }

    fn restart(&mut self) {
        self.last_report = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Bumped whenever the session restarts; cards use it to flip back.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.session.is_tracking()
    }

    #[must_use]
    pub fn progress(&self) -> DeckProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn card(&self) -> Option<FormulaCardVm> {
        self.session.current().map(FormulaCardVm::from)
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        let progress = self.session.progress();
        if progress.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", progress.position + 1, progress.total)
    }

    /// "Прогресс: N%" while tracking.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        self.session
            .is_tracking()
            .then(|| format!("Прогресс: {}%", self.session.progress_percent()))
    }

    #[must_use]
    pub fn results(&self) -> Option<DeckResultsVm> {
        if !self.session.is_finished() {
            return None;
        }
        let percent = self.session.progress_percent();
        let threshold = self.session.settings().pass_threshold_percent();
        let passed = Verdict::classify(percent, threshold).is_pass();
        let headline = if passed {
            "Отличная работа! 🎉"
        } else {
            "Попробуй еще раз! 📚"
        };

        Some(DeckResultsVm {
            passed,
            headline,
            score_label: format!("{percent}%"),
            elapsed_label: self
                .last_report
                .as_ref()
                .map(|report| format_elapsed(report.elapsed())),
        })
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.session.hint().is_visible()
    }

    #[must_use]
    pub fn hint_text(&self) -> &str {
        self.session.hint().text()
    }

    #[must_use]
    pub fn order_ids(&self) -> Vec<FormulaId> {
        self.session.order_ids()
    }
}
