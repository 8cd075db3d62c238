use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use formula_core::Clock;
use formula_core::model::{Catalog, CompletionReport, DeckSettings, Formula, FormulaId, progress_percent};

use super::hint::HintState;
use super::notice::{DeckNotice, RecordOutcome};
use super::progress::{DeckProgress, TrackingPhase};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory study session over a formula catalog.
///
/// Owns the working order, the current position, the answered map and the
/// tracking flag. Every other component reads snapshots and talks back through
/// the operations below; nothing else mutates this state.
pub struct DeckSession {
    catalog: Catalog,
    settings: DeckSettings,
    clock: Clock,
    // Indexes into `catalog.formulas()`.
    order: Vec<usize>,
    position: usize,
    answered: HashMap<FormulaId, bool>,
    tracking: bool,
    tracking_started_at: Option<DateTime<Utc>>,
    completion_sent: bool,
    hint: HintState,
}

impl DeckSession {
    #[must_use]
    pub fn new(catalog: Catalog, settings: DeckSettings, clock: Clock) -> Self {
        let order = (0..catalog.len()).collect();
        Self {
            catalog,
            settings,
            clock,
            order,
            position: 0,
            answered: HashMap::new(),
            tracking: false,
            tracking_started_at: None,
            completion_sent: false,
            hint: HintState::default(),
        }
    }

    /// Replace the catalog and reinitialize the session against it.
    ///
    /// The order returns to catalog order and progress is cleared. The tracking
    /// flag is kept.
    pub fn load(&mut self, catalog: Catalog) {
        self.order = (0..catalog.len()).collect();
        self.catalog = catalog;
        self.position = 0;
        self.clear_progress();
        self.hint = HintState::default();
        tracing::debug!(formulas = self.catalog.len(), "deck reloaded");
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> DeckSettings {
        self.settings
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// Move to the next card. Returns false at the last card.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.order.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous card. Returns false at the first card.
    pub fn retreat(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Shuffle with the thread-local generator.
    pub fn shuffle(&mut self) -> DeckNotice {
        self.shuffle_with(&mut rand::rng())
    }

    /// Reorder the deck with a uniform random permutation and start over.
    ///
    /// Clears answers but leaves the tracking flag alone.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DeckNotice {
        self.order.shuffle(rng);
        self.position = 0;
        self.clear_progress();
        tracing::debug!(tracking = self.tracking, "deck shuffled");
        DeckNotice::Shuffled
    }

    //
    // ─── TRACKING ──────────────────────────────────────────────────────────────
    //

    /// Turn progress tracking on, dropping any previous answers.
    pub fn start_tracking(&mut self) -> DeckNotice {
        self.tracking = true;
        self.clear_progress();
        tracing::debug!("tracking started");
        DeckNotice::TrackingStarted
    }

    /// Turn progress tracking off and return to the first card.
    pub fn reset_progress(&mut self) {
        self.tracking = false;
        self.position = 0;
        self.clear_progress();
        tracing::debug!("progress reset");
    }

    /// Mark a card as answered. Write-once per id per tracking session.
    ///
    /// Every recorded answer counts as correct; there is no way to record a miss.
    pub fn record_answer(&mut self, id: FormulaId) -> RecordOutcome {
        if !self.tracking {
            return RecordOutcome::NotTracking;
        }
        if self.catalog.find(id).is_none() {
            tracing::debug!(%id, "ignoring answer for unknown formula");
            return RecordOutcome::UnknownFormula;
        }

        match self.answered.entry(id) {
            Entry::Occupied(_) => return RecordOutcome::AlreadyRecorded,
            Entry::Vacant(slot) => {
                slot.insert(true);
            }
        }
        tracing::debug!(%id, answered = self.answered_count(), total = self.len(), "answer recorded");

        RecordOutcome::Recorded {
            completion: self.take_completion(),
        }
    }

    fn take_completion(&mut self) -> Option<CompletionReport> {
        if self.completion_sent || !self.is_finished() {
            return None;
        }
        self.completion_sent = true;

        let completed_at = self.clock.now();
        let started_at = self.tracking_started_at.unwrap_or(completed_at);
        let report = CompletionReport::new(
            self.answered_count(),
            self.len(),
            self.settings.pass_threshold_percent(),
            started_at,
            completed_at,
        );
        tracing::info!(
            percent = report.percent(),
            verdict = ?report.verdict(),
            elapsed_secs = report.elapsed().num_seconds(),
            "deck session complete"
        );
        Some(report)
    }

    fn clear_progress(&mut self) {
        self.answered.clear();
        self.completion_sent = false;
        self.tracking_started_at = self.tracking.then(|| self.clock.now());
    }

    //
    // ─── HINTS ─────────────────────────────────────────────────────────────────
    //

    /// Open the hint overlay. Callers skip this when there is no hint text.
    pub fn request_hint(&mut self, text: impl Into<String>) {
        self.hint.show(text);
    }

    pub fn dismiss_hint(&mut self) {
        self.hint.dismiss();
    }

    #[must_use]
    pub fn hint(&self) -> &HintState {
        &self.hint
    }

    //
    // ─── DERIVED STATE ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The card at the current position, or `None` for an empty deck.
    #[must_use]
    pub fn current(&self) -> Option<&Formula> {
        self.order
            .get(self.position)
            .and_then(|&index| self.catalog.get(index))
    }

    /// Formula ids in the current working order.
    #[must_use]
    pub fn order_ids(&self) -> Vec<FormulaId> {
        self.order
            .iter()
            .filter_map(|&index| self.catalog.get(index))
            .map(Formula::id)
            .collect()
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    #[must_use]
    pub fn is_answered(&self, id: FormulaId) -> bool {
        self.answered.get(&id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.values().filter(|correct| **correct).count()
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.answered_count(), self.len())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tracking && !self.is_empty() && self.answered_count() == self.len()
    }

    #[must_use]
    pub fn phase(&self) -> TrackingPhase {
        if !self.tracking {
            TrackingPhase::NotTracking
        } else if self.is_finished() {
            TrackingPhase::Finished
        } else {
            TrackingPhase::Tracking
        }
    }

    #[must_use]
    pub fn progress(&self) -> DeckProgress {
        DeckProgress {
            position: self.position,
            total: self.len(),
            answered: self.answered_count(),
            percent: self.progress_percent(),
            phase: self.phase(),
        }
    }
}

impl fmt::Debug for DeckSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckSession")
            .field("formulas", &self.catalog.len())
            .field("position", &self.position)
            .field("answered", &self.answered.len())
            .field("tracking", &self.tracking)
            .field("completion_sent", &self.completion_sent)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
