use formula_core::model::CompletionReport;

/// Transient, fire-and-forget notifications produced by deck operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckNotice {
    Shuffled,
    TrackingStarted,
    SessionComplete(CompletionReport),
}

/// What `DeckSession::record_answer` did with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Tracking is off; nothing was recorded.
    NotTracking,
    /// The id is not part of the deck.
    UnknownFormula,
    /// The id was already recorded in this tracking session.
    AlreadyRecorded,
    /// The answer was stored. `completion` is set on the call that filled the last slot.
    Recorded { completion: Option<CompletionReport> },
}

impl RecordOutcome {
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }

    #[must_use]
    pub fn into_notice(self) -> Option<DeckNotice> {
        match self {
            Self::Recorded {
                completion: Some(report),
            } => Some(DeckNotice::SessionComplete(report)),
            _ => None,
        }
    }
}
