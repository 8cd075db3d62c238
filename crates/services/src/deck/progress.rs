/// Tracking sub-state of a deck session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingPhase {
    NotTracking,
    Tracking,
    Finished,
}

/// Read-only snapshot of deck progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckProgress {
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub percent: u8,
    pub phase: TrackingPhase,
}

impl DeckProgress {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        !matches!(self.phase, TrackingPhase::NotTracking)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TrackingPhase::Finished)
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.position + 1 >= self.total
    }
}
