use chrono::{DateTime, Duration, Utc};

/// Rounded share of answered cards, `0..=100`. Halves round up.
///
/// Returns 0 for an empty deck.
#[must_use]
pub fn progress_percent(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let answered = answered.min(total) as u128;
    let total = total as u128;
    let rounded = (answered * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

/// Outcome class of a finished tracking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Retry,
}

impl Verdict {
    #[must_use]
    pub fn classify(percent: u8, pass_threshold_percent: u8) -> Self {
        if percent >= pass_threshold_percent {
            Self::Pass
        } else {
            Self::Retry
        }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Result emitted once when every card of a tracked deck has been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    percent: u8,
    answered: usize,
    total: usize,
    verdict: Verdict,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl CompletionReport {
    #[must_use]
    pub fn new(
        answered: usize,
        total: usize,
        pass_threshold_percent: u8,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let percent = progress_percent(answered, total);
        Self {
            percent,
            answered,
            total,
            verdict: Verdict::classify(percent, pass_threshold_percent),
            started_at,
            completed_at: completed_at.max(started_at),
        }
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
