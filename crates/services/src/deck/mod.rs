mod hint;
mod notice;
mod progress;
mod session;

// Public API of the deck subsystem.
pub use hint::HintState;
pub use notice::{DeckNotice, RecordOutcome};
pub use progress::{DeckProgress, TrackingPhase};
pub use session::DeckSession;
