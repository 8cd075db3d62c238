mod card;
mod deck;
mod hint;
mod index;
mod toaster;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use card::FlipCard;
pub use deck::DeckView;
pub use hint::HintModal;
pub use index::IndexView;
pub use toaster::{ToastEntry, ToastQueue, Toaster};
