mod card_vm;
mod deck_vm;
mod markdown_vm;
mod time_fmt;
mod toast_vm;

pub use card_vm::{CardFaceVm, FormulaCardVm};
pub use deck_vm::{DeckIntent, DeckResultsVm, DeckVm, HINT_UNAVAILABLE};
pub use markdown_vm::{formula_text_to_html, sanitize_html};
pub use time_fmt::format_elapsed;
pub use toast_vm::{ToastKind, ToastVm};
