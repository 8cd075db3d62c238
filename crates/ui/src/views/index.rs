use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{DeckView, ToastQueue, Toaster};

/// Page shell around the deck: header, footer and the toast stack.
#[component]
pub fn IndexView() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(ToastQueue::new);
    let catalog = ctx.catalog();

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { class: "page__title", "Математика 8 класс" }
                p { class: "page__subtitle", "Интерактивные карточки с формулами" }
            }
            main { class: "page__main",
                DeckView { catalog }
            }
            footer { class: "page__footer",
                p { "© 2025 Math Flash Cards Genius" }
            }
            Toaster {}
        }
    }
}
