use dioxus::prelude::*;

#[component]
pub fn HintModal(visible: bool, text: String, on_close: EventHandler<()>) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "hint-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "hint-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "hint-modal-title",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "hint-modal__header",
                    h3 { class: "hint-modal__title", id: "hint-modal-title",
                        span { class: "hint-modal__icon", "💡" }
                        span { "Подсказка" }
                    }
                    button {
                        class: "hint-modal__close",
                        id: "hint-close",
                        r#type: "button",
                        aria_label: "Закрыть",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                p { class: "hint-modal__text", "{text}" }
            }
        }
    }
}
