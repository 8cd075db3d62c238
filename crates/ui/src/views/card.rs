use dioxus::prelude::*;
use formula_core::model::FormulaId;

use crate::vm::{CardFaceVm, FormulaCardVm};

/// A two-sided formula card. Flip state is local to one mount; the deck keys
/// each mount by formula id and deck generation so it starts face up again.
#[component]
pub fn FlipCard(
    card: FormulaCardVm,
    tracking: bool,
    on_hint: EventHandler<String>,
    on_answered: EventHandler<FormulaId>,
) -> Element {
    let mut face = use_signal({
        let id = card.id;
        move || CardFaceVm::new(id)
    });

    let flip = use_callback(move |()| {
        let answered = face.write().toggle(tracking);
        if let Some(id) = answered {
            tracing::trace!(%id, "answer revealed while tracking");
            on_answered.call(id);
        }
    });

    let on_key = move |evt: KeyboardEvent| {
        let key = evt.data.key();
        if key == Key::Enter || key == Key::Character(" ".to_string()) {
            evt.prevent_default();
            evt.stop_propagation();
            flip.call(());
        }
    };

    let flipped = face.read().is_flipped();
    let inner_class = if flipped {
        "flip-card__inner flip-card__inner--flipped"
    } else {
        "flip-card__inner"
    };
    let aria_label = if flipped {
        "Показать вопрос"
    } else {
        "Показать ответ"
    };

    rsx! {
        div {
            class: "flip-card",
            id: "flip-card",
            role: "button",
            tabindex: "0",
            aria_label: "{aria_label}",
            onclick: move |_| flip.call(()),
            onkeydown: on_key,
            div { class: "{inner_class}",
                div { class: "flip-card__face flip-card__face--front",
                    CardHintButton { hint: card.hint.clone(), on_hint }
                    h3 { class: "flip-card__title", "{card.title}" }
                    div {
                        class: "flip-card__formula",
                        dangerous_inner_html: "{card.question_html}",
                    }
                    p { class: "flip-card__cue", "Нажмите, чтобы увидеть ответ" }
                }
                div { class: "flip-card__face flip-card__face--back",
                    CardHintButton { hint: card.hint.clone(), on_hint }
                    h3 { class: "flip-card__title", "Ответ" }
                    div {
                        class: "flip-card__formula",
                        dangerous_inner_html: "{card.answer_html}",
                    }
                    p { class: "flip-card__cue", "Нажмите, чтобы вернуться к вопросу" }
                }
            }
        }
    }
}

/// Always rendered so the card layout stays put; disabled without a hint.
#[component]
fn CardHintButton(hint: Option<String>, on_hint: EventHandler<String>) -> Element {
    let Some(text) = hint else {
        return rsx! {
            button {
                class: "flip-card__hint flip-card__hint--empty",
                r#type: "button",
                disabled: true,
                aria_label: "Подсказки нет",
                onclick: move |evt| evt.stop_propagation(),
                "💡"
            }
        };
    };

    rsx! {
        button {
            class: "flip-card__hint",
            r#type: "button",
            aria_label: "Показать подсказку",
            onclick: move |evt| {
                evt.stop_propagation();
                on_hint.call(text.clone());
            },
            "💡"
        }
    }
}
