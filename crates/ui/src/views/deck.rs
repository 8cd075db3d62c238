use dioxus::prelude::*;
use formula_core::model::Catalog;

use crate::context::AppContext;
use crate::views::{FlipCard, HintModal, ToastQueue};
use crate::vm::{DeckIntent, DeckResultsVm, DeckVm};

#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

#[component]
pub fn DeckView(catalog: Catalog) -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<ToastQueue>();
    let settings = ctx.deck_settings();
    let clock = ctx.clock();

    let mut vm = use_signal({
        let catalog = catalog.clone();
        move || DeckVm::new(catalog, settings, clock)
    });

    use_effect(use_reactive!(|catalog| {
        if vm.write().sync_catalog(&catalog) {
            tracing::info!(formulas = catalog.len(), "catalog replaced, deck reloaded");
        }
    }));

    let dispatch = use_callback(move |intent: DeckIntent| {
        tracing::debug!(?intent, "deck intent");
        let toast = vm.write().dispatch(intent);
        if let Some(toast) = toast {
            toasts.push(toast, settings.toast_duration_ms());
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeckTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        let modifiers = evt.data.modifiers();
        if modifiers.contains(Modifiers::CONTROL)
            || modifiers.contains(Modifiers::META)
            || modifiers.contains(Modifiers::ALT)
        {
            return;
        }
        let intent = match evt.data.key() {
            Key::ArrowLeft => Some(DeckIntent::Previous),
            Key::ArrowRight => Some(DeckIntent::Next),
            Key::Escape => Some(DeckIntent::CloseHint),
            _ => match evt.data.code() {
                Code::KeyS => Some(DeckIntent::Shuffle),
                Code::KeyH => Some(DeckIntent::ShowCurrentHint),
                _ => None,
            },
        };
        if let Some(intent) = intent {
            evt.prevent_default();
            dispatch.call(intent);
        }
    };

    let state = vm.read();
    if state.is_empty() {
        return rsx! {
            div { class: "deck deck--empty", id: "deck-root",
                p { class: "deck__empty", "Карточки не найдены" }
            }
        };
    }

    let progress = state.progress();
    let card = state.card();
    let card_key = card
        .as_ref()
        .map(|card| format!("{}-{}", card.id, state.generation()))
        .unwrap_or_default();
    let tracking = state.is_tracking();
    let position_label = state.position_label();
    let progress_label = state.progress_label();
    let results = state.results();
    let hint_visible = state.hint_visible();
    let hint_text = state.hint_text().to_string();
    drop(state);

    rsx! {
        div {
            class: "deck",
            id: "deck-root",
            tabindex: "0",
            onkeydown: on_key,
            div { class: "deck__toolbar",
                button {
                    class: "btn btn-ghost deck__hint",
                    id: "deck-hint",
                    r#type: "button",
                    onclick: move |_| dispatch.call(DeckIntent::ShowCurrentHint),
                    span { class: "icon", "💡" }
                    span { class: "deck__hint-label", "Get a hint" }
                }
                if tracking {
                    button {
                        class: "btn btn-outline",
                        id: "deck-reset",
                        r#type: "button",
                        onclick: move |_| dispatch.call(DeckIntent::ResetProgress),
                        "Сбросить"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        id: "deck-start",
                        r#type: "button",
                        onclick: move |_| dispatch.call(DeckIntent::StartTracking),
                        "Начать тест"
                    }
                }
            }

            if let Some(card) = card {
                FlipCard {
                    key: "{card_key}",
                    card,
                    tracking,
                    on_hint: move |text| dispatch.call(DeckIntent::ShowHint(text)),
                    on_answered: move |id| dispatch.call(DeckIntent::Answered(id)),
                }
            }

            nav { class: "deck__nav",
                button {
                    class: "btn btn-ghost",
                    id: "deck-prev",
                    r#type: "button",
                    aria_label: "Предыдущая карточка",
                    disabled: progress.at_start(),
                    onclick: move |_| dispatch.call(DeckIntent::Previous),
                    span { "←" }
                    span { class: "deck__nav-label", "Назад" }
                }
                div { class: "deck__status",
                    span { class: "deck__position", "{position_label}" }
                    if let Some(label) = progress_label {
                        span { class: "deck__progress", "{label}" }
                    }
                }
                div { class: "deck__nav-right",
                    button {
                        class: "btn btn-ghost",
                        id: "deck-shuffle",
                        r#type: "button",
                        aria_label: "Перемешать карточки",
                        onclick: move |_| dispatch.call(DeckIntent::Shuffle),
                        "🔀"
                    }
                    button {
                        class: "btn btn-ghost",
                        id: "deck-next",
                        r#type: "button",
                        aria_label: "Следующая карточка",
                        disabled: progress.at_end(),
                        onclick: move |_| dispatch.call(DeckIntent::Next),
                        span { class: "deck__nav-label", "Вперед" }
                        span { "→" }
                    }
                }
            }

            if let Some(results) = results {
                DeckResults {
                    results,
                    on_restart: move |()| dispatch.call(DeckIntent::ResetProgress),
                }
            }

            HintModal {
                visible: hint_visible,
                text: hint_text,
                on_close: move |()| dispatch.call(DeckIntent::CloseHint),
            }
        }
    }
}

#[component]
fn DeckResults(results: DeckResultsVm, on_restart: EventHandler<()>) -> Element {
    let class = if results.passed {
        "deck-results deck-results--pass"
    } else {
        "deck-results deck-results--retry"
    };

    rsx! {
        section { class: "{class}", id: "deck-results",
            h3 { class: "deck-results__headline", "{results.headline}" }
            p { class: "deck-results__score",
                "Ваш результат: "
                strong { "{results.score_label}" }
            }
            if let Some(elapsed) = results.elapsed_label.as_ref() {
                p { class: "deck-results__time", "Время: {elapsed}" }
            }
            button {
                class: "btn btn-primary",
                id: "deck-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Начать заново"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeckTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DeckIntent>>>>,
    vm: Rc<RefCell<Option<Signal<DeckVm>>>>,
}

#[cfg(test)]
impl DeckTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<DeckIntent>, vm: Signal<DeckVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<DeckIntent> {
        (*self.dispatch.borrow()).expect("deck dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<DeckVm> {
        (*self.vm.borrow()).expect("deck vm registered")
    }
}
