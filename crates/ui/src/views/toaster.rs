use std::time::Duration;

use dioxus::prelude::*;

use crate::vm::ToastVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: ToastVm,
}

/// Shared queue of visible toasts. Provided once by the page shell.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

impl ToastQueue {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast and drop it again after `lifetime_ms`.
    pub fn push(mut self, toast: ToastVm, lifetime_ms: u64) {
        let id = {
            let mut next = self.next_id.write();
            *next = next.wrapping_add(1);
            *next
        };
        tracing::debug!(id, message = %toast.message, "toast shown");
        self.entries.write().push(ToastEntry { id, toast });

        spawn(async move {
            tokio::time::sleep(Duration::from_millis(lifetime_ms)).await;
            self.dismiss(id);
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.entries.write().retain(|entry| entry.id != id);
    }

    #[must_use]
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.read().clone()
    }
}

#[component]
pub fn Toaster() -> Element {
    let queue = use_context::<ToastQueue>();
    let entries = queue.entries();

    rsx! {
        div { class: "toaster", role: "status", aria_live: "polite",
            for entry in entries {
                div { key: "{entry.id}", class: "{entry.toast.kind.class()}",
                    span { class: "toast__message", "{entry.toast.message}" }
                    button {
                        class: "toast__close",
                        r#type: "button",
                        aria_label: "Закрыть",
                        onclick: move |_| queue.dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
