use std::sync::Arc;

use formula_core::Clock;
use formula_core::model::{Catalog, DeckSettings};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Catalog;
    fn deck_settings(&self) -> DeckSettings;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Catalog,
    deck_settings: DeckSettings,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            deck_settings: app.deck_settings(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn deck_settings(&self) -> DeckSettings {
        self.deck_settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
