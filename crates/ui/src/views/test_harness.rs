use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use formula_core::model::{Catalog, DeckSettings, Formula, FormulaId};
use formula_core::time::fixed_now;
use services::Clock;

use crate::context::{UiApp, build_app_context};
use crate::views::IndexView;
use crate::views::deck::DeckTestHandles;

#[derive(Clone)]
struct TestApp {
    catalog: Catalog,
    settings: DeckSettings,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn deck_settings(&self) -> DeckSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: DeckTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let handles = props.handles.clone();
    use_context_provider(|| handles);
    rsx! { IndexView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: DeckTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn send(&mut self, intent: crate::vm::DeckIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_catalog() -> Catalog {
    let formulas = vec![
        Formula::new(
            FormulaId::new(1),
            "Квадрат суммы",
            "(a + b)^2",
            "a^2 + 2ab + b^2",
            Some("Раскройте скобки".to_string()),
        )
        .expect("formula"),
        Formula::new(
            FormulaId::new(2),
            "Квадрат разности",
            "(a - b)^2",
            "a^2 - 2ab + b^2",
            None,
        )
        .expect("formula"),
        Formula::new(
            FormulaId::new(3),
            "Разность квадратов",
            "a^2 - b^2",
            "(a - b)(a + b)",
            Some("Произведение суммы и разности".to_string()),
        )
        .expect("formula"),
    ];
    Catalog::new(formulas).expect("catalog")
}

pub fn setup_view_harness(catalog: Catalog) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog,
        settings: DeckSettings::default(),
    });
    let handles = DeckTestHandles::default();
    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
