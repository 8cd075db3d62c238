use dioxus::prelude::ReadableExt;
use formula_core::model::{Catalog, FormulaId};

use super::test_harness::{sample_catalog, setup_view_harness};
use crate::vm::{DeckIntent, HINT_UNAVAILABLE};

#[tokio::test(flavor = "current_thread")]
async fn index_view_renders_shell_and_first_card() {
    let mut harness = setup_view_harness(sample_catalog());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Математика 8 класс"), "missing header in {html}");
    assert!(html.contains("© 2025 Math Flash Cards Genius"), "missing footer in {html}");
    assert!(html.contains("Квадрат суммы"), "missing first card in {html}");
    assert!(html.contains("1 / 3"), "missing position in {html}");
    assert!(html.contains("Начать тест"), "missing start button in {html}");
    assert!(!html.contains("Прогресс:"), "progress shown before tracking in {html}");
    assert!(!html.contains("hint-modal"), "hint open on first render in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_catalog_renders_placeholder() {
    let mut harness = setup_view_harness(Catalog::empty());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Карточки не найдены"), "missing empty state in {html}");
    assert!(!html.contains("flip-card"), "card rendered for empty deck in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_moves_between_cards() {
    let mut harness = setup_view_harness(sample_catalog());
    harness.rebuild();

    harness.send(DeckIntent::Next);
    let html = harness.render();
    assert!(html.contains("2 / 3"), "missing position in {html}");
    assert!(html.contains("Квадрат разности"), "missing second card in {html}");

    harness.send(DeckIntent::Next);
    harness.send(DeckIntent::Next);
    let html = harness.render();
    assert!(html.contains("3 / 3"), "advance past the end moved the deck: {html}");

    harness.send(DeckIntent::Previous);
    let html = harness.render();
    assert!(html.contains("2 / 3"), "missing position in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hint_modal_opens_and_closes() {
    let mut harness = setup_view_harness(sample_catalog());
    harness.rebuild();

    harness.send(DeckIntent::ShowCurrentHint);
    let html = harness.render();
    assert!(html.contains("Подсказка"), "missing modal title in {html}");
    assert!(html.contains("Раскройте скобки"), "missing hint text in {html}");

    harness.send(DeckIntent::CloseHint);
    let html = harness.render();
    assert!(!html.contains("Раскройте скобки"), "hint still visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_hint_falls_back_when_card_has_none() {
    let mut harness = setup_view_harness(sample_catalog());
    harness.rebuild();

    harness.send(DeckIntent::Next);
    harness.send(DeckIntent::ShowCurrentHint);
    let html = harness.render();
    assert!(html.contains(HINT_UNAVAILABLE), "missing fallback hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracking_run_shows_progress_results_and_toasts() {
    let mut harness = setup_view_harness(sample_catalog());
    harness.rebuild();

    harness.send(DeckIntent::StartTracking);
    let html = harness.render();
    assert!(html.contains("Прогресс: 0%"), "missing progress label in {html}");
    assert!(html.contains("Сбросить"), "missing reset button in {html}");
    assert!(
        html.contains("Начинаем отслеживать прогресс!"),
        "missing tracking toast in {html}"
    );

    harness.send(DeckIntent::Answered(FormulaId::new(1)));
    let html = harness.render();
    assert!(html.contains("Прогресс: 33%"), "missing partial progress in {html}");
    assert!(!html.contains("Ваш результат"), "results shown early in {html}");

    harness.send(DeckIntent::Answered(FormulaId::new(2)));
    harness.send(DeckIntent::Answered(FormulaId::new(3)));
    let html = harness.render();
    assert!(html.contains("Прогресс: 100%"), "missing full progress in {html}");
    assert!(html.contains("Ваш результат"), "missing results panel in {html}");
    assert!(html.contains("Отличная работа! 🎉"), "missing pass headline in {html}");
    assert!(
        html.contains("Отличная работа! Результат: 100%"),
        "missing completion toast in {html}"
    );

    let vm = harness.handles.vm();
    assert_eq!(harness.dom.in_runtime(|| vm.read().progress().answered), 3);

    harness.send(DeckIntent::ResetProgress);
    let html = harness.render();
    assert!(html.contains("Начать тест"), "reset left tracking on: {html}");
    assert!(!html.contains("Ваш результат"), "results survived reset: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shuffle_keeps_every_card_and_toasts() {
    let mut harness = setup_view_harness(sample_catalog());
    harness.rebuild();

    harness.send(DeckIntent::Next);
    harness.send(DeckIntent::Shuffle);
    let html = harness.render();
    assert!(html.contains("1 / 3"), "shuffle did not rewind: {html}");
    assert!(html.contains("Карточки перемешаны!"), "missing shuffle toast in {html}");

    let vm = harness.handles.vm();
    let mut ids = harness.dom.in_runtime(|| vm.read().order_ids());
    ids.sort();
    assert_eq!(
        ids,
        vec![FormulaId::new(1), FormulaId::new(2), FormulaId::new(3)]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn card_hint_button_stays_but_disables_without_hint() {
    let mut harness = setup_view_harness(sample_catalog());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("flip-card__hint"), "missing card hint button in {html}");
    assert!(
        !html.contains("flip-card__hint--empty"),
        "hinted card rendered a disabled button: {html}"
    );

    harness.send(DeckIntent::Next);
    let html = harness.render();
    assert!(
        html.contains("flip-card__hint flip-card__hint--empty"),
        "missing disabled hint button in {html}"
    );
}
