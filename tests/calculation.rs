//! End-to-end tests for the calculation view: rendered content, pointer
//! activation, and re-render suppression, driven through the public API
//! the way a host application would.

use std::cell::Cell;
use std::rc::Rc;

use calcview::{
    Calculation, CalculationProps, CalculationView, ElementKind, Preset, StyleValue, Theme,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn create_calculation(input: &str, output: i64) -> Calculation {
    Calculation::new(input, output.to_string())
}

/// A counting click handler and the counter it bumps.
fn click_spy() -> (Rc<Cell<usize>>, Rc<dyn Fn()>) {
    let hits = Rc::new(Cell::new(0));
    let hits_in_handler = hits.clone();
    let handler: Rc<dyn Fn()> = Rc::new(move || {
        hits_in_handler.set(hits_in_handler.get() + 1);
    });
    (hits, handler)
}

#[test]
fn renders_as_flex_container() {
    init_logging();
    let tree = calcview::calculation(&CalculationProps {
        calculation: create_calculation("1+1", 2),
        ..Default::default()
    });

    assert_eq!(tree.kind(), ElementKind::Container);
    assert_eq!(
        tree.style().get("display"),
        Some(&StyleValue::from("flex"))
    );
    assert_eq!(tree.style(), Preset::Box.fragment());
}

#[test]
fn renders_calculation_input_and_output() {
    init_logging();
    let calculation = create_calculation("1+1", 2);
    let tree = calcview::calculation(&CalculationProps {
        calculation: calculation.clone(),
        ..Default::default()
    });

    let texts = tree.find_all(ElementKind::Text);
    assert!(texts
        .iter()
        .any(|t| t.content() == Some(calculation.input.as_str())));
    assert!(texts
        .iter()
        .any(|t| t.content() == Some(calculation.output.as_str())));
}

#[test]
fn renders_pointer() {
    init_logging();
    let tree = calcview::calculation(&CalculationProps {
        calculation: create_calculation("1+1", 2),
        ..Default::default()
    });

    assert_eq!(tree.find_all(ElementKind::Pointer).len(), 1);
}

#[test]
fn dispatches_on_pointer_click() {
    init_logging();
    let (hits, handler) = click_spy();
    let tree = calcview::calculation(&CalculationProps {
        calculation: create_calculation("1+1", 2),
        on_pointer_click: Some(handler),
        ..Default::default()
    });

    let pointers = tree.find_all(ElementKind::Pointer);
    assert_eq!(hits.get(), 0);
    assert!(pointers[0].click());
    assert_eq!(hits.get(), 1);

    // Exactly once per activation.
    assert!(pointers[0].click());
    assert_eq!(hits.get(), 2);
}

#[test]
fn does_not_update_when_calculation_is_the_same() {
    init_logging();
    let mut view = CalculationView::new();
    let calculation = create_calculation("1+1", 2);

    assert!(view.render(&CalculationProps {
        calculation: calculation.clone(),
        ..Default::default()
    }));

    // Other props change; the calculation does not.
    let (_, handler) = click_spy();
    let rendered = view.render(&CalculationProps {
        calculation,
        on_pointer_click: Some(handler),
        theme: Some(Theme::new(16)),
    });

    assert!(!rendered);
    assert_eq!(view.render_count(), 1);
}

#[test]
fn updates_when_calculation_changes() {
    init_logging();
    let mut view = CalculationView::new();
    view.render(&CalculationProps {
        calculation: create_calculation("1+1", 2),
        ..Default::default()
    });

    let rendered = view.render(&CalculationProps {
        calculation: create_calculation("12+120", 132),
        ..Default::default()
    });

    assert!(rendered);
    assert_eq!(view.render_count(), 2);
    let text = view.element().unwrap().text_content();
    assert!(text.contains("12+120"));
    assert!(text.contains("132"));
}

#[test]
fn end_to_end_render_and_activate() {
    init_logging();
    let (hits, handler) = click_spy();
    let mut view = CalculationView::new();
    view.render(&CalculationProps {
        calculation: create_calculation("1+1", 2),
        on_pointer_click: Some(handler),
        theme: Some(Theme::default()),
    });

    let tree = view.element().unwrap();
    let text = tree.text_content();
    assert!(text.contains("1+1"));
    assert!(text.contains("2"));

    let pointers = tree.find_all(ElementKind::Pointer);
    assert_eq!(pointers.len(), 1);
    assert!(pointers[0].click());
    assert_eq!(hits.get(), 1);
}
