//! Calculation view - one calculator entry with input, output and pointer.
//!
//! Renders a flex row holding the entry's input expression, an activatable
//! pointer region, and the computed output. The pointer invokes the
//! caller's callback with no arguments on activation.
//!
//! # Re-render suppression
//!
//! [`CalculationView`] keeps the previously rendered calculation and skips
//! the render pass when the incoming one is field-equal, regardless of
//! changes to other props. Callers can rely on the skip: the cached tree,
//! including its bound callback, survives a skipped pass.

use crate::primitives::{box_primitive, content, FlexProps};
use crate::render::{ClickCallback, Element};
use crate::style::{resolve, Preset, ResolvedStyle, StyleProps};
use crate::theme::Theme;
use crate::types::StyleFlags;

// =============================================================================
// Calculation
// =============================================================================

/// One calculator entry: the typed expression and its computed result.
///
/// A plain immutable value; field-wise equality drives re-render
/// suppression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calculation {
    /// The input expression, e.g. `"1+1"`.
    pub input: String,
    /// The computed output, e.g. `"2"`.
    pub output: String,
}

impl Calculation {
    /// Create a calculation value.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

// =============================================================================
// Calculation Props
// =============================================================================

/// Properties for the calculation view.
#[derive(Clone, Default)]
pub struct CalculationProps {
    /// The entry to display. The only prop that gates re-rendering.
    pub calculation: Calculation,

    /// Invoked with no arguments when the pointer region is activated.
    pub on_pointer_click: Option<ClickCallback>,

    /// Design tokens for the container's gutter spacing.
    pub theme: Option<Theme>,
}

// =============================================================================
// Calculation Component
// =============================================================================

/// Render a calculation entry as a flex-rooted element tree.
///
/// The root is a `box` container; the input and output live in `content`
/// fillers around the pointer region.
pub fn calculation(props: &CalculationProps) -> Element {
    let mut flags = StyleFlags::NONE;
    if props.theme.is_some() {
        flags = StyleFlags::GUTTER | StyleFlags::INNER;
    }

    let pointer_style = resolve(
        Preset::Base,
        props.theme.as_ref(),
        &StyleProps::new().set("nogrow", true).set("center", true),
        &ResolvedStyle::new(),
    );

    box_primitive(FlexProps {
        theme: props.theme,
        flags,
        children: vec![
            content(FlexProps {
                children: vec![Element::text(props.calculation.input.as_str())],
                ..Default::default()
            }),
            Element::pointer(props.on_pointer_click.clone()).with_style(pointer_style),
            content(FlexProps {
                children: vec![Element::text(props.calculation.output.as_str())],
                ..Default::default()
            }),
        ],
        ..Default::default()
    })
}

// =============================================================================
// Calculation View (retained)
// =============================================================================

/// Retained calculation view with re-render suppression.
///
/// Compares the incoming calculation to the previously rendered one and
/// only rebuilds the tree when they differ.
#[derive(Default)]
pub struct CalculationView {
    previous: Option<Calculation>,
    element: Option<Element>,
    render_count: usize,
}

impl CalculationView {
    /// Create a view that has not rendered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the props, skipping the pass when the calculation is
    /// unchanged.
    ///
    /// Returns whether a render pass actually ran. On a skipped pass the
    /// cached tree is kept as-is; changes to props other than
    /// `calculation` do not trigger a rebuild.
    pub fn render(&mut self, props: &CalculationProps) -> bool {
        if self.previous.as_ref() == Some(&props.calculation) {
            return false;
        }

        self.element = Some(calculation(props));
        self.previous = Some(props.calculation.clone());
        self.render_count += 1;
        true
    }

    /// The current tree, if a pass has run.
    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    /// Number of render passes that have run.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ElementKind;
    use std::cell::Cell;
    use std::rc::Rc;

    fn props(input: &str, output: &str) -> CalculationProps {
        CalculationProps {
            calculation: Calculation::new(input, output),
            ..Default::default()
        }
    }

    #[test]
    fn test_renders_as_box_container() {
        let tree = calculation(&props("1+1", "2"));
        assert_eq!(tree.kind(), ElementKind::Container);
        assert_eq!(tree.style(), Preset::Box.fragment());
    }

    #[test]
    fn test_renders_input_and_output() {
        let tree = calculation(&props("1+1", "2"));
        let text = tree.text_content();
        assert!(text.contains("1+1"));
        assert!(text.contains("2"));
    }

    #[test]
    fn test_renders_one_pointer() {
        let tree = calculation(&props("1+1", "2"));
        assert_eq!(tree.find_all(ElementKind::Pointer).len(), 1);
    }

    #[test]
    fn test_pointer_style_is_resolved() {
        let tree = calculation(&props("1+1", "2"));
        let pointers = tree.find_all(ElementKind::Pointer);
        let style = pointers[0].style();
        assert!(style.contains("flexGrow"));
        assert!(style.contains("alignItems"));
    }

    #[test]
    fn test_theme_adds_gutter_spacing() {
        let themed = CalculationProps {
            theme: Some(Theme::new(8)),
            ..props("1+1", "2")
        };
        let tree = calculation(&themed);
        assert!(tree.style().contains("paddingLeft"));
        assert!(tree.style().contains("paddingTop"));
    }

    #[test]
    fn test_view_first_render_runs() {
        let mut view = CalculationView::new();
        assert!(view.render(&props("1+1", "2")));
        assert_eq!(view.render_count(), 1);
        assert!(view.element().is_some());
    }

    #[test]
    fn test_view_skips_when_calculation_unchanged() {
        let mut view = CalculationView::new();
        view.render(&props("1+1", "2"));

        // Same calculation, different incidental props: no pass.
        let clicks = Rc::new(Cell::new(0));
        let clicks_in_handler = clicks.clone();
        let changed = CalculationProps {
            calculation: Calculation::new("1+1", "2"),
            on_pointer_click: Some(Rc::new(move || {
                clicks_in_handler.set(clicks_in_handler.get() + 1);
            })),
            theme: Some(Theme::new(16)),
        };
        assert!(!view.render(&changed));
        assert_eq!(view.render_count(), 1);
    }

    #[test]
    fn test_view_rerenders_when_calculation_changes() {
        let mut view = CalculationView::new();
        view.render(&props("1+1", "2"));
        assert!(view.render(&props("12+120", "132")));
        assert_eq!(view.render_count(), 2);
        assert!(view.element().unwrap().text_content().contains("132"));
    }

    #[test]
    fn test_view_skipped_pass_keeps_cached_tree() {
        let mut view = CalculationView::new();
        let clicks = Rc::new(Cell::new(0));
        let clicks_in_handler = clicks.clone();
        view.render(&CalculationProps {
            calculation: Calculation::new("1+1", "2"),
            on_pointer_click: Some(Rc::new(move || {
                clicks_in_handler.set(clicks_in_handler.get() + 1);
            })),
            theme: None,
        });

        // Skipped pass: the originally bound callback stays live.
        view.render(&props("1+1", "2"));
        let pointers = view.element().unwrap().find_all(ElementKind::Pointer);
        assert!(pointers[0].click());
        assert_eq!(clicks.get(), 1);
    }
}
