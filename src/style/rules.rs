//! The style rule catalog.
//!
//! Every supported prop name maps to exactly one rule. A rule is either a
//! constant fragment (flag props like `nogrow`, whose value is ignored) or a
//! transform computing a fragment from the prop value and the ambient theme
//! (pass-through props like `width`, and the gutter family).
//!
//! The catalog is fixed at compile time. [`rule_names`] exposes it in
//! declaration order, which is the merge order the typed prop surface uses.

use log::warn;

use super::Fragment;
use crate::theme::Theme;
use crate::types::{PropValue, StyleValue};

// =============================================================================
// StyleRule
// =============================================================================

/// One entry in the rule catalog.
#[derive(Clone, Copy)]
pub enum StyleRule {
    /// Fixed fragment; the prop value is ignored.
    Constant(&'static [(&'static str, StyleValue)]),
    /// Fragment computed from the prop value and the theme.
    Transform(fn(&PropValue, Option<&Theme>) -> Fragment),
}

impl StyleRule {
    /// Apply the rule, producing its fragment.
    pub fn apply(&self, value: &PropValue, theme: Option<&Theme>) -> Fragment {
        match self {
            Self::Constant(decls) => {
                let mut fragment = Fragment::new();
                for (key, value) in *decls {
                    fragment.set(*key, value.clone());
                }
                fragment
            }
            Self::Transform(transform) => transform(value, theme),
        }
    }
}

// =============================================================================
// Constant fragments
// =============================================================================

const CENTER: &[(&str, StyleValue)] = &[
    ("alignItems", StyleValue::text("center")),
    ("justifyContent", StyleValue::text("center")),
];
const FLEX: &[(&str, StyleValue)] = &[("display", StyleValue::text("flex"))];
const FULL: &[(&str, StyleValue)] = &[
    ("width", StyleValue::text("100%")),
    ("height", StyleValue::text("100%")),
];
const FULL_HEIGHT: &[(&str, StyleValue)] = &[("height", StyleValue::text("100%"))];
const FULL_WIDTH: &[(&str, StyleValue)] = &[("width", StyleValue::text("100%"))];
const HORIZONTAL: &[(&str, StyleValue)] = &[("flexDirection", StyleValue::text("row"))];
const HORIZONTAL_REVERSE: &[(&str, StyleValue)] =
    &[("flexDirection", StyleValue::text("row-reverse"))];
const NOGROW: &[(&str, StyleValue)] = &[("flexGrow", StyleValue::int(0))];
const NOGUTTER: &[(&str, StyleValue)] = &[
    ("paddingRight", StyleValue::int(0)),
    ("paddingLeft", StyleValue::int(0)),
];
const NOSHRINK: &[(&str, StyleValue)] = &[("flexShrink", StyleValue::int(0))];
const NOWRAP: &[(&str, StyleValue)] = &[("flexWrap", StyleValue::text("nowrap"))];
const VERTICAL: &[(&str, StyleValue)] = &[("flexDirection", StyleValue::text("column"))];
const VERTICAL_REVERSE: &[(&str, StyleValue)] =
    &[("flexDirection", StyleValue::text("column-reverse"))];
const WRAP: &[(&str, StyleValue)] = &[("flexWrap", StyleValue::text("wrap"))];

// =============================================================================
// Transform helpers
// =============================================================================

/// Copy the prop value to a single CSS key, unchanged.
fn pass_through(key: &'static str, value: &PropValue) -> Fragment {
    let mut fragment = Fragment::new();
    fragment.set(key, value.to_style_value());
    fragment
}

/// Pixel padding from `theme.gutter` on each of the given keys.
///
/// Without a theme the declarations are left unset. This is the documented
/// soft failure of the gutter family, not a crash.
fn gutter_fragment(theme: Option<&Theme>, keys: &'static [&'static str]) -> Fragment {
    let mut fragment = Fragment::new();
    match theme {
        Some(theme) => {
            for key in keys {
                fragment.set(*key, format!("{}px", theme.gutter));
            }
        }
        None => warn!("gutter rule for {:?} requested without a theme; leaving unset", keys),
    }
    fragment
}

// =============================================================================
// Catalog lookup
// =============================================================================

/// Look up a rule by prop name.
///
/// Unknown names return `None`; the resolver treats them as a permissive
/// no-op rather than an error.
pub fn rule(name: &str) -> Option<StyleRule> {
    match name {
        "alignSelf" => Some(StyleRule::Transform(|v, _| pass_through("alignSelf", v))),
        "boxSizing" => Some(StyleRule::Transform(|v, _| pass_through("boxSizing", v))),
        "center" => Some(StyleRule::Constant(CENTER)),
        "flex" => Some(StyleRule::Constant(FLEX)),
        "flexBasis" => Some(StyleRule::Transform(|v, _| pass_through("flexBasis", v))),
        "full" => Some(StyleRule::Constant(FULL)),
        "fullHeight" => Some(StyleRule::Constant(FULL_HEIGHT)),
        "fullWidth" => Some(StyleRule::Constant(FULL_WIDTH)),
        "grow" => Some(StyleRule::Transform(|v, _| pass_through("flexGrow", v))),
        "height" => Some(StyleRule::Transform(|v, _| pass_through("height", v))),
        "horizontal" => Some(StyleRule::Constant(HORIZONTAL)),
        "horizontalReverse" => Some(StyleRule::Constant(HORIZONTAL_REVERSE)),
        "justifyContent" => Some(StyleRule::Transform(|v, _| {
            pass_through("justifyContent", v)
        })),
        "maxHeight" => Some(StyleRule::Transform(|v, _| pass_through("maxHeight", v))),
        "maxWidth" => Some(StyleRule::Transform(|v, _| pass_through("maxWidth", v))),
        "nogrow" => Some(StyleRule::Constant(NOGROW)),
        "nogutter" => Some(StyleRule::Constant(NOGUTTER)),
        "noshrink" => Some(StyleRule::Constant(NOSHRINK)),
        "nowrap" => Some(StyleRule::Constant(NOWRAP)),
        "order" => Some(StyleRule::Transform(|v, _| pass_through("order", v))),
        "overflowX" => Some(StyleRule::Transform(|v, _| pass_through("overflowX", v))),
        "overflowY" => Some(StyleRule::Transform(|v, _| pass_through("overflowY", v))),
        "position" => Some(StyleRule::Transform(|v, _| pass_through("position", v))),
        "shrink" => Some(StyleRule::Transform(|v, _| pass_through("flexShrink", v))),
        "vertical" => Some(StyleRule::Constant(VERTICAL)),
        "verticalReverse" => Some(StyleRule::Constant(VERTICAL_REVERSE)),
        "width" => Some(StyleRule::Transform(|v, _| pass_through("width", v))),
        "wrap" => Some(StyleRule::Constant(WRAP)),
        "gutterLeft" => Some(StyleRule::Transform(|_, theme| {
            gutter_fragment(theme, &["paddingLeft"])
        })),
        "gutterRight" => Some(StyleRule::Transform(|_, theme| {
            gutter_fragment(theme, &["paddingRight"])
        })),
        "gutter" => Some(StyleRule::Transform(|_, theme| {
            gutter_fragment(theme, &["paddingRight", "paddingLeft"])
        })),
        "inner" => Some(StyleRule::Transform(|_, theme| {
            gutter_fragment(theme, &["paddingTop", "paddingBottom"])
        })),
        _ => None,
    }
}

/// All rule names in catalog declaration order.
///
/// This order is the merge order used when props are applied from the typed
/// [`FlexProps`](crate::primitives::FlexProps) surface.
pub fn rule_names() -> &'static [&'static str] {
    &[
        "alignSelf",
        "boxSizing",
        "center",
        "flex",
        "flexBasis",
        "full",
        "fullHeight",
        "fullWidth",
        "grow",
        "height",
        "horizontal",
        "horizontalReverse",
        "justifyContent",
        "maxHeight",
        "maxWidth",
        "nogrow",
        "nogutter",
        "noshrink",
        "nowrap",
        "order",
        "overflowX",
        "overflowY",
        "position",
        "shrink",
        "vertical",
        "verticalReverse",
        "width",
        "wrap",
        "gutterLeft",
        "gutterRight",
        "gutter",
        "inner",
    ]
}

// =============================================================================
// Tests
// =============================================================================
