//! Flex primitive - container component with declarative flexbox styling.
//!
//! The fundamental container. Props map 1:1 onto the style rule catalog:
//! flag props live in a [`StyleFlags`] bitfield, value props are `Option`
//! fields, and an explicit `style` override always wins last.
//!
//! # Merge order
//!
//! Rules apply in catalog declaration order (see
//! [`rule_names`](crate::style::rule_names)), after the preset fragment and
//! before the `style` override. The order only matters when two rules write
//! the same CSS key (`wrap` vs `nowrap`, `center` vs `justifyContent`).
//!
//! # Example
//!
//! ```
//! use calcview::primitives::{flex, FlexProps};
//! use calcview::{PropValue, StyleFlags, Theme};
//!
//! let element = flex(FlexProps {
//!     theme: Some(Theme::default()),
//!     flags: StyleFlags::GUTTER | StyleFlags::NOGROW,
//!     width: Some(PropValue::from("50%")),
//!     ..Default::default()
//! });
//!
//! assert_eq!(element.style().get("width").unwrap().to_string(), "50%");
//! ```

use crate::render::Element;
use crate::style::{resolve, rules, Preset, ResolvedStyle, StyleProps};
use crate::theme::Theme;
use crate::types::{PropValue, StyleFlags};

// =============================================================================
// Flex Props
// =============================================================================

/// Properties for the flex container primitive.
///
/// Every field is optional; the default renders an unstyled `base`
/// container. Value fields carry the prop value through to the matching
/// CSS key unchanged.
#[derive(Default)]
pub struct FlexProps {
    /// Layout archetype supplying the starting fragment.
    pub preset: Preset,

    /// Design tokens for the gutter rules. Absent theme degrades those
    /// rules to unset declarations.
    pub theme: Option<Theme>,

    /// Explicit style override, merged last.
    pub style: ResolvedStyle,

    /// Flag props (`nogrow`, `gutter`, `center`, ...).
    pub flags: StyleFlags,

    // =========================================================================
    // Value props
    // =========================================================================
    /// `align-self: {value}`
    pub align_self: Option<PropValue>,

    /// `box-sizing: {value}`
    pub box_sizing: Option<PropValue>,

    /// `flex-basis: {value}`
    pub flex_basis: Option<PropValue>,

    /// `flex-grow: {value}`
    pub grow: Option<PropValue>,

    /// `height: {value}`
    pub height: Option<PropValue>,

    /// `justify-content: {value}`
    pub justify_content: Option<PropValue>,

    /// `max-height: {value}`
    pub max_height: Option<PropValue>,

    /// `max-width: {value}`
    pub max_width: Option<PropValue>,

    /// `order: {value}`
    pub order: Option<PropValue>,

    /// `overflow-x: {value}`
    pub overflow_x: Option<PropValue>,

    /// `overflow-y: {value}`
    pub overflow_y: Option<PropValue>,

    /// `position: {value}`
    pub position: Option<PropValue>,

    /// `flex-shrink: {value}`
    pub shrink: Option<PropValue>,

    /// `width: {value}`
    pub width: Option<PropValue>,

    // =========================================================================
    // Children
    // =========================================================================
    /// Child elements, passed through to the container body.
    pub children: Vec<Element>,
}

impl FlexProps {
    /// The value prop backing the given catalog rule, if set.
    fn value_prop(&self, name: &str) -> Option<&PropValue> {
        match name {
            "alignSelf" => self.align_self.as_ref(),
            "boxSizing" => self.box_sizing.as_ref(),
            "flexBasis" => self.flex_basis.as_ref(),
            "grow" => self.grow.as_ref(),
            "height" => self.height.as_ref(),
            "justifyContent" => self.justify_content.as_ref(),
            "maxHeight" => self.max_height.as_ref(),
            "maxWidth" => self.max_width.as_ref(),
            "order" => self.order.as_ref(),
            "overflowX" => self.overflow_x.as_ref(),
            "overflowY" => self.overflow_y.as_ref(),
            "position" => self.position.as_ref(),
            "shrink" => self.shrink.as_ref(),
            "width" => self.width.as_ref(),
            _ => None,
        }
    }

    /// Lower the typed props to an ordered bag, in catalog declaration
    /// order.
    pub fn style_props(&self) -> StyleProps {
        let mut props = StyleProps::new();
        for name in rules::rule_names() {
            if let Some(flag) = StyleFlags::from_rule(name) {
                if self.flags.contains(flag) {
                    props = props.set(*name, true);
                }
            } else if let Some(value) = self.value_prop(name) {
                props = props.set(*name, value.clone());
            }
        }
        props
    }
}

// =============================================================================
// Flex Component
// =============================================================================

/// Create a flex container element.
///
/// Resolves the props to a style and returns a single container carrying
/// it, with the children as its body. No other side effects.
pub fn flex(props: FlexProps) -> Element {
    let resolved = resolve(
        props.preset,
        props.theme.as_ref(),
        &props.style_props(),
        &props.style,
    );
    Element::container(resolved, props.children)
}

/// [`flex`] with the `frame` preset: a viewport-filling row.
pub fn frame(mut props: FlexProps) -> Element {
    props.preset = Preset::Frame;
    flex(props)
}

/// [`flex`] with the `box` preset. (`box` is a keyword, hence the name.)
pub fn box_primitive(mut props: FlexProps) -> Element {
    props.preset = Preset::Box;
    flex(props)
}

/// [`flex`] with the `content` preset: a grow/shrink filler item.
pub fn content(mut props: FlexProps) -> Element {
    props.preset = Preset::Content;
    flex(props)
}

/// [`flex`] with the `column` preset: a box flowing top-to-bottom.
pub fn column(mut props: FlexProps) -> Element {
    props.preset = Preset::Column;
    flex(props)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ElementKind;
    use crate::types::StyleValue;

    #[test]
    fn test_flex_default_is_unstyled_container() {
        let element = flex(FlexProps::default());
        assert_eq!(element.kind(), ElementKind::Container);
        assert!(element.style().is_empty());
        assert!(element.children().is_empty());
    }

    #[test]
    fn test_flex_passes_children_through() {
        let element = flex(FlexProps {
            children: vec![Element::text("hello"), Element::text("world")],
            ..Default::default()
        });
        assert_eq!(element.children().len(), 2);
        assert_eq!(element.text_content(), "helloworld");
    }

    #[test]
    fn test_flag_props_inject_fragments() {
        let element = flex(FlexProps {
            flags: StyleFlags::NOGROW | StyleFlags::FULL_WIDTH,
            ..Default::default()
        });
        assert_eq!(element.style().get("flexGrow"), Some(&StyleValue::int(0)));
        assert_eq!(element.style().get("width"), Some(&StyleValue::from("100%")));
    }

    #[test]
    fn test_absent_flags_omit_fragments() {
        let element = flex(FlexProps::default());
        assert!(!element.style().contains("flexGrow"));
        assert!(!element.style().contains("width"));
    }

    #[test]
    fn test_value_props_pass_through() {
        let element = flex(FlexProps {
            width: Some(PropValue::from("50%")),
            order: Some(PropValue::from(3)),
            ..Default::default()
        });
        assert_eq!(element.style().get("width"), Some(&StyleValue::from("50%")));
        assert_eq!(element.style().get("order"), Some(&StyleValue::Int(3)));
    }

    #[test]
    fn test_style_override_wins_over_props() {
        let element = flex(FlexProps {
            width: Some(PropValue::from("10px")),
            style: ResolvedStyle::new().with("width", "20px"),
            ..Default::default()
        });
        assert_eq!(element.style().get("width"), Some(&StyleValue::from("20px")));
    }

    #[test]
    fn test_gutter_flags_with_theme() {
        let element = flex(FlexProps {
            theme: Some(Theme::new(8)),
            flags: StyleFlags::GUTTER | StyleFlags::INNER,
            ..Default::default()
        });
        let style = element.style();
        assert_eq!(
            style.get("paddingLeft"),
            Some(&StyleValue::from(String::from("8px")))
        );
        assert_eq!(
            style.get("paddingRight"),
            Some(&StyleValue::from(String::from("8px")))
        );
        assert_eq!(
            style.get("paddingTop"),
            Some(&StyleValue::from(String::from("8px")))
        );
        assert_eq!(
            style.get("paddingBottom"),
            Some(&StyleValue::from(String::from("8px")))
        );
    }

    #[test]
    fn test_gutter_flags_without_theme_degrade() {
        let element = flex(FlexProps {
            flags: StyleFlags::GUTTER,
            ..Default::default()
        });
        assert!(!element.style().contains("paddingLeft"));
    }

    #[test]
    fn test_catalog_order_full_before_width() {
        // `full` (catalog position before `width`) loses to the width value
        // prop on the shared key.
        let element = flex(FlexProps {
            flags: StyleFlags::FULL,
            width: Some(PropValue::from("50%")),
            ..Default::default()
        });
        assert_eq!(element.style().get("width"), Some(&StyleValue::from("50%")));
        assert_eq!(
            element.style().get("height"),
            Some(&StyleValue::from("100%"))
        );
    }

    #[test]
    fn test_preset_wrappers() {
        assert_eq!(
            frame(FlexProps::default()).style().get("height"),
            Some(&StyleValue::from("100vh"))
        );
        assert_eq!(
            box_primitive(FlexProps::default()).style().get("flexWrap"),
            Some(&StyleValue::from("wrap"))
        );
        assert_eq!(
            content(FlexProps::default()).style().get("flexGrow"),
            Some(&StyleValue::Int(1))
        );
        assert_eq!(
            column(FlexProps::default()).style().get("flexDirection"),
            Some(&StyleValue::from("column"))
        );
    }

    #[test]
    fn test_style_props_lowering_order() {
        let props = FlexProps {
            flags: StyleFlags::NOGROW | StyleFlags::CENTER,
            width: Some(PropValue::from("50%")),
            ..Default::default()
        };
        let bag = props.style_props();
        let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        // Catalog declaration order: center before nogrow before width.
        assert_eq!(keys, vec!["center", "nogrow", "width"]);
    }
}
