//! Core types for calcview.
//!
//! These types define the value vocabulary that everything builds on.
//! They flow from caller props through the style resolver and out to the
//! host renderer as resolved CSS declarations.

use std::borrow::Cow;
use std::fmt;

// =============================================================================
// StyleValue - A resolved CSS declaration value
// =============================================================================

/// A CSS declaration value, either text or a number.
///
/// Numbers are kept as integers for exact comparison - no floating point
/// epsilon needed. The host renderer formats them (`flexGrow: 0`, `order: 0`);
/// everything else travels as text (`"100%"`, `"8px"`, `"border-box"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// Textual CSS value (`"flex"`, `"50%"`, `"8px"`).
    Str(Cow<'static, str>),
    /// Numeric CSS value (`0`, `1`).
    Int(i64),
}

impl StyleValue {
    /// Build a textual value from a static string.
    ///
    /// Usable in const contexts - the rule catalog is built out of these.
    pub const fn text(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }

    /// Build a numeric value.
    pub const fn int(n: i64) -> Self {
        Self::Int(n)
    }

    /// The value as CSS text, borrowing when possible.
    pub fn as_css(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_ref()),
            Self::Int(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&'static str> for StyleValue {
    fn from(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<u16> for StyleValue {
    fn from(n: u16) -> Self {
        Self::Int(n as i64)
    }
}

// =============================================================================
// PropValue - A caller-supplied prop value
// =============================================================================

/// A prop value as supplied by the caller.
///
/// Booleans exist for flag props (`nogrow`, `gutter`) whose rules ignore the
/// value entirely; strings and numbers feed the pass-through rules. There is
/// no validation that the resulting CSS is well-formed - that is the host
/// rendering layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// Flag prop (value ignored by constant rules).
    Bool(bool),
    /// Textual prop value (`"50%"`, `"flex-end"`).
    Str(Cow<'static, str>),
    /// Numeric prop value (`1`, `0`).
    Int(i64),
}

impl PropValue {
    /// Convert to a [`StyleValue`] for pass-through rules.
    ///
    /// A boolean handed to a pass-through rule renders as `"true"`/`"false"`,
    /// garbage in, garbage out.
    pub fn to_style_value(&self) -> StyleValue {
        match self {
            Self::Bool(b) => StyleValue::text(if *b { "true" } else { "false" }),
            Self::Str(s) => StyleValue::Str(s.clone()),
            Self::Int(n) => StyleValue::Int(*n),
        }
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&'static str> for PropValue {
    fn from(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<u16> for PropValue {
    fn from(n: u16) -> Self {
        Self::Int(n as i64)
    }
}

// =============================================================================
// StyleFlags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Flag props as a bitfield for compact storage and comparison.
    ///
    /// Each flag selects one no-argument rule from the style catalog;
    /// presence injects the rule's fixed fragment, absence omits it.
    /// Combine with bitwise OR: `StyleFlags::GUTTER | StyleFlags::INNER`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u32 {
        const NONE = 0;
        /// `display: flex`
        const FLEX = 1 << 0;
        /// `flex-wrap: wrap`
        const WRAP = 1 << 1;
        /// `flex-wrap: nowrap`
        const NOWRAP = 1 << 2;
        /// `flex-direction: column`
        const VERTICAL = 1 << 3;
        /// `flex-direction: row`
        const HORIZONTAL = 1 << 4;
        /// `flex-direction: column-reverse`
        const VERTICAL_REVERSE = 1 << 5;
        /// `flex-direction: row-reverse`
        const HORIZONTAL_REVERSE = 1 << 6;
        /// `flex-grow: 0`
        const NOGROW = 1 << 7;
        /// `flex-shrink: 0`
        const NOSHRINK = 1 << 8;
        /// `align-items: center; justify-content: center`
        const CENTER = 1 << 9;
        /// `width: 100%`
        const FULL_WIDTH = 1 << 10;
        /// `height: 100%`
        const FULL_HEIGHT = 1 << 11;
        /// `width: 100%; height: 100%`
        const FULL = 1 << 12;
        /// `padding-left: 0; padding-right: 0`
        const NOGUTTER = 1 << 13;
        /// `padding-left: {theme.gutter}px`
        const GUTTER_LEFT = 1 << 14;
        /// `padding-right: {theme.gutter}px`
        const GUTTER_RIGHT = 1 << 15;
        /// `padding-left` and `padding-right` at `{theme.gutter}px`
        const GUTTER = 1 << 16;
        /// `padding-top` and `padding-bottom` at `{theme.gutter}px`
        const INNER = 1 << 17;
    }
}

impl StyleFlags {
    /// The flag selecting the given catalog rule, if that rule is a flag rule.
    ///
    /// Value-carrying rules (`width`, `grow`, ...) return `None`.
    pub fn from_rule(name: &str) -> Option<Self> {
        match name {
            "flex" => Some(Self::FLEX),
            "wrap" => Some(Self::WRAP),
            "nowrap" => Some(Self::NOWRAP),
            "vertical" => Some(Self::VERTICAL),
            "horizontal" => Some(Self::HORIZONTAL),
            "verticalReverse" => Some(Self::VERTICAL_REVERSE),
            "horizontalReverse" => Some(Self::HORIZONTAL_REVERSE),
            "nogrow" => Some(Self::NOGROW),
            "noshrink" => Some(Self::NOSHRINK),
            "center" => Some(Self::CENTER),
            "fullWidth" => Some(Self::FULL_WIDTH),
            "fullHeight" => Some(Self::FULL_HEIGHT),
            "full" => Some(Self::FULL),
            "nogutter" => Some(Self::NOGUTTER),
            "gutterLeft" => Some(Self::GUTTER_LEFT),
            "gutterRight" => Some(Self::GUTTER_RIGHT),
            "gutter" => Some(Self::GUTTER),
            "inner" => Some(Self::INNER),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
