//! Preset catalog - named layout archetypes.
//!
//! A preset is a precomputed merge of catalog rules representing a layout
//! role. The tables are built once at startup and shared for the life of
//! the process:
//!
//! - `base` - empty starting point (the default)
//! - `frame` - viewport-filling flex row, clipped, non-wrapping
//! - `box` - auto-height flex row that wraps
//! - `content` - flex item filler (grow/shrink, no container styling)
//! - `column` - `box` flowing top-to-bottom

use once_cell::sync::Lazy;

use super::{rules, ResolvedStyle};
use crate::types::PropValue;

// =============================================================================
// Preset
// =============================================================================

/// Named layout archetype selecting a precomputed style fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Empty fragment; styling comes entirely from props.
    #[default]
    Base,
    /// Viewport-filling flex row (`height: 100vh`, overflow hidden).
    Frame,
    /// Auto-height flex row that wraps.
    Box,
    /// Flex item filler (grow/shrink/basis only).
    Content,
    /// `Box`, flowing top-to-bottom.
    Column,
}

impl Preset {
    /// Parse a preset name. Unknown names return `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "base" => Some(Self::Base),
            "frame" => Some(Self::Frame),
            "box" => Some(Self::Box),
            "content" => Some(Self::Content),
            "column" => Some(Self::Column),
            _ => None,
        }
    }

    /// The preset's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Frame => "frame",
            Self::Box => "box",
            Self::Content => "content",
            Self::Column => "column",
        }
    }

    /// All presets.
    pub const fn all() -> &'static [Preset] {
        &[
            Self::Base,
            Self::Frame,
            Self::Box,
            Self::Content,
            Self::Column,
        ]
    }

    /// The preset's precomputed style fragment.
    pub fn fragment(self) -> &'static ResolvedStyle {
        match self {
            Self::Base => &BASE,
            Self::Frame => &FRAME,
            Self::Box => &BOX,
            Self::Content => &CONTENT,
            Self::Column => &COLUMN,
        }
    }
}

/// List all preset names.
pub fn preset_names() -> &'static [&'static str] {
    &["base", "frame", "box", "content", "column"]
}

// =============================================================================
// Fragment tables
// =============================================================================

/// Merge catalog rules into one fragment, in the order given.
///
/// Presets are built out of the same catalog the resolver uses; a name
/// without a rule is skipped like any other unknown prop.
fn merge_rules(entries: &[(&'static str, PropValue)]) -> ResolvedStyle {
    let mut merged = ResolvedStyle::new();
    for (name, value) in entries {
        if let Some(rule) = rules::rule(name) {
            merged.merge(&rule.apply(value, None));
        }
    }
    merged
}

static BASE: Lazy<ResolvedStyle> = Lazy::new(ResolvedStyle::new);

static FRAME: Lazy<ResolvedStyle> = Lazy::new(|| {
    merge_rules(&[
        ("height", PropValue::from("100vh")),
        ("overflowX", PropValue::from("hidden")),
        ("overflowY", PropValue::from("hidden")),
        ("flex", PropValue::Bool(true)),
        ("grow", PropValue::from(1)),
        ("shrink", PropValue::from(1)),
        ("flexBasis", PropValue::from("auto")),
        ("horizontal", PropValue::Bool(true)),
        ("nowrap", PropValue::Bool(true)),
        ("justifyContent", PropValue::from("flex-start")),
        ("order", PropValue::from(0)),
        ("boxSizing", PropValue::from("border-box")),
        ("position", PropValue::from("relative")),
    ])
});

static BOX: Lazy<ResolvedStyle> = Lazy::new(|| {
    merge_rules(&[
        ("height", PropValue::from("auto")),
        ("flex", PropValue::Bool(true)),
        ("grow", PropValue::from(1)),
        ("shrink", PropValue::from(1)),
        ("flexBasis", PropValue::from("auto")),
        ("horizontal", PropValue::Bool(true)),
        ("wrap", PropValue::Bool(true)),
        ("justifyContent", PropValue::from("flex-start")),
        ("order", PropValue::from(0)),
        ("boxSizing", PropValue::from("border-box")),
        ("position", PropValue::from("relative")),
    ])
});

static CONTENT: Lazy<ResolvedStyle> = Lazy::new(|| {
    merge_rules(&[
        ("grow", PropValue::from(1)),
        ("shrink", PropValue::from(1)),
        ("flexBasis", PropValue::from("auto")),
        ("boxSizing", PropValue::from("border-box")),
    ])
});

static COLUMN: Lazy<ResolvedStyle> = Lazy::new(|| {
    let mut merged = (*BOX).clone();
    merged.merge(&merge_rules(&[("vertical", PropValue::Bool(true))]));
    merged
});

// =============================================================================
// Tests
// =============================================================================
