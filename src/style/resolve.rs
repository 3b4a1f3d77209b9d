//! Prop-to-style resolution.
//!
//! [`resolve`] merges three sources into one flat style, later sources
//! winning on key collision:
//!
//! 1. the preset's precomputed fragment
//! 2. one fragment per supplied prop, looked up in the rule catalog
//! 3. the caller's explicit style override
//!
//! Per-prop fragments merge in the bag's insertion order. That order is the
//! contract: callers that insert `horizontal` then `vertical` get
//! `flexDirection: column`. Unknown prop keys are skipped - the layer is a
//! best-effort styling overlay, not a validator.

use std::borrow::Cow;

use log::debug;

use super::{rules, Preset, ResolvedStyle};
use crate::error::ConfigError;
use crate::theme::Theme;
use crate::types::PropValue;

// =============================================================================
// StyleProps
// =============================================================================

/// An insertion-ordered bag of style props.
///
/// Keys name rules in the catalog; values feed pass-through rules and are
/// ignored by flag rules. Duplicate keys are kept and applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleProps {
    entries: Vec<(Cow<'static, str>, PropValue)>,
}

impl StyleProps {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prop. Later entries win over earlier ones on CSS-key
    /// collision.
    pub fn set(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Iterate props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// resolve
// =============================================================================

/// Resolve a preset, a prop bag and an explicit override into one style.
///
/// Pure and synchronous; the theme is read, never written. Infallible: the
/// preset is already typed and unknown prop keys are skipped by design.
pub fn resolve(
    preset: Preset,
    theme: Option<&Theme>,
    props: &StyleProps,
    overrides: &ResolvedStyle,
) -> ResolvedStyle {
    let mut resolved = preset.fragment().clone();

    for (key, value) in props.iter() {
        match rules::rule(key) {
            Some(rule) => resolved.merge(&rule.apply(value, theme)),
            None => debug!("no style rule for prop `{}`; ignoring", key),
        }
    }

    resolved.merge(overrides);
    resolved
}

/// [`resolve`] with a string preset name.
///
/// Unknown preset names are programmer error and fail fast.
pub fn resolve_named(
    preset: &str,
    theme: Option<&Theme>,
    props: &StyleProps,
    overrides: &ResolvedStyle,
) -> Result<ResolvedStyle, ConfigError> {
    let preset =
        Preset::from_str(preset).ok_or_else(|| ConfigError::UnknownPreset(preset.to_string()))?;
    Ok(resolve(preset, theme, props, overrides))
}

// =============================================================================
// Tests
// =============================================================================
