//! Style system for calcview.
//!
//! A declarative prop-to-style resolver over a fixed catalog of rules.
//! Callers describe layout intent with props (`gutter`, `nogrow`,
//! `width: "50%"`); the resolver turns them into a flat CSS declaration map
//! consumed by the host renderer.
//!
//! # Pipeline
//!
//! ```text
//! Preset fragment -> per-prop rule fragments -> explicit style override
//! ```
//!
//! Later sources win on key collision. The catalog and preset tables are
//! immutable, process-lifetime configuration built once at startup.
//!
//! # Modules
//!
//! - [`rules`] - the rule catalog (constant and computed fragments)
//! - [`presets`] - named layout archetypes (`frame`, `box`, `content`, ...)
//! - [`resolve`] - the ordered prop bag and the merge itself

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::types::StyleValue;

pub mod presets;
pub mod resolve;
pub mod rules;

pub use presets::{preset_names, Preset};
pub use resolve::{resolve, resolve_named, StyleProps};
pub use rules::{rule, rule_names, StyleRule};

/// A small style mapping produced by a single rule.
///
/// One or two CSS declarations; merged into the resolved output.
pub type Fragment = ResolvedStyle;

// =============================================================================
// ResolvedStyle
// =============================================================================

/// A flat mapping from CSS property name to value.
///
/// Property names use the camelCase CSS-in-JS convention (`flexDirection`,
/// `paddingLeft`). Iteration order is deterministic (sorted by property
/// name) so output is reproducible and diffable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedStyle {
    decls: BTreeMap<Cow<'static, str>, StyleValue>,
}

impl ResolvedStyle {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one declaration, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) {
        self.decls.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set), for literal style maps.
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a declaration by property name.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.decls.get(key)
    }

    /// Whether the property is present.
    pub fn contains(&self, key: &str) -> bool {
        self.decls.contains_key(key)
    }

    /// Merge `other` into `self`; `other` wins on key collision.
    pub fn merge(&mut self, other: &ResolvedStyle) {
        for (key, value) in &other.decls {
            self.decls.insert(key.clone(), value.clone());
        }
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Whether the style has no declarations.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Iterate declarations in property-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.decls.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

// =============================================================================
// Tests
// =============================================================================
