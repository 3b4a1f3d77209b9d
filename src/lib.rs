//! # calcview
//!
//! Presentational component layer: a declarative Flex container primitive
//! and a calculator display component built on top of it.
//!
//! ## Architecture
//!
//! Everything is a pure transform from props to a render description:
//!
//! ```text
//! Props -> StyleResolver -> ResolvedStyle -> Element tree -> host renderer
//! ```
//!
//! The style resolver maps a fixed catalog of prop rules (flags like
//! `nogrow`, pass-through values like `width`, theme-driven gutters) plus a
//! preset archetype and an explicit override into one flat CSS declaration
//! map. Components attach those styles to [`Element`] trees; painting is
//! the host rendering engine's job.
//!
//! ## Modules
//!
//! - [`types`] - value vocabulary (StyleValue, PropValue, StyleFlags)
//! - [`style`] - rule catalog, presets, and the resolver
//! - [`render`] - the element tree handed to the host
//! - [`primitives`] - the flex container and its preset wrappers
//! - [`components`] - the calculation view
//! - [`theme`] - externally owned design tokens
//! - [`error`] - configuration errors
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use calcview::{Calculation, CalculationProps, CalculationView, Theme};
//!
//! let mut view = CalculationView::new();
//! view.render(&CalculationProps {
//!     calculation: Calculation::new("1+1", "2"),
//!     on_pointer_click: Some(Rc::new(|| {})),
//!     theme: Some(Theme::default()),
//! });
//!
//! let tree = view.element().unwrap();
//! assert!(tree.text_content().contains("1+1"));
//! ```

pub mod components;
pub mod error;
pub mod primitives;
pub mod render;
pub mod style;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::{PropValue, StyleFlags, StyleValue};

pub use error::ConfigError;

pub use theme::Theme;

pub use style::{
    preset_names, resolve, resolve_named, rule, rule_names, Fragment, Preset, ResolvedStyle,
    StyleProps, StyleRule,
};

pub use render::{ClickCallback, Element, ElementKind};

pub use primitives::{box_primitive, column, content, flex, frame, FlexProps};

pub use components::{calculation, Calculation, CalculationProps, CalculationView};
