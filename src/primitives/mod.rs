//! UI primitives - component building blocks.
//!
//! This module provides the flex container primitive:
//! - [`flex`] - container with declarative flexbox styling props
//! - [`frame`], [`box_primitive`], [`content`], [`column`] - preset wrappers
//!
//! Avoid reaching for [`flex`] with an explicit preset whenever a wrapper
//! fits; the wrappers name the layout role.

mod flex;

pub use flex::{box_primitive, column, content, flex, frame, FlexProps};
