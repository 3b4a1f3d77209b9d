//! Error types for calcview.
//!
//! The taxonomy is deliberately small: the style layer is a permissive
//! overlay, and the only hard failure is naming a preset that does not
//! exist - programmer error in the caller, rejected at call time rather
//! than silently falling back.

use thiserror::Error;

/// Configuration errors raised by the string-keyed style surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A preset name outside the allow-list was supplied.
    #[error("unknown preset `{0}` (expected one of: base, frame, box, content, column)")]
    UnknownPreset(String),
}
