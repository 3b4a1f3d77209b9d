//! Theme tokens for calcview.
//!
//! The theme is an externally owned, read-only record threaded through the
//! style resolver. This layer never constructs one on behalf of the caller
//! and never mutates it; the gutter rules are its only consumers.

// =============================================================================
// Theme
// =============================================================================

/// Design tokens consumed by the style rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Horizontal/vertical spacing unit in pixels, consumed by the
    /// `gutter`, `gutterLeft`, `gutterRight` and `inner` rules.
    pub gutter: u16,
}

impl Theme {
    /// Create a theme with the given gutter width.
    pub const fn new(gutter: u16) -> Self {
        Self { gutter }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self { gutter: 8 }
    }
}

// =============================================================================
// Tests
// =============================================================================
