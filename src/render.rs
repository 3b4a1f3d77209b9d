//! Render description handed to the host renderer.
//!
//! Components in this layer do not paint anything. They produce a value
//! tree of [`Element`]s - kind, resolved style, text content, event
//! bindings, children - and the host rendering engine turns that tree into
//! pixels. The tree also carries enough of a query surface for tests to
//! inspect content and simulate activation without a host.

use std::fmt;
use std::rc::Rc;

use crate::style::ResolvedStyle;

// =============================================================================
// Callbacks
// =============================================================================

/// Activation callback (Rc for shared ownership in closures).
///
/// Invoked synchronously with no arguments when the element is activated.
pub type ClickCallback = Rc<dyn Fn()>;

// =============================================================================
// ElementKind
// =============================================================================

/// What kind of host element to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Generic container; may have children.
    Container,
    /// Text content; leaf.
    Text,
    /// Activatable region; invokes its callback on click.
    Pointer,
}

// =============================================================================
// Element
// =============================================================================

/// One node in the render description tree.
#[derive(Clone)]
pub struct Element {
    kind: ElementKind,
    style: ResolvedStyle,
    content: Option<String>,
    on_click: Option<ClickCallback>,
    children: Vec<Element>,
}

impl Element {
    /// A container with the given style and body.
    pub fn container(style: ResolvedStyle, children: Vec<Element>) -> Self {
        Self {
            kind: ElementKind::Container,
            style,
            content: None,
            on_click: None,
            children,
        }
    }

    /// A text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Text,
            style: ResolvedStyle::new(),
            content: Some(content.into()),
            on_click: None,
            children: Vec::new(),
        }
    }

    /// An activatable pointer region.
    pub fn pointer(on_click: Option<ClickCallback>) -> Self {
        Self {
            kind: ElementKind::Pointer,
            style: ResolvedStyle::new(),
            content: None,
            on_click,
            children: Vec::new(),
        }
    }

    /// Attach a style, replacing the current one.
    pub fn with_style(mut self, style: ResolvedStyle) -> Self {
        self.style = style;
        self
    }

    /// The element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The element's resolved style.
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// Own text content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Whether an activation handler is bound.
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    /// Simulate an activation event on this element.
    ///
    /// Dispatches the bound callback once. Returns whether a handler fired;
    /// activating an element with no handler is a no-op.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(content) = &self.content {
            out.push_str(content);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// All elements of the given kind in this subtree, in document order.
    ///
    /// Includes the element itself when it matches.
    pub fn find_all(&self, kind: ElementKind) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_kind(kind, &mut found);
        found
    }

    fn collect_kind<'a>(&'a self, kind: ElementKind, found: &mut Vec<&'a Element>) {
        if self.kind == kind {
            found.push(self);
        }
        for child in &self.children {
            child.collect_kind(kind, found);
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("style", &self.style)
            .field("content", &self.content)
            .field("clickable", &self.on_click.is_some())
            .field("children", &self.children)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
