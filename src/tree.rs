//! Visual tree - the value renderers produce.
//!
//! A `Node` is either an element with a semantic kind, styling, attributes
//! and children, a run of text, or a named slot placeholder the host engine
//! fills with its own drop-zone machinery. Styling entries are CSS
//! property/value string pairs carried verbatim; this crate never interprets
//! them, the host's presentation layer does.
//!
//! # Example
//!
//! ```
//! use pagecraft::tree::{Element, Node, NodeKind};
//!
//! let node = Element::new(NodeKind::Block)
//!     .style("padding", "20px")
//!     .child(Node::text("hello"))
//!     .into_node();
//! assert!(node.as_element().is_some());
//! ```

// =============================================================================
// NodeKind
// =============================================================================

/// Semantic kind of an element node.
///
/// Kinds map one-to-one onto the host's presentation vocabulary (a web host
/// maps them to HTML tags); the set is closed so hosts can match
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Generic block-level group.
    Block,
    /// Heading at level 1-4.
    Heading(u8),
    /// Paragraph of body text.
    Paragraph,
    /// Inline span.
    Inline,
    /// Activatable button control.
    Button,
    /// Hyperlink.
    Link,
    /// Image.
    Image,
    /// Unordered list.
    BulletList,
    /// Ordered list.
    NumberedList,
    /// Item inside either list kind.
    ListItem,
    /// Horizontal rule.
    Rule,
    /// Single-line text input.
    Input,
    /// Multi-line text input.
    TextArea,
}

// =============================================================================
// Style
// =============================================================================

/// Ordered list of CSS property/value pairs.
///
/// Setting a property that is already present replaces its value in place,
/// so declaration order is stable and the last write wins - the same
/// semantics as merging style objects in the host editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    entries: Vec<(String, String)>,
}

impl Style {
    /// Create an empty style list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any existing entry for the same name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Get a property value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the style list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Node / Element
// =============================================================================

/// One node of the visual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A styled element with children.
    Element(Element),
    /// A run of text.
    Text(String),
    /// A named slot the host fills with nested block content.
    Slot(String),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a slot placeholder node.
    pub fn slot(name: impl Into<String>) -> Self {
        Self::Slot(name.into())
    }

    /// Borrow the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Borrow the text content, if this node is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the slot name, if this node is a slot placeholder.
    pub fn as_slot(&self) -> Option<&str> {
        match self {
            Self::Slot(name) => Some(name),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants, in tree order.
    ///
    /// Slot placeholders contribute nothing; their content is host-owned.
    pub fn collect_text(&self) -> String {
        fn walk(node: &Node, out: &mut String) {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => {
                    for child in &el.children {
                        walk(child, out);
                    }
                }
                Node::Slot(_) => {}
            }
        }
        let mut out = String::new();
        walk(self, &mut out);
        out
    }
}

/// A styled element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: NodeKind,
    pub style: Style,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element of the given kind with no styling or children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: Style::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set a style property (builder form).
    pub fn style(mut self, name: &str, value: impl Into<String>) -> Self {
        self.style.set(name, value);
        self
    }

    /// Set an attribute (builder form).
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Append one child (builder form).
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Append several children (builder form).
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append a text child (builder form).
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Get an attribute value by name.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Wrap into a `Node`.
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

// =============================================================================
// Tests
// =============================================================================
