//! # pagecraft
//!
//! Content block catalog and rendering contract for visual page editors.
//!
//! A host editing engine owns the page document, drag-and-drop placement,
//! persistence and the property-editor UI. This crate owns what the host
//! plugs in: the registry of block types with their field schemas and
//! defaults, the pure renderers that turn a property set into a visual
//! tree, and the two stateful widgets (slide carousel, collapsible panel)
//! with their timers and transitions.
//!
//! ## Architecture
//!
//! ```text
//! host page document → Registry lookup → render(props, children) → visual tree
//!                                              ↓ (Slider/Expander only)
//!                                    per-instance widget state
//! ```
//!
//! ## Modules
//!
//! - [`types`] - the closed `BlockType` catalog
//! - [`registry`] - block definitions, fail-fast schema validation, slots
//! - [`schema`] - field specs and default property tables
//! - [`render`] - pure renderers for primitives and containers
//! - [`widget`] - carousel and expander state machines, instance arena
//! - [`tree`] - the visual tree renderers produce
//! - [`parse`] - line- and paragraph-delimited list-text parsing
//! - [`theme`] - centralized styling defaults and button variants
//! - [`document`] - the empty page document seed
//! - [`error`] - the schema error taxonomy

pub mod document;
pub mod error;
pub mod parse;
pub mod props;
pub mod registry;
pub mod render;
pub mod schema;
pub mod theme;
pub mod tree;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use types::BlockType;

pub use document::{PageDocument, RootNode};
pub use error::{SchemaError, SchemaResult};
pub use parse::{Paragraph, lines, paragraphs};
pub use props::{PropMap, Props};
pub use registry::{BlockDef, Registry, SlotSpec};
pub use render::{RenderFn, RenderInput, renderer};
pub use schema::{FieldKind, FieldOption, FieldSpec, default_props, fields};
pub use theme::{ButtonSize, Variant, VariantStyle};
pub use tree::{Element, Node, NodeKind, Style};
