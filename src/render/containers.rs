//! Layout container renderers.
//!
//! Opaque-children containers (`container`, `flex_container`,
//! `simple_container`, `positioned_element`) arrange content the host
//! already rendered. The slot-declaring `grid_container` instead emits a
//! `children` slot placeholder; which block types that slot accepts is
//! declared in the registry, not here.
//!
//! Enumerated layout parameters pass through verbatim - no branch quietly
//! substitutes a different layout for a value the schema offers.

use super::RenderInput;
use crate::props::Props;
use crate::schema::defaults::{container as container_d, flex as flex_d, grid as grid_d};
use crate::schema::defaults::{positioned as positioned_d, simple as simple_d};
use crate::theme;
use crate::tree::{Element, Node, NodeKind};

// =============================================================================
// Stack container
// =============================================================================

/// General-purpose container with four layout modes: `vertical`,
/// `horizontal`, `grid` (auto-fit), `centered`. An unknown layout value
/// degrades to the declared default, `vertical`.
pub fn container(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let background = props.str("backgroundColor", container_d::BACKGROUND);
    let gap = props.str("gap", container_d::GAP);

    let border = if background == "transparent" {
        "1px dashed #ccc"
    } else {
        "none"
    };

    let mut el = Element::new(NodeKind::Block)
        .style("background-color", background)
        .style("padding", props.str("padding", container_d::PADDING))
        .style("margin", theme::BLOCK_MARGIN)
        .style("border-radius", "8px")
        .style("border", border);

    el = match props.str("layout", container_d::LAYOUT).as_str() {
        "horizontal" => el
            .style("display", "flex")
            .style("flex-direction", "row")
            .style("gap", gap)
            .style("align-items", "center"),
        "grid" => el
            .style("display", "grid")
            .style("grid-template-columns", "repeat(auto-fit, minmax(200px, 1fr))")
            .style("gap", gap),
        "centered" => el
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("gap", gap),
        _ => el
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("gap", gap),
    };

    el.children(input.children.iter().cloned()).into_node()
}

// =============================================================================
// Flex container
// =============================================================================

/// Flexbox container; direction, justification, alignment, gap and wrap all
/// pass through verbatim.
pub fn flex_container(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    Element::new(NodeKind::Block)
        .style("display", "flex")
        .style("flex-direction", props.str("direction", flex_d::DIRECTION))
        .style("justify-content", props.str("justify", flex_d::JUSTIFY))
        .style("align-items", props.str("align", flex_d::ALIGN))
        .style("gap", props.str("gap", flex_d::GAP))
        .style("flex-wrap", props.str("wrap", flex_d::WRAP))
        .style("padding", "16px")
        .style("margin", theme::BLOCK_MARGIN)
        .style("background-color", theme::PANEL_BG)
        .style("border-radius", "8px")
        .style("border", format!("1px solid {}", theme::PANEL_BORDER))
        .children(input.children.iter().cloned())
        .into_node()
}

// =============================================================================
// Grid container (slot-declaring)
// =============================================================================

/// Fixed-column grid whose cells the host fills through the `children` slot.
pub fn grid_container(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let columns = props.u64("columns", grid_d::COLUMNS);

    Element::new(NodeKind::Block)
        .style("display", "grid")
        .style("grid-template-columns", format!("repeat({columns}, 1fr)"))
        .style("gap", props.str("gap", grid_d::GAP))
        .style("row-gap", props.str("rowGap", grid_d::ROW_GAP))
        .style("padding", "16px")
        .style("margin", theme::BLOCK_MARGIN)
        .style("background-color", theme::PANEL_BG)
        .style("border-radius", "8px")
        .style("border", format!("1px solid {}", theme::PANEL_BORDER))
        .style("min-height", "100px")
        .child(Node::slot("children"))
        .into_node()
}

// =============================================================================
// Simple container
// =============================================================================

/// Minimal drop target: background, padding, dashed outline.
pub fn simple_container(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    Element::new(NodeKind::Block)
        .style("background-color", props.str("backgroundColor", simple_d::BACKGROUND))
        .style("padding", props.str("padding", simple_d::PADDING))
        .style("margin", theme::BLOCK_MARGIN)
        .style("border-radius", "8px")
        .style("border", format!("2px dashed {}", theme::PRIMARY))
        .style("min-height", "100px")
        .children(input.children.iter().cloned())
        .into_node()
}

// =============================================================================
// Positioned container
// =============================================================================

/// Wrapper applying CSS positioning offsets to its children.
pub fn positioned_element(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    Element::new(NodeKind::Block)
        .style("position", props.str("position", positioned_d::POSITION))
        .style("top", props.str("top", positioned_d::OFFSET))
        .style("left", props.str("left", positioned_d::OFFSET))
        .style("right", props.str("right", positioned_d::OFFSET))
        .style("bottom", props.str("bottom", positioned_d::OFFSET))
        .style("z-index", props.str("zIndex", positioned_d::Z_INDEX))
        .style("margin", theme::BLOCK_MARGIN)
        .children(input.children.iter().cloned())
        .into_node()
}

// =============================================================================
// Tests
// =============================================================================
