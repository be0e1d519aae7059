//! Collapsible panel - the `Expander` block's renderer and state machine.
//!
//! Two states, `Collapsed` and `Expanded`, with a single transition:
//! `toggle`, fired by the host when the header control is activated. The
//! initial state comes from the `initiallyExpanded` property at state
//! creation; property changes afterwards never touch the live state.
//!
//! The body is the `expander-content` slot. While collapsed its wrapper
//! carries zero height and padding with clipped overflow, so the slot
//! occupies no space and its content is hidden.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use super::instances;
use crate::props::Props;
use crate::render::RenderInput;
use crate::schema::defaults::expander as expander_d;
use crate::theme;
use crate::tree::{Element, Node, NodeKind};

/// Slot name the host fills with the panel's body content.
pub const BODY_SLOT: &str = "expander-content";

// =============================================================================
// State
// =============================================================================

struct ExpanderState {
    expanded: bool,
}

thread_local! {
    static EXPANDERS: RefCell<HashMap<usize, ExpanderState>> = RefCell::new(HashMap::new());
}

fn remove_state(index: usize) {
    EXPANDERS.with(|expanders| {
        expanders.borrow_mut().remove(&index);
    });
}

// =============================================================================
// Transitions
// =============================================================================

/// Flip between expanded and collapsed.
pub fn toggle(instance: &str) {
    let Some(index) = instances::index_of(instance) else {
        return;
    };
    EXPANDERS.with(|expanders| {
        if let Some(state) = expanders.borrow_mut().get_mut(&index) {
            state.expanded = !state.expanded;
            debug!(instance, expanded = state.expanded, "expander toggled");
        }
    });
}

/// Current expansion state, if the instance has state.
pub fn is_expanded(instance: &str) -> Option<bool> {
    let index = instances::index_of(instance)?;
    EXPANDERS.with(|expanders| expanders.borrow().get(&index).map(|state| state.expanded))
}

/// Drop all expander state (for testing).
pub fn reset_expanders() {
    EXPANDERS.with(|expanders| expanders.borrow_mut().clear());
}

// =============================================================================
// Render
// =============================================================================

/// Render the panel for one host instance.
pub fn render(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    let index = instances::acquire(input.instance);
    let expanded = EXPANDERS.with(|expanders| {
        let mut expanders = expanders.borrow_mut();
        let state = expanders.entry(index).or_insert_with(|| {
            debug!(instance = input.instance, "expander state created");
            instances::on_dispose(index, move || remove_state(index));
            ExpanderState {
                expanded: props.bool("initiallyExpanded", expander_d::INITIALLY_EXPANDED),
            }
        });
        state.expanded
    });

    let marker = if expanded { "▼" } else { "▶" };
    let (body_padding, body_height) = if expanded { ("16px", "auto") } else { ("0", "0") };

    Element::new(NodeKind::Block)
        .style("margin", theme::BLOCK_MARGIN)
        .style("border", format!("1px solid {}", theme::LIGHT_BORDER))
        .style("border-radius", "4px")
        .style("overflow", "hidden")
        .child(
            Element::new(NodeKind::Button)
                .attr("data-action", "toggle")
                .style("width", "100%")
                .style("padding", "12px 16px")
                .style("background-color", "#f5f5f5")
                .style("border", "none")
                .style("text-align", "left")
                .style("font-weight", "bold")
                .style("cursor", "pointer")
                .style("display", "flex")
                .style("justify-content", "space-between")
                .style("align-items", "center")
                .text(props.str("title", expander_d::TITLE))
                .child(Element::new(NodeKind::Inline).text(marker).into_node())
                .into_node(),
        )
        .child(
            Element::new(NodeKind::Block)
                .style("padding", body_padding)
                .style("height", body_height)
                .style("overflow", "hidden")
                .style("transition", "height 0.3s ease")
                .child(Node::slot(BODY_SLOT))
                .into_node(),
        )
        .into_node()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropMap;
    use serde_json::{Value, json};

    fn setup() {
        instances::reset();
        reset_expanders();
    }

    fn props(value: Value) -> PropMap {
        match value {
            Value::Object(map) => map,
            _ => PropMap::new(),
        }
    }

    fn render_with(instance: &str, map: &PropMap) -> Node {
        render(&RenderInput {
            instance,
            props: map,
            children: &[],
        })
    }

    fn body<'a>(node: &'a Node) -> &'a Element {
        node.as_element().unwrap().children[1].as_element().unwrap()
    }

    #[test]
    fn test_initially_collapsed_by_default() {
        setup();
        let map = props(json!({"title": "Details"}));

        let node = render_with("e", &map);
        assert_eq!(is_expanded("e"), Some(false));
        assert_eq!(body(&node).style.get("height"), Some("0"));
        assert_eq!(body(&node).style.get("padding"), Some("0"));
        assert!(node.collect_text().contains('▶'));
    }

    #[test]
    fn test_initially_expanded_property() {
        setup();
        let map = props(json!({"initiallyExpanded": true}));

        let node = render_with("e", &map);
        assert_eq!(is_expanded("e"), Some(true));
        assert_eq!(body(&node).style.get("height"), Some("auto"));
        assert!(node.collect_text().contains('▼'));
    }

    #[test]
    fn test_toggle_flips_once_per_call() {
        setup();
        let map = props(json!({}));
        render_with("e", &map);

        toggle("e");
        assert_eq!(is_expanded("e"), Some(true));

        toggle("e");
        assert_eq!(is_expanded("e"), Some(false));
    }

    #[test]
    fn test_property_change_after_creation_is_ignored() {
        setup();
        let map = props(json!({"initiallyExpanded": false}));
        render_with("e", &map);
        toggle("e");
        assert_eq!(is_expanded("e"), Some(true));

        // Re-render with the property flipped; live state must not move.
        let changed = props(json!({"initiallyExpanded": false}));
        render_with("e", &changed);
        assert_eq!(is_expanded("e"), Some(true));

        let changed = props(json!({"initiallyExpanded": true}));
        toggle("e");
        render_with("e", &changed);
        assert_eq!(is_expanded("e"), Some(false));
    }

    #[test]
    fn test_body_slot_always_present() {
        setup();
        let map = props(json!({}));

        let node = render_with("e", &map);
        assert_eq!(body(&node).children[0].as_slot(), Some(BODY_SLOT));

        toggle("e");
        let node = render_with("e", &map);
        assert_eq!(body(&node).children[0].as_slot(), Some(BODY_SLOT));
    }

    #[test]
    fn test_dispose_forgets_state() {
        setup();
        let map = props(json!({}));
        render_with("e", &map);
        toggle("e");

        instances::dispose("e");
        assert_eq!(is_expanded("e"), None);

        // A fresh instance under the same id starts from the property again.
        let node = render_with("e", &map);
        assert_eq!(is_expanded("e"), Some(false));
        assert_eq!(body(&node).style.get("height"), Some("0"));
    }

    #[test]
    fn test_toggle_unknown_instance_is_noop() {
        setup();
        toggle("ghost");
        assert_eq!(is_expanded("ghost"), None);
    }
}
