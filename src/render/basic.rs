//! Leaf block renderers - headings, text, buttons, cards, lists, rules.
//!
//! Each function is pure: properties in, visual tree out. Omitted or
//! malformed properties fall back to the constants in
//! [`crate::schema::defaults`], the same values `DefaultProps` declares.

use super::RenderInput;
use crate::parse;
use crate::props::Props;
use crate::schema::defaults::{button as button_d, card as card_d, divider as divider_d};
use crate::schema::defaults::{heading as heading_d, list as list_d, spacer as spacer_d};
use crate::schema::defaults::text as text_d;
use crate::theme;
use crate::theme::{ButtonSize, Variant};
use crate::tree::{Element, Node, NodeKind};

// =============================================================================
// Heading
// =============================================================================

/// Heading at level 1-4. Out-of-domain levels degrade to level 1.
pub fn heading(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let level = props.u64("level", heading_d::LEVEL);
    let level = if (1..=4).contains(&level) { level as u8 } else { 1 };

    Element::new(NodeKind::Heading(level))
        .style("margin", theme::BLOCK_MARGIN)
        .style("color", props.str("color", heading_d::COLOR))
        .style("font-weight", "bold")
        .style("text-align", props.str("align", heading_d::ALIGN))
        .style("background-color", props.str("background", heading_d::BACKGROUND))
        .style("line-height", props.str("lineHeight", heading_d::LINE_HEIGHT))
        .text(props.str("text", heading_d::TEXT))
        .into_node()
}

// =============================================================================
// Text
// =============================================================================

/// Body paragraph.
pub fn text(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    Element::new(NodeKind::Paragraph)
        .style("margin", props.str("margin", text_d::MARGIN))
        .style("line-height", props.str("lineHeight", text_d::LINE_HEIGHT))
        .style("color", props.str("color", text_d::COLOR))
        .style("font-size", props.str("size", text_d::SIZE))
        .style("text-align", props.str("align", text_d::ALIGN))
        .style("padding", props.str("padding", text_d::PADDING))
        .text(props.str("text", text_d::TEXT))
        .into_node()
}

// =============================================================================
// Button
// =============================================================================

/// Button with 4 color variants × 3 sizes. Out-of-domain input degrades to
/// the primary/medium combination - the single permitted fallthrough.
pub fn button(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let variant =
        Variant::from_name(&props.str("variant", button_d::VARIANT)).unwrap_or_default();
    let size = ButtonSize::from_name(&props.str("size", button_d::SIZE)).unwrap_or_default();
    let colors = variant.style();

    Element::new(NodeKind::Button)
        .style("padding", size.padding())
        .style("font-size", size.font_size())
        .style("background-color", colors.bg)
        .style("color", colors.fg)
        .style("border", "none")
        .style("border-radius", "4px")
        .style("cursor", "pointer")
        .style("margin", "8px 0")
        .text(props.str("text", button_d::TEXT))
        .into_node()
}

// =============================================================================
// Card
// =============================================================================

/// Titled card with a description body.
pub fn card(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    Element::new(NodeKind::Block)
        .style("background-color", props.str("backgroundColor", card_d::BACKGROUND))
        .style("border", format!("1px solid {}", theme::LIGHT_BORDER))
        .style("border-radius", "8px")
        .style("padding", "20px")
        .style("margin", theme::BLOCK_MARGIN)
        .style("box-shadow", theme::CARD_SHADOW)
        .child(
            Element::new(NodeKind::Heading(3))
                .style("margin", "0 0 12px 0")
                .style("color", theme::HEADING_COLOR)
                .text(props.str("title", card_d::TITLE))
                .into_node(),
        )
        .child(
            Element::new(NodeKind::Paragraph)
                .style("margin", "0")
                .style("color", theme::MUTED_COLOR)
                .style("line-height", "1.5")
                .text(props.str("description", card_d::DESCRIPTION))
                .into_node(),
        )
        .into_node()
}

// =============================================================================
// List
// =============================================================================

/// Ordered or unordered list from line-delimited items.
pub fn list(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let kind = match props.str("type", list_d::KIND).as_str() {
        "ol" => NodeKind::NumberedList,
        _ => NodeKind::BulletList,
    };

    let items = parse::lines(&props.str("items", list_d::ITEMS));
    Element::new(kind)
        .style("margin", theme::BLOCK_MARGIN)
        .style("padding-left", "20px")
        .children(items.into_iter().map(|item| {
            Element::new(NodeKind::ListItem)
                .style("margin", "8px 0")
                .style("color", theme::BODY_COLOR)
                .text(item)
                .into_node()
        }))
        .into_node()
}

// =============================================================================
// Divider / Spacer
// =============================================================================

/// Horizontal rule.
pub fn divider(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let color = props.str("color", divider_d::COLOR);
    let thickness = props.str("thickness", divider_d::THICKNESS);

    Element::new(NodeKind::Rule)
        .style("border", "none")
        .style("border-top", format!("{thickness} solid {color}"))
        .style("margin", "24px 0")
        .into_node()
}

/// Fixed-height vertical gap.
pub fn spacer(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    Element::new(NodeKind::Block)
        .style("height", props.str("height", spacer_d::HEIGHT))
        .style("width", "100%")
        .into_node()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{input, props};
    use serde_json::json;

    #[test]
    fn test_heading_level_and_text() {
        let map = props(json!({"text": "Hello", "level": 3}));
        let node = heading(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.kind, NodeKind::Heading(3));
        assert_eq!(node.collect_text(), "Hello");
    }

    #[test]
    fn test_heading_out_of_domain_level() {
        let map = props(json!({"level": 7}));
        let node = heading(&input(&map));
        assert_eq!(node.as_element().unwrap().kind, NodeKind::Heading(1));
    }

    #[test]
    fn test_heading_defaults_match_default_props() {
        let map = props(json!({}));
        let node = heading(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.style.get("color"), Some(heading_d::COLOR));
        assert_eq!(el.style.get("background-color"), Some("transparent"));
        assert_eq!(node.collect_text(), heading_d::TEXT);
    }

    #[test]
    fn test_text_passes_styling_verbatim() {
        let map = props(json!({
            "text": "body",
            "color": "not-even-a-color",
            "margin": "1px 2px 3px 4px",
        }));
        let node = text(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.kind, NodeKind::Paragraph);
        assert_eq!(el.style.get("color"), Some("not-even-a-color"));
        assert_eq!(el.style.get("margin"), Some("1px 2px 3px 4px"));
    }

    #[test]
    fn test_button_variant_and_size() {
        let map = props(json!({"text": "Go", "variant": "danger", "size": "large"}));
        let node = button(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.style.get("background-color"), Some("#dc3545"));
        assert_eq!(el.style.get("padding"), Some("16px 32px"));
        assert_eq!(el.style.get("font-size"), Some("18px"));
    }

    #[test]
    fn test_button_all_combinations_render() {
        for &variant in Variant::all() {
            for &size in ButtonSize::all() {
                let map = props(json!({"variant": variant.name(), "size": size.name()}));
                let node = button(&input(&map));
                let el = node.as_element().unwrap();
                assert_eq!(el.style.get("background-color"), Some(variant.style().bg));
                assert_eq!(el.style.get("padding"), Some(size.padding()));
            }
        }
    }

    #[test]
    fn test_button_out_of_domain_degrades_to_default() {
        let map = props(json!({"variant": "ghost", "size": "huge"}));
        let node = button(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(
            el.style.get("background-color"),
            Some(Variant::Primary.style().bg)
        );
        assert_eq!(el.style.get("padding"), Some(ButtonSize::Medium.padding()));
    }

    #[test]
    fn test_card_structure() {
        let map = props(json!({"title": "T", "description": "D"}));
        let node = card(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.children.len(), 2);
        assert_eq!(
            el.children[0].as_element().unwrap().kind,
            NodeKind::Heading(3)
        );
        assert_eq!(
            el.children[1].as_element().unwrap().kind,
            NodeKind::Paragraph
        );
        assert_eq!(node.collect_text(), "TD");
    }

    #[test]
    fn test_list_ordered_and_unordered() {
        let map = props(json!({"items": "a\nb\n\n  c  ", "type": "ol"}));
        let node = list(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.kind, NodeKind::NumberedList);
        assert_eq!(el.children.len(), 3);
        assert_eq!(node.collect_text(), "abc");

        let map = props(json!({"items": "x"}));
        let node = list(&input(&map));
        assert_eq!(node.as_element().unwrap().kind, NodeKind::BulletList);
    }

    #[test]
    fn test_list_empty_items() {
        let map = props(json!({"items": "   \n \n"}));
        let node = list(&input(&map));
        assert!(node.as_element().unwrap().children.is_empty());
    }

    #[test]
    fn test_divider_combines_thickness_and_color() {
        let map = props(json!({"color": "#000", "thickness": "3px"}));
        let node = divider(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.kind, NodeKind::Rule);
        assert_eq!(el.style.get("border-top"), Some("3px solid #000"));
    }

    #[test]
    fn test_spacer_height() {
        let map = props(json!({}));
        let node = spacer(&input(&map));
        assert_eq!(
            node.as_element().unwrap().style.get("height"),
            Some(spacer_d::HEIGHT)
        );
    }
}
