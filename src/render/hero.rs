//! Hero banner renderer.

use super::RenderInput;
use crate::props::Props;
use crate::schema::defaults::hero as hero_d;
use crate::theme;
use crate::tree::{Element, Node, NodeKind};

/// Full-width hero banner with title, optional subtitle and call-to-action.
///
/// A non-empty `backgroundImage` wins over `backgroundColor`. The subtitle
/// and the button are omitted from the tree entirely when their text is
/// empty. The call-to-action inverts to white-on-primary or
/// primary-on-white depending on the hero text color.
pub fn hero_section(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let text_color = props.str("textColor", hero_d::TEXT_COLOR);
    let alignment = props.str("alignment", hero_d::ALIGNMENT);
    let background_image = props.str("backgroundImage", hero_d::BACKGROUND_IMAGE);

    let background = if background_image.is_empty() {
        props.str("backgroundColor", hero_d::BACKGROUND)
    } else {
        format!("url({background_image})")
    };
    let justify = match alignment.as_str() {
        "left" => "flex-start",
        "right" => "flex-end",
        _ => "center",
    };

    let mut content = Element::new(NodeKind::Block)
        .style("text-align", alignment)
        .style("max-width", "600px")
        .style("z-index", "2")
        .style("position", "relative")
        .child(
            Element::new(NodeKind::Heading(1))
                .style("margin", "0 0 16px 0")
                .style("font-size", "3rem")
                .style("font-weight", "bold")
                .text(props.str("title", hero_d::TITLE))
                .into_node(),
        );

    let subtitle = props.str("subtitle", hero_d::SUBTITLE);
    if !subtitle.is_empty() {
        content = content.child(
            Element::new(NodeKind::Paragraph)
                .style("margin", "0 0 20px 0")
                .style("font-size", "1.2rem")
                .style("opacity", "0.9")
                .text(subtitle)
                .into_node(),
        );
    }

    let button_text = props.str("buttonText", hero_d::BUTTON_TEXT);
    if !button_text.is_empty() {
        let (button_bg, button_fg) = if text_color == "white" {
            ("white", theme::PRIMARY)
        } else {
            (theme::PRIMARY, "white")
        };
        content = content.child(
            Element::new(NodeKind::Link)
                .attr("href", props.str("buttonLink", hero_d::BUTTON_LINK))
                .style("background-color", button_bg)
                .style("color", button_fg)
                .style("padding", "12px 24px")
                .style("border", "none")
                .style("border-radius", "4px")
                .style("cursor", "pointer")
                .style("font-size", "16px")
                .style("font-weight", "bold")
                .style("margin-top", "20px")
                .style("text-decoration", "none")
                .style("display", "inline-block")
                .text(button_text)
                .into_node(),
        );
    }

    Element::new(NodeKind::Block)
        .style("background", background)
        .style("background-size", "cover")
        .style("background-position", "center")
        .style("color", text_color)
        .style("height", props.str("height", hero_d::HEIGHT))
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", justify)
        .style("padding", "60px 20px")
        .style("margin", theme::BLOCK_MARGIN)
        .style("border-radius", "8px")
        .style("position", "relative")
        .child(content.into_node())
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
    fn test_hero_defaults() {
        let map = props(json!({}));
        let node = hero_section(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.style.get("background"), Some(hero_d::BACKGROUND));
        assert_eq!(el.style.get("justify-content"), Some("center"));

        let content = el.children[0].as_element().unwrap();
        // Title, subtitle and button all present by default.
        assert_eq!(content.children.len(), 3);
    }

    #[test]
    fn test_hero_background_image_wins() {
        let map = props(json!({
            "backgroundImage": "https://example.com/bg.png",
            "backgroundColor": "#000",
        }));
        let node = hero_section(&input(&map));
        assert_eq!(
            node.as_element().unwrap().style.get("background"),
            Some("url(https://example.com/bg.png)")
        );
    }

    #[test]
    fn test_hero_empty_subtitle_and_button_omitted() {
        let map = props(json!({"subtitle": "", "buttonText": ""}));
        let node = hero_section(&input(&map));
        let content = node.as_element().unwrap().children[0].as_element().unwrap();
        assert_eq!(content.children.len(), 1);
        assert_eq!(
            content.children[0].as_element().unwrap().kind,
            NodeKind::Heading(1)
        );
    }

    #[test]
    fn test_hero_alignment_maps_to_justify() {
        for (alignment, justify) in [
            ("left", "flex-start"),
            ("center", "center"),
            ("right", "flex-end"),
        ] {
            let map = props(json!({"alignment": alignment}));
            let node = hero_section(&input(&map));
            assert_eq!(
                node.as_element().unwrap().style.get("justify-content"),
                Some(justify)
            );
        }
    }

    #[test]
    fn test_hero_button_inverts_with_text_color() {
        let map = props(json!({"textColor": "white"}));
        let node = hero_section(&input(&map));
        let content = node.as_element().unwrap().children[0].as_element().unwrap();
        let link = content.children[2].as_element().unwrap();
        assert_eq!(link.kind, NodeKind::Link);
        assert_eq!(link.style.get("background-color"), Some("white"));
        assert_eq!(link.style.get("color"), Some(theme::PRIMARY));

        let map = props(json!({"textColor": "black"}));
        let node = hero_section(&input(&map));
        let content = node.as_element().unwrap().children[0].as_element().unwrap();
        let link = content.children[2].as_element().unwrap();
        assert_eq!(link.style.get("background-color"), Some(theme::PRIMARY));
        assert_eq!(link.style.get("color"), Some("white"));
    }

    #[test]
    fn test_hero_link_target() {
        let map = props(json!({"buttonLink": "/signup"}));
        let node = hero_section(&input(&map));
        let content = node.as_element().unwrap().children[0].as_element().unwrap();
        let link = content.children[2].as_element().unwrap();
        assert_eq!(link.attr_value("href"), Some("/signup"));
    }
}
