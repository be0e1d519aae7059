//! Image/text split renderer.

use super::RenderInput;
use crate::props::Props;
use crate::schema::defaults::split as split_d;
use crate::theme;
use crate::tree::{Element, Node, NodeKind};

/// Two-column block: text on the left, image on the right.
pub fn image_text_split(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    Element::new(NodeKind::Block)
        .style("display", "flex")
        .style("align-items", "center")
        .style("margin", theme::BLOCK_MARGIN)
        .style("border-radius", "8px")
        .style("overflow", "hidden")
        .style("box-shadow", theme::CARD_SHADOW)
        .child(
            Element::new(NodeKind::Block)
                .style("flex", "1")
                .style("padding", "20px")
                .style("text-align", props.str("textAlign", split_d::TEXT_ALIGN))
                .style("color", props.str("textColor", split_d::TEXT_COLOR))
                .child(
                    Element::new(NodeKind::Paragraph)
                        .text(props.str("text", split_d::TEXT))
                        .into_node(),
                )
                .into_node(),
        )
        .child(
            Element::new(NodeKind::Image)
                .attr("src", props.str("imageSrc", split_d::IMAGE_SRC))
                .attr("alt", props.str("alt", split_d::ALT))
                .style("width", props.str("imageWidth", split_d::IMAGE_WIDTH))
                .style("height", "auto")
                .style("object-fit", "cover")
                .into_node(),
        )
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{input, props};
    use serde_json::json;

    #[test]
    fn test_split_structure() {
        let map = props(json!({
            "text": "left side",
            "imageSrc": "https://example.com/pic.jpg",
            "imageWidth": "40%",
        }));
        let node = image_text_split(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.children.len(), 2);

        let image = el.children[1].as_element().unwrap();
        assert_eq!(image.kind, NodeKind::Image);
        assert_eq!(image.attr_value("src"), Some("https://example.com/pic.jpg"));
        assert_eq!(image.style.get("width"), Some("40%"));
        assert_eq!(node.collect_text(), "left side");
    }

    #[test]
    fn test_split_alt_default() {
        let map = props(json!({}));
        let node = image_text_split(&input(&map));
        let image = node.as_element().unwrap().children[1].as_element().unwrap();
        assert_eq!(image.attr_value("alt"), Some(split_d::ALT));
    }
}
