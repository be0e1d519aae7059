//! Event-site widget renderers.
//!
//! Sponsor grid, location, date list, contact form, filter box and program
//! list share a decorated panel shell; `panel` and `panel_title` build it.

use super::RenderInput;
use crate::parse;
use crate::props::Props;
use crate::schema::defaults::{contact as contact_d, dates as dates_d, filter as filter_d};
use crate::schema::defaults::{location as location_d, program as program_d, sponsor as sponsor_d};
use crate::theme;
use crate::tree::{Element, Node, NodeKind};

// =============================================================================
// Panel shell
// =============================================================================

fn panel(background: String) -> Element {
    Element::new(NodeKind::Block)
        .style("background-color", background)
        .style("padding", "20px")
        .style("margin", theme::BLOCK_MARGIN)
        .style("border-radius", "8px")
        .style("border", format!("1px solid {}", theme::PANEL_BORDER))
}

fn panel_title(title: &str, color: &str) -> Node {
    Element::new(NodeKind::Heading(3))
        .style("margin", "0 0 16px 0")
        .style("color", color)
        .text(title)
        .into_node()
}

// =============================================================================
// Sponsor grid
// =============================================================================

/// Wrapping grid of sponsor tiles, one per line of the `sponsors` property.
pub fn sponsor(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let sponsors = parse::lines(&props.str("sponsors", sponsor_d::SPONSORS));

    panel(props.str("backgroundColor", sponsor_d::BACKGROUND))
        .child(panel_title("Sponsors", theme::HEADING_COLOR))
        .child(
            Element::new(NodeKind::Block)
                .style("display", "flex")
                .style("flex-wrap", "wrap")
                .style("gap", "16px")
                .children(sponsors.into_iter().map(|name| {
                    Element::new(NodeKind::Block)
                        .style("padding", "10px")
                        .style("background-color", theme::CARD_BG)
                        .style("border-radius", "4px")
                        .style("box-shadow", theme::TILE_SHADOW)
                        .text(name)
                        .into_node()
                }))
                .into_node(),
        )
        .into_node()
}

// =============================================================================
// Location
// =============================================================================

/// Venue address with a map image.
pub fn location(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    panel(props.str("backgroundColor", location_d::BACKGROUND))
        .child(panel_title("Location", theme::HEADING_COLOR))
        .child(
            Element::new(NodeKind::Paragraph)
                .style("margin", "0 0 16px 0")
                .style("color", theme::MUTED_COLOR)
                .text(props.str("address", location_d::ADDRESS))
                .into_node(),
        )
        .child(
            Element::new(NodeKind::Image)
                .attr("src", props.str("mapUrl", location_d::MAP_URL))
                .attr("alt", "Location Map")
                .style("width", "100%")
                .style("height", "200px")
                .style("object-fit", "cover")
                .style("border-radius", "4px")
                .into_node(),
        )
        .into_node()
}

// =============================================================================
// Dates
// =============================================================================

/// Bullet list of event dates, one per line of the `dateList` property.
pub fn dates(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let dates = parse::lines(&props.str("dateList", dates_d::DATE_LIST));

    panel(props.str("backgroundColor", dates_d::BACKGROUND))
        .child(panel_title("Dates", theme::HEADING_COLOR))
        .child(
            Element::new(NodeKind::BulletList)
                .style("margin", "0")
                .style("padding-left", "20px")
                .style("color", theme::MUTED_COLOR)
                .children(dates.into_iter().map(|date| {
                    Element::new(NodeKind::ListItem)
                        .style("margin", "8px 0")
                        .text(date)
                        .into_node()
                }))
                .into_node(),
        )
        .into_node()
}

// =============================================================================
// Contact form
// =============================================================================

/// Contact details plus a message box. The message content is host-side
/// input state; this renderer only supplies the field and its placeholder.
pub fn contact_us(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let email = props.str("email", contact_d::EMAIL);

    panel(props.str("backgroundColor", contact_d::BACKGROUND))
        .child(panel_title("Contact Us", theme::HEADING_COLOR))
        .child(
            Element::new(NodeKind::Paragraph)
                .style("margin", "0 0 12px 0")
                .style("color", theme::MUTED_COLOR)
                .child(Node::text("Email: "))
                .child(
                    Element::new(NodeKind::Link)
                        .attr("href", format!("mailto:{email}"))
                        .style("color", theme::PRIMARY)
                        .text(email.clone())
                        .into_node(),
                )
                .into_node(),
        )
        .child(
            Element::new(NodeKind::Paragraph)
                .style("margin", "0 0 12px 0")
                .style("color", theme::MUTED_COLOR)
                .text(format!("Phone: {}", props.str("phone", contact_d::PHONE)))
                .into_node(),
        )
        .child(
            Element::new(NodeKind::TextArea)
                .attr(
                    "placeholder",
                    props.str("messagePlaceholder", contact_d::MESSAGE_PLACEHOLDER),
                )
                .style("width", "100%")
                .style("height", "100px")
                .style("padding", "10px")
                .style("border-radius", "4px")
                .style("border", format!("1px solid {}", theme::LIGHT_BORDER))
                .style("resize", "vertical")
                .into_node(),
        )
        .into_node()
}

// =============================================================================
// Filter box
// =============================================================================

/// Search input shell; the live search term is host-side input state.
pub fn filter_search(input: &RenderInput) -> Node {
    let props = Props::new(input.props);

    panel(props.str("backgroundColor", filter_d::BACKGROUND))
        .child(panel_title("Filter & Search", theme::HEADING_COLOR))
        .child(
            Element::new(NodeKind::Input)
                .attr("placeholder", props.str("placeholder", filter_d::PLACEHOLDER))
                .style("width", "100%")
                .style("padding", "10px")
                .style("border-radius", "4px")
                .style("border", format!("1px solid {}", theme::LIGHT_BORDER))
                .style("font-size", "16px")
                .into_node(),
        )
        .into_node()
}

// =============================================================================
// Program list
// =============================================================================

/// Paragraph-delimited program entries: first line titles the entry, the
/// remaining lines become its description.
pub fn program_list(input: &RenderInput) -> Node {
    let props = Props::new(input.props);
    let background = props.str("backgroundColor", program_d::BACKGROUND);
    let programs = parse::paragraphs(&props.str("programs", program_d::PROGRAMS));

    // The title color tracks the shell background, as the site design wants
    // the "Schedules" label invisible against the default shell.
    panel(background.clone())
        .child(panel_title("Schedules", &background))
        .children(programs.into_iter().map(|program| {
            Element::new(NodeKind::Block)
                .style("background-color", theme::CARD_BG)
                .style("padding", "15px")
                .style("margin-bottom", "16px")
                .style("border-radius", "4px")
                .style("box-shadow", theme::TILE_SHADOW)
                .child(
                    Element::new(NodeKind::Heading(4))
                        .style("margin", "0 0 8px 0")
                        .style("color", theme::HEADING_COLOR)
                        .text(program.title)
                        .into_node(),
                )
                .child(
                    Element::new(NodeKind::Paragraph)
                        .style("margin", "0")
                        .style("color", theme::MUTED_COLOR)
                        .style("line-height", "1.5")
                        .text(program.description)
                        .into_node(),
                )
                .into_node()
        }))
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
    fn test_sponsor_tiles_from_lines() {
        let map = props(json!({"sponsors": "Acme\n\n  Globex  \nInitech"}));
        let node = sponsor(&input(&map));
        let el = node.as_element().unwrap();
        let grid = el.children[1].as_element().unwrap();
        assert_eq!(grid.children.len(), 3);
        assert_eq!(node.collect_text(), "SponsorsAcmeGlobexInitech");
    }

    #[test]
    fn test_sponsor_empty_input_yields_empty_grid() {
        let map = props(json!({"sponsors": "   \n"}));
        let node = sponsor(&input(&map));
        let grid = node.as_element().unwrap().children[1].as_element().unwrap();
        assert!(grid.children.is_empty());
    }

    #[test]
    fn test_location_map_image() {
        let map = props(json!({"address": "1 Main St", "mapUrl": "https://maps.example/x"}));
        let node = location(&input(&map));
        let el = node.as_element().unwrap();
        let image = el.children[2].as_element().unwrap();
        assert_eq!(image.kind, NodeKind::Image);
        assert_eq!(image.attr_value("src"), Some("https://maps.example/x"));
        assert!(node.collect_text().contains("1 Main St"));
    }

    #[test]
    fn test_dates_list() {
        let map = props(json!({"dateList": "2025-09-03\n2025-09-04"}));
        let node = dates(&input(&map));
        let list = node.as_element().unwrap().children[1].as_element().unwrap();
        assert_eq!(list.kind, NodeKind::BulletList);
        assert_eq!(list.children.len(), 2);
    }

    #[test]
    fn test_contact_mailto_link() {
        let map = props(json!({"email": "team@event.example", "phone": "+1-555-0100"}));
        let node = contact_us(&input(&map));
        let el = node.as_element().unwrap();
        let email_line = el.children[1].as_element().unwrap();
        let link = email_line.children[1].as_element().unwrap();
        assert_eq!(link.kind, NodeKind::Link);
        assert_eq!(link.attr_value("href"), Some("mailto:team@event.example"));
        assert!(node.collect_text().contains("Phone: +1-555-0100"));
    }

    #[test]
    fn test_contact_message_placeholder() {
        let map = props(json!({}));
        let node = contact_us(&input(&map));
        let area = node.as_element().unwrap().children[3].as_element().unwrap();
        assert_eq!(area.kind, NodeKind::TextArea);
        assert_eq!(
            area.attr_value("placeholder"),
            Some(contact_d::MESSAGE_PLACEHOLDER)
        );
    }

    #[test]
    fn test_filter_search_placeholder() {
        let map = props(json!({"placeholder": "Find a talk..."}));
        let node = filter_search(&input(&map));
        let field = node.as_element().unwrap().children[1].as_element().unwrap();
        assert_eq!(field.kind, NodeKind::Input);
        assert_eq!(field.attr_value("placeholder"), Some("Find a talk..."));
    }

    #[test]
    fn test_program_list_paragraph_parsing() {
        let map = props(json!({"programs": "Keynote\nOpening words\n\nWorkshop"}));
        let node = program_list(&input(&map));
        let el = node.as_element().unwrap();
        // Title plus two program tiles.
        assert_eq!(el.children.len(), 3);

        let first = el.children[1].as_element().unwrap();
        assert_eq!(first.children[0].collect_text(), "Keynote");
        assert_eq!(first.children[1].collect_text(), "Opening words");

        let second = el.children[2].as_element().unwrap();
        assert_eq!(second.children[0].collect_text(), "Workshop");
        assert_eq!(second.children[1].collect_text(), "");
    }

    #[test]
    fn test_program_list_title_matches_shell_background() {
        let map = props(json!({"backgroundColor": "#123456"}));
        let node = program_list(&input(&map));
        let el = node.as_element().unwrap();
        assert_eq!(el.style.get("background-color"), Some("#123456"));
        let title = el.children[0].as_element().unwrap();
        assert_eq!(title.style.get("color"), Some("#123456"));
    }
}
