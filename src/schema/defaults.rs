//! Default property values, one submodule per block type.
//!
//! These constants are the single source of truth for defaulting: the
//! [`default_props`] table seeds newly placed blocks with them, and every
//! renderer uses the same constants as fallbacks for omitted properties.
//! The registry verifies at build time that the table and the field schema
//! agree.

use serde_json::{Value, json};

use crate::props::PropMap;
use crate::types::BlockType;

// =============================================================================
// Per-block constants
// =============================================================================

pub mod heading {
    use crate::theme;

    pub const TEXT: &str = "Heading";
    pub const LEVEL: u64 = 1;
    pub const COLOR: &str = theme::HEADING_COLOR;
    pub const ALIGN: &str = "left";
    pub const BACKGROUND: &str = "transparent";
    pub const LINE_HEIGHT: &str = "1.6";
}

pub mod text {
    use crate::theme;

    pub const TEXT: &str =
        "This is some sample text. You can edit this content in the page editor.";
    pub const SIZE: &str = "16px";
    pub const COLOR: &str = theme::BODY_COLOR;
    pub const ALIGN: &str = "left";
    pub const MARGIN: &str = "12px 0";
    pub const PADDING: &str = "0";
    pub const LINE_HEIGHT: &str = "1.6";
}

pub mod button {
    pub const TEXT: &str = "Click me";
    pub const VARIANT: &str = "primary";
    pub const SIZE: &str = "medium";
}

pub mod card {
    use crate::theme;

    pub const TITLE: &str = "Card Title";
    pub const DESCRIPTION: &str = "This is a card component with a title and description. \
         You can customize the background color and content.";
    pub const BACKGROUND: &str = theme::CARD_BG;
}

pub mod list {
    pub const ITEMS: &str = "First item\nSecond item\nThird item";
    pub const KIND: &str = "ul";
}

pub mod divider {
    use crate::theme;

    pub const COLOR: &str = theme::LIGHT_BORDER;
    pub const THICKNESS: &str = "1px";
}

pub mod spacer {
    pub const HEIGHT: &str = "20px";
}

pub mod container {
    pub const BACKGROUND: &str = "transparent";
    pub const PADDING: &str = "20px";
    pub const LAYOUT: &str = "vertical";
    pub const GAP: &str = "16px";
}

pub mod flex {
    pub const DIRECTION: &str = "row";
    pub const JUSTIFY: &str = "flex-start";
    pub const ALIGN: &str = "stretch";
    pub const GAP: &str = "16px";
    pub const WRAP: &str = "nowrap";
}

pub mod grid {
    pub const COLUMNS: u64 = 2;
    pub const GAP: &str = "16px";
    pub const ROW_GAP: &str = "16px";
}

pub mod simple {
    pub const BACKGROUND: &str = "#f0f8ff";
    pub const PADDING: &str = "20px";
}

pub mod positioned {
    pub const POSITION: &str = "static";
    pub const OFFSET: &str = "auto";
    pub const Z_INDEX: &str = "auto";
}

pub mod hero {
    use crate::theme;

    pub const TITLE: &str = "Welcome to Our Amazing Product";
    pub const SUBTITLE: &str = "Discover the future of web development with our \
         innovative solutions and cutting-edge technology.";
    pub const BUTTON_TEXT: &str = "Get Started";
    pub const BUTTON_LINK: &str = "#";
    pub const BACKGROUND: &str = theme::PRIMARY;
    pub const TEXT_COLOR: &str = "white";
    pub const BACKGROUND_IMAGE: &str = "";
    pub const HEIGHT: &str = "400px";
    pub const ALIGNMENT: &str = "center";
}

pub mod slider {
    use crate::theme;

    pub const SLIDES: &str = "Welcome to Slide 1\nThis is Slide 2\nAnd here is Slide 3";
    pub const AUTOPLAY: bool = true;
    pub const AUTOPLAY_MS: u64 = 3000;
    pub const SHOW_DOTS: bool = true;
    pub const SHOW_ARROWS: bool = true;
    pub const HEIGHT: &str = "400px";
    pub const BACKGROUND: &str = theme::PANEL_BG;
}

pub mod expander {
    pub const TITLE: &str = "Expandable Section";
    pub const INITIALLY_EXPANDED: bool = false;
}

pub mod split {
    use crate::theme;

    pub const TEXT: &str = "This is the text content on the left side.";
    pub const IMAGE_SRC: &str = "https://via.placeholder.com/400x300";
    pub const ALT: &str = "Split Image";
    pub const TEXT_ALIGN: &str = "left";
    pub const TEXT_COLOR: &str = theme::HEADING_COLOR;
    pub const IMAGE_WIDTH: &str = "50%";
}

pub mod sponsor {
    use crate::theme;

    pub const SPONSORS: &str = "Sponsor 1\nSponsor 2\nSponsor 3";
    pub const BACKGROUND: &str = theme::PANEL_BG;
}

pub mod location {
    use crate::theme;

    pub const ADDRESS: &str = "123 Event Street, City, Country";
    pub const MAP_URL: &str = "https://via.placeholder.com/400x200";
    pub const BACKGROUND: &str = theme::PANEL_BG;
}

pub mod dates {
    use crate::theme;

    pub const DATE_LIST: &str = "2025-09-03\n2025-09-04\n2025-09-05";
    pub const BACKGROUND: &str = theme::PANEL_BG;
}

pub mod contact {
    use crate::theme;

    pub const EMAIL: &str = "contact@example.com";
    pub const PHONE: &str = "+1-234-567-8900";
    pub const MESSAGE_PLACEHOLDER: &str = "Your message here...";
    pub const BACKGROUND: &str = theme::PANEL_BG;
}

pub mod filter {
    use crate::theme;

    pub const PLACEHOLDER: &str = "Search programs...";
    pub const BACKGROUND: &str = theme::PANEL_BG;
}

pub mod program {
    pub const PROGRAMS: &str = "Program 1\nA great event on September 03, 2025\n\n\
         Program 2\nAnother event on September 04, 2025";
    pub const BACKGROUND: &str = "#e8ebeeff";
}

// =============================================================================
// DefaultProps table
// =============================================================================

/// The complete default property set for a block type.
///
/// Every field declared in [`super::fields`] has an entry here; the
/// registry build rejects the catalog otherwise.
pub fn default_props(block: BlockType) -> PropMap {
    let value = match block {
        BlockType::Heading => json!({
            "text": heading::TEXT,
            "level": heading::LEVEL,
            "color": heading::COLOR,
            "align": heading::ALIGN,
            "background": heading::BACKGROUND,
            "lineHeight": heading::LINE_HEIGHT,
        }),
        BlockType::Text => json!({
            "text": text::TEXT,
            "size": text::SIZE,
            "color": text::COLOR,
            "align": text::ALIGN,
            "margin": text::MARGIN,
            "padding": text::PADDING,
            "lineHeight": text::LINE_HEIGHT,
        }),
        BlockType::Button => json!({
            "text": button::TEXT,
            "variant": button::VARIANT,
            "size": button::SIZE,
        }),
        BlockType::Card => json!({
            "title": card::TITLE,
            "description": card::DESCRIPTION,
            "backgroundColor": card::BACKGROUND,
        }),
        BlockType::List => json!({
            "items": list::ITEMS,
            "type": list::KIND,
        }),
        BlockType::Divider => json!({
            "color": divider::COLOR,
            "thickness": divider::THICKNESS,
        }),
        BlockType::Spacer => json!({
            "height": spacer::HEIGHT,
        }),
        BlockType::Container => json!({
            "backgroundColor": container::BACKGROUND,
            "padding": container::PADDING,
            "layout": container::LAYOUT,
            "gap": container::GAP,
        }),
        BlockType::FlexContainer => json!({
            "direction": flex::DIRECTION,
            "justify": flex::JUSTIFY,
            "align": flex::ALIGN,
            "gap": flex::GAP,
            "wrap": flex::WRAP,
        }),
        BlockType::GridContainer => json!({
            "columns": grid::COLUMNS,
            "gap": grid::GAP,
            "rowGap": grid::ROW_GAP,
        }),
        BlockType::SimpleContainer => json!({
            "backgroundColor": simple::BACKGROUND,
            "padding": simple::PADDING,
        }),
        BlockType::PositionedElement => json!({
            "position": positioned::POSITION,
            "top": positioned::OFFSET,
            "left": positioned::OFFSET,
            "right": positioned::OFFSET,
            "bottom": positioned::OFFSET,
            "zIndex": positioned::Z_INDEX,
        }),
        BlockType::HeroSection => json!({
            "title": hero::TITLE,
            "subtitle": hero::SUBTITLE,
            "buttonText": hero::BUTTON_TEXT,
            "buttonLink": hero::BUTTON_LINK,
            "backgroundColor": hero::BACKGROUND,
            "textColor": hero::TEXT_COLOR,
            "backgroundImage": hero::BACKGROUND_IMAGE,
            "height": hero::HEIGHT,
            "alignment": hero::ALIGNMENT,
        }),
        BlockType::Slider => json!({
            "slides": slider::SLIDES,
            "autoplay": slider::AUTOPLAY,
            "autoplaySpeed": slider::AUTOPLAY_MS,
            "showDots": slider::SHOW_DOTS,
            "showArrows": slider::SHOW_ARROWS,
            "height": slider::HEIGHT,
            "backgroundColor": slider::BACKGROUND,
        }),
        BlockType::Expander => json!({
            "title": expander::TITLE,
            "initiallyExpanded": expander::INITIALLY_EXPANDED,
        }),
        BlockType::ImageTextSplit => json!({
            "text": split::TEXT,
            "imageSrc": split::IMAGE_SRC,
            "alt": split::ALT,
            "textAlign": split::TEXT_ALIGN,
            "textColor": split::TEXT_COLOR,
            "imageWidth": split::IMAGE_WIDTH,
        }),
        BlockType::Sponsor => json!({
            "sponsors": sponsor::SPONSORS,
            "backgroundColor": sponsor::BACKGROUND,
        }),
        BlockType::Location => json!({
            "address": location::ADDRESS,
            "mapUrl": location::MAP_URL,
            "backgroundColor": location::BACKGROUND,
        }),
        BlockType::Dates => json!({
            "dateList": dates::DATE_LIST,
            "backgroundColor": dates::BACKGROUND,
        }),
        BlockType::ContactUs => json!({
            "email": contact::EMAIL,
            "phone": contact::PHONE,
            "messagePlaceholder": contact::MESSAGE_PLACEHOLDER,
            "backgroundColor": contact::BACKGROUND,
        }),
        BlockType::FilterSearch => json!({
            "placeholder": filter::PLACEHOLDER,
            "backgroundColor": filter::BACKGROUND,
        }),
        BlockType::ProgramList => json!({
            "programs": program::PROGRAMS,
            "backgroundColor": program::BACKGROUND,
        }),
    };
    match value {
        Value::Object(map) => map,
        _ => PropMap::new(),
    }
}

// =============================================================================
// Tests
// =============================================================================
