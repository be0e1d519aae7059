//! Renderers - pure functions from a property set to a visual tree.
//!
//! Every block type has exactly one renderer with the shared [`RenderFn`]
//! signature. Primitive and container renderers are pure; the two stateful
//! widgets ([`crate::widget::carousel`], [`crate::widget::expander`]) keep
//! per-instance state behind the same signature, keyed by
//! [`RenderInput::instance`].

mod basic;
mod containers;
mod event;
mod hero;
mod split;

pub use basic::{button, card, divider, heading, list, spacer, text};
pub use containers::{
    container, flex_container, grid_container, positioned_element, simple_container,
};
pub use event::{contact_us, dates, filter_search, location, program_list, sponsor};
pub use hero::hero_section;
pub use split::image_text_split;

use crate::props::PropMap;
use crate::tree::Node;
use crate::types::BlockType;
use crate::widget;

// =============================================================================
// Render contract
// =============================================================================

/// Everything a renderer receives from the host for one block instance.
pub struct RenderInput<'a> {
    /// Host-assigned identifier of the block instance. Stateful widgets key
    /// their state on it; pure renderers ignore it.
    pub instance: &'a str,
    /// The instance's current property values.
    pub props: &'a PropMap,
    /// Child content the host already rendered, for containers that accept
    /// opaque children. Empty for leaf blocks and slot-declaring containers.
    pub children: &'a [Node],
}

/// Renderer signature shared by every block type.
pub type RenderFn = fn(&RenderInput) -> Node;

/// The renderer registered for a block type.
pub fn renderer(block: BlockType) -> RenderFn {
    match block {
        BlockType::Heading => heading,
        BlockType::Text => text,
        BlockType::Button => button,
        BlockType::Card => card,
        BlockType::List => list,
        BlockType::Divider => divider,
        BlockType::Spacer => spacer,
        BlockType::Container => container,
        BlockType::FlexContainer => flex_container,
        BlockType::GridContainer => grid_container,
        BlockType::SimpleContainer => simple_container,
        BlockType::PositionedElement => positioned_element,
        BlockType::HeroSection => hero_section,
        BlockType::Slider => widget::carousel::render,
        BlockType::Expander => widget::expander::render,
        BlockType::ImageTextSplit => image_text_split,
        BlockType::Sponsor => sponsor,
        BlockType::Location => location,
        BlockType::Dates => dates,
        BlockType::ContactUs => contact_us,
        BlockType::FilterSearch => filter_search,
        BlockType::ProgramList => program_list,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RenderInput;
    use crate::props::PropMap;
    use crate::tree::Node;
    use serde_json::Value;

    /// Build a property map from a `json!` object literal.
    pub fn props(value: Value) -> PropMap {
        match value {
            Value::Object(map) => map,
            _ => PropMap::new(),
        }
    }

    /// Render input with no children and a fixed test instance id.
    pub fn input<'a>(props: &'a PropMap) -> RenderInput<'a> {
        RenderInput {
            instance: "test-instance",
            props,
            children: &[],
        }
    }

    /// Render input with children.
    pub fn input_with_children<'a>(props: &'a PropMap, children: &'a [Node]) -> RenderInput<'a> {
        RenderInput {
            instance: "test-instance",
            props,
            children,
        }
    }
}
