//! Core types for pagecraft.
//!
//! `BlockType` is the closed set of content blocks the registry knows about.
//! Keeping it a plain enum means every table in the crate (field schemas,
//! defaults, renderers, slot declarations) is an exhaustive match the
//! compiler checks when a block type is added or removed.

use std::fmt;

// =============================================================================
// BlockType
// =============================================================================

/// Identifier of a registered content block kind.
///
/// The string form (`name`) is the identifier the host engine stores in its
/// page document and uses for registry lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Heading,
    Text,
    Button,
    Card,
    List,
    Divider,
    Spacer,
    Container,
    FlexContainer,
    GridContainer,
    SimpleContainer,
    PositionedElement,
    HeroSection,
    Slider,
    Expander,
    ImageTextSplit,
    Sponsor,
    Location,
    Dates,
    ContactUs,
    FilterSearch,
    ProgramList,
}

impl BlockType {
    /// The registry identifier for this block type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::Text => "Text",
            Self::Button => "Button",
            Self::Card => "Card",
            Self::List => "List",
            Self::Divider => "Divider",
            Self::Spacer => "Spacer",
            Self::Container => "Container",
            Self::FlexContainer => "FlexContainer",
            Self::GridContainer => "GridContainer",
            Self::SimpleContainer => "SimpleContainer",
            Self::PositionedElement => "PositionedElement",
            Self::HeroSection => "HeroSection",
            Self::Slider => "Slider",
            Self::Expander => "Expander",
            Self::ImageTextSplit => "ImageTextSplit",
            Self::Sponsor => "Sponsor",
            Self::Location => "Location",
            Self::Dates => "Dates",
            Self::ContactUs => "ContactUs",
            Self::FilterSearch => "FilterSearch",
            Self::ProgramList => "ProgramList",
        }
    }

    /// Parse a registry identifier. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.name() == name)
    }

    /// All block types, in catalog order.
    pub const fn all() -> &'static [BlockType] {
        &[
            Self::Heading,
            Self::Text,
            Self::Button,
            Self::Card,
            Self::List,
            Self::Divider,
            Self::Spacer,
            Self::Container,
            Self::FlexContainer,
            Self::GridContainer,
            Self::SimpleContainer,
            Self::PositionedElement,
            Self::HeroSection,
            Self::Slider,
            Self::Expander,
            Self::ImageTextSplit,
            Self::Sponsor,
            Self::Location,
            Self::Dates,
            Self::ContactUs,
            Self::FilterSearch,
            Self::ProgramList,
        ]
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for &block in BlockType::all() {
            assert_eq!(BlockType::from_name(block.name()), Some(block));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(BlockType::from_name("Carousel"), None);
        assert_eq!(BlockType::from_name("heading"), None);
        assert_eq!(BlockType::from_name(""), None);
    }

    #[test]
    fn test_all_unique() {
        let all = BlockType::all();
        assert_eq!(all.len(), 22);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(BlockType::HeroSection.to_string(), "HeroSection");
        assert_eq!(BlockType::ProgramList.to_string(), "ProgramList");
    }
}
