//! Field schema tables, one entry per block type.
//!
//! Option lists are ordered exactly as the host's property editor should
//! show them. Shared lists (alignment, gap steps) are built by the helpers
//! at the bottom.

use super::field::{FieldOption, FieldSpec};
use crate::types::BlockType;

/// The editable fields of a block type, in editor display order.
pub fn fields(block: BlockType) -> Vec<(&'static str, FieldSpec)> {
    match block {
        BlockType::Heading => vec![
            ("text", FieldSpec::text()),
            (
                "level",
                FieldSpec::select(vec![
                    FieldOption::new("H1", 1),
                    FieldOption::new("H2", 2),
                    FieldOption::new("H3", 3),
                    FieldOption::new("H4", 4),
                ]),
            ),
            ("color", FieldSpec::text()),
            ("align", FieldSpec::select(align_options())),
            (
                "background",
                FieldSpec::select(vec![
                    FieldOption::new("None", "transparent"),
                    FieldOption::new("Light Gray", "#f5f5f5"),
                    FieldOption::new("Soft Blue", "#e0f7fa"),
                    FieldOption::new("Soft Green", "#e8f5e9"),
                    FieldOption::new("Soft Yellow", "#fffde7"),
                    FieldOption::new("Soft Pink", "#fce4ec"),
                    FieldOption::new("Soft Lavender", "#f3e5f5"),
                ]),
            ),
            ("lineHeight", FieldSpec::text()),
        ],
        BlockType::Text => vec![
            ("text", FieldSpec::text_area()),
            (
                "size",
                FieldSpec::select(vec![
                    FieldOption::new("Small (14px)", "14px"),
                    FieldOption::new("Medium (16px)", "16px"),
                    FieldOption::new("Large (18px)", "18px"),
                ]),
            ),
            ("color", FieldSpec::text()),
            ("align", FieldSpec::select(align_options())),
            ("margin", FieldSpec::text()),
            ("padding", FieldSpec::text()),
            ("lineHeight", FieldSpec::text()),
        ],
        BlockType::Button => vec![
            ("text", FieldSpec::text()),
            (
                "variant",
                FieldSpec::select(vec![
                    FieldOption::new("Primary", "primary"),
                    FieldOption::new("Secondary", "secondary"),
                    FieldOption::new("Success", "success"),
                    FieldOption::new("Danger", "danger"),
                ]),
            ),
            (
                "size",
                FieldSpec::select(vec![
                    FieldOption::new("Small", "small"),
                    FieldOption::new("Medium", "medium"),
                    FieldOption::new("Large", "large"),
                ]),
            ),
        ],
        BlockType::Card => vec![
            ("title", FieldSpec::text()),
            ("description", FieldSpec::text_area()),
            ("backgroundColor", FieldSpec::text()),
        ],
        BlockType::List => vec![
            ("items", FieldSpec::text_area()),
            (
                "type",
                FieldSpec::select(vec![
                    FieldOption::new("Unordered List", "ul"),
                    FieldOption::new("Ordered List", "ol"),
                ]),
            ),
        ],
        BlockType::Divider => vec![
            ("color", FieldSpec::text()),
            (
                "thickness",
                FieldSpec::select(vec![
                    FieldOption::new("Thin (1px)", "1px"),
                    FieldOption::new("Medium (2px)", "2px"),
                    FieldOption::new("Thick (3px)", "3px"),
                ]),
            ),
        ],
        BlockType::Spacer => vec![(
            "height",
            FieldSpec::select(vec![
                FieldOption::new("Small (10px)", "10px"),
                FieldOption::new("Medium (20px)", "20px"),
                FieldOption::new("Large (40px)", "40px"),
                FieldOption::new("Extra Large (60px)", "60px"),
            ]),
        )],
        BlockType::Container => vec![
            ("backgroundColor", FieldSpec::text()),
            (
                "padding",
                FieldSpec::select(vec![
                    FieldOption::new("Small (10px)", "10px"),
                    FieldOption::new("Medium (20px)", "20px"),
                    FieldOption::new("Large (30px)", "30px"),
                    FieldOption::new("Extra Large (40px)", "40px"),
                ]),
            ),
            (
                "layout",
                FieldSpec::select(vec![
                    FieldOption::new("Vertical", "vertical"),
                    FieldOption::new("Horizontal", "horizontal"),
                    FieldOption::new("Grid", "grid"),
                    FieldOption::new("Centered", "centered"),
                ]),
            ),
            ("gap", FieldSpec::select(gap_options())),
        ],
        BlockType::FlexContainer => vec![
            (
                "direction",
                FieldSpec::select(vec![
                    FieldOption::new("Row", "row"),
                    FieldOption::new("Column", "column"),
                    FieldOption::new("Row Reverse", "row-reverse"),
                    FieldOption::new("Column Reverse", "column-reverse"),
                ]),
            ),
            (
                "justify",
                FieldSpec::select(vec![
                    FieldOption::new("Flex Start", "flex-start"),
                    FieldOption::new("Center", "center"),
                    FieldOption::new("Flex End", "flex-end"),
                    FieldOption::new("Space Between", "space-between"),
                    FieldOption::new("Space Around", "space-around"),
                    FieldOption::new("Space Evenly", "space-evenly"),
                ]),
            ),
            (
                "align",
                FieldSpec::select(vec![
                    FieldOption::new("Stretch", "stretch"),
                    FieldOption::new("Flex Start", "flex-start"),
                    FieldOption::new("Center", "center"),
                    FieldOption::new("Flex End", "flex-end"),
                    FieldOption::new("Baseline", "baseline"),
                ]),
            ),
            ("gap", FieldSpec::select(gap_options())),
            (
                "wrap",
                FieldSpec::select(vec![
                    FieldOption::new("No Wrap", "nowrap"),
                    FieldOption::new("Wrap", "wrap"),
                    FieldOption::new("Wrap Reverse", "wrap-reverse"),
                ]),
            ),
        ],
        BlockType::GridContainer => vec![
            (
                "columns",
                FieldSpec::select(vec![
                    FieldOption::new("1 Column", 1),
                    FieldOption::new("2 Columns", 2),
                    FieldOption::new("3 Columns", 3),
                    FieldOption::new("4 Columns", 4),
                    FieldOption::new("5 Columns", 5),
                    FieldOption::new("6 Columns", 6),
                ]),
            ),
            ("gap", FieldSpec::select(gap_options())),
            ("rowGap", FieldSpec::select(gap_options())),
        ],
        BlockType::SimpleContainer => vec![
            ("backgroundColor", FieldSpec::text()),
            (
                "padding",
                FieldSpec::select(vec![
                    FieldOption::new("Small (10px)", "10px"),
                    FieldOption::new("Medium (20px)", "20px"),
                    FieldOption::new("Large (30px)", "30px"),
                ]),
            ),
        ],
        BlockType::PositionedElement => vec![
            (
                "position",
                FieldSpec::select(vec![
                    FieldOption::new("Static", "static"),
                    FieldOption::new("Relative", "relative"),
                    FieldOption::new("Absolute", "absolute"),
                    FieldOption::new("Fixed", "fixed"),
                    FieldOption::new("Sticky", "sticky"),
                ]),
            ),
            ("top", FieldSpec::text()),
            ("left", FieldSpec::text()),
            ("right", FieldSpec::text()),
            ("bottom", FieldSpec::text()),
            ("zIndex", FieldSpec::text()),
        ],
        BlockType::HeroSection => vec![
            ("title", FieldSpec::text()),
            ("subtitle", FieldSpec::text_area()),
            ("buttonText", FieldSpec::text()),
            ("buttonLink", FieldSpec::text()),
            ("backgroundColor", FieldSpec::text()),
            (
                "textColor",
                FieldSpec::select(vec![
                    FieldOption::new("White", "white"),
                    FieldOption::new("Black", "black"),
                    FieldOption::new("Blue", "#007bff"),
                    FieldOption::new("Green", "#28a745"),
                ]),
            ),
            ("backgroundImage", FieldSpec::text()),
            ("height", FieldSpec::select(section_height_options())),
            (
                "alignment",
                FieldSpec::select(vec![
                    FieldOption::new("Left", "left"),
                    FieldOption::new("Center", "center"),
                    FieldOption::new("Right", "right"),
                ]),
            ),
        ],
        BlockType::Slider => vec![
            (
                "slides",
                FieldSpec::text_area().with_label("Slide Content (one per line)"),
            ),
            ("autoplay", FieldSpec::yes_no()),
            (
                "autoplaySpeed",
                FieldSpec::select(vec![
                    FieldOption::new("Fast (2s)", 2000),
                    FieldOption::new("Normal (3s)", 3000),
                    FieldOption::new("Slow (5s)", 5000),
                    FieldOption::new("Very Slow (8s)", 8000),
                ]),
            ),
            ("showDots", FieldSpec::yes_no()),
            ("showArrows", FieldSpec::yes_no()),
            ("height", FieldSpec::select(section_height_options())),
            (
                "backgroundColor",
                FieldSpec::select(vec![
                    FieldOption::new("Light Gray", "#f8f9fa"),
                    FieldOption::new("Blue", "#007bff"),
                    FieldOption::new("Green", "#28a745"),
                    FieldOption::new("Purple", "#6f42c1"),
                    FieldOption::new("Orange", "#fd7e14"),
                ]),
            ),
        ],
        BlockType::Expander => vec![
            ("title", FieldSpec::text()),
            ("initiallyExpanded", FieldSpec::yes_no()),
        ],
        BlockType::ImageTextSplit => vec![
            ("text", FieldSpec::text_area()),
            ("imageSrc", FieldSpec::text()),
            ("alt", FieldSpec::text()),
            ("textAlign", FieldSpec::select(align_options())),
            ("textColor", FieldSpec::text()),
            (
                "imageWidth",
                FieldSpec::select(vec![
                    FieldOption::new("30%", "30%"),
                    FieldOption::new("40%", "40%"),
                    FieldOption::new("50%", "50%"),
                    FieldOption::new("60%", "60%"),
                ]),
            ),
        ],
        BlockType::Sponsor => vec![
            (
                "sponsors",
                FieldSpec::text_area().with_label("Sponsors (one per line)"),
            ),
            ("backgroundColor", FieldSpec::text()),
        ],
        BlockType::Location => vec![
            ("address", FieldSpec::text_area()),
            ("mapUrl", FieldSpec::text()),
            ("backgroundColor", FieldSpec::text()),
        ],
        BlockType::Dates => vec![
            (
                "dateList",
                FieldSpec::text_area().with_label("Dates (one per line)"),
            ),
            ("backgroundColor", FieldSpec::text()),
        ],
        BlockType::ContactUs => vec![
            ("email", FieldSpec::text()),
            ("phone", FieldSpec::text()),
            ("messagePlaceholder", FieldSpec::text()),
            ("backgroundColor", FieldSpec::text()),
        ],
        BlockType::FilterSearch => vec![
            ("placeholder", FieldSpec::text()),
            ("backgroundColor", FieldSpec::text()),
        ],
        BlockType::ProgramList => vec![
            (
                "programs",
                FieldSpec::text_area().with_label("Programs"),
            ),
            ("backgroundColor", FieldSpec::text()),
        ],
    }
}

// =============================================================================
// Shared option lists
// =============================================================================

fn align_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("Left", "left"),
        FieldOption::new("Center", "center"),
        FieldOption::new("Right", "right"),
        FieldOption::new("Justify", "justify"),
    ]
}

fn gap_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("Small (8px)", "8px"),
        FieldOption::new("Medium (16px)", "16px"),
        FieldOption::new("Large (24px)", "24px"),
        FieldOption::new("Extra Large (32px)", "32px"),
    ]
}

fn section_height_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("Small (300px)", "300px"),
        FieldOption::new("Medium (400px)", "400px"),
        FieldOption::new("Large (500px)", "500px"),
        FieldOption::new("Extra Large (600px)", "600px"),
    ]
}

// =============================================================================
// Tests
// =============================================================================
