//! Shared styling values and the button variant system.
//!
//! Every color or spacing value used by more than one renderer lives here,
//! and the default-property tables in [`crate::schema`] draw from the same
//! constants - one source of truth, so a block's `DefaultProps` and its
//! renderer fallbacks cannot drift apart.

// =============================================================================
// Palette
// =============================================================================

/// Heading and title text.
pub const HEADING_COLOR: &str = "#333";
/// Body text.
pub const BODY_COLOR: &str = "#555";
/// Secondary body text.
pub const MUTED_COLOR: &str = "#666";
/// Primary action color (links, hero background).
pub const PRIMARY: &str = "#007bff";
/// Panel background used by the event-site widgets.
pub const PANEL_BG: &str = "#f8f9fa";
/// Panel border used by the event-site widgets.
pub const PANEL_BORDER: &str = "#e9ecef";
/// Hairline border for cards and form fields.
pub const LIGHT_BORDER: &str = "#ddd";
/// Card background.
pub const CARD_BG: &str = "#fff";

/// Vertical rhythm between sibling blocks.
pub const BLOCK_MARGIN: &str = "16px 0";
/// Elevation shadow for cards and split blocks.
pub const CARD_SHADOW: &str = "0 2px 4px rgba(0,0,0,0.1)";
/// Lighter shadow for tiles inside panels.
pub const TILE_SHADOW: &str = "0 1px 3px rgba(0,0,0,0.1)";

// =============================================================================
// Button variants
// =============================================================================

/// Semantic button color variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Primary action (blue).
    #[default]
    Primary,
    /// Secondary action (gray).
    Secondary,
    /// Success state (green).
    Success,
    /// Destructive action (red).
    Danger,
}

/// Resolved colors for a button variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Background color.
    pub bg: &'static str,
    /// Text color.
    pub fg: &'static str,
}

impl Variant {
    /// Parse a variant name. Returns `None` for out-of-domain input; callers
    /// fall back to [`Variant::default`] - the single permitted fallthrough.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "success" => Some(Self::Success),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }

    /// Schema identifier of this variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    /// All variants, in schema order.
    pub const fn all() -> &'static [Variant] {
        &[Self::Primary, Self::Secondary, Self::Success, Self::Danger]
    }

    /// Colors for this variant.
    pub const fn style(self) -> VariantStyle {
        match self {
            Self::Primary => VariantStyle {
                bg: PRIMARY,
                fg: "white",
            },
            Self::Secondary => VariantStyle {
                bg: "#6c757d",
                fg: "white",
            },
            Self::Success => VariantStyle {
                bg: "#28a745",
                fg: "white",
            },
            Self::Danger => VariantStyle {
                bg: "#dc3545",
                fg: "white",
            },
        }
    }
}

// =============================================================================
// Button sizes
// =============================================================================

/// Button size steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Parse a size name. Returns `None` for out-of-domain input; callers
    /// fall back to [`ButtonSize::default`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Schema identifier of this size.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// All sizes, in schema order.
    pub const fn all() -> &'static [ButtonSize] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    /// Padding for this size.
    pub const fn padding(self) -> &'static str {
        match self {
            Self::Small => "8px 16px",
            Self::Medium => "12px 24px",
            Self::Large => "16px 32px",
        }
    }

    /// Font size for this size.
    pub const fn font_size(self) -> &'static str {
        match self {
            Self::Small => "14px",
            Self::Medium => "16px",
            Self::Large => "18px",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_name() {
        assert_eq!(Variant::from_name("primary"), Some(Variant::Primary));
        assert_eq!(Variant::from_name("danger"), Some(Variant::Danger));
        assert_eq!(Variant::from_name("ghost"), None);
        assert_eq!(Variant::from_name(""), None);
    }

    #[test]
    fn test_variant_name_round_trip() {
        for &variant in Variant::all() {
            assert_eq!(Variant::from_name(variant.name()), Some(variant));
        }
    }

    #[test]
    fn test_variant_styles_distinct() {
        let backgrounds: Vec<_> = Variant::all().iter().map(|v| v.style().bg).collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_size_tables() {
        assert_eq!(ButtonSize::Small.padding(), "8px 16px");
        assert_eq!(ButtonSize::Large.font_size(), "18px");
        for &size in ButtonSize::all() {
            assert_eq!(ButtonSize::from_name(size.name()), Some(size));
        }
        assert_eq!(ButtonSize::from_name("huge"), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Variant::default(), Variant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
    }
}
