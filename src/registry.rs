//! Block registry - the catalog the host engine consumes.
//!
//! One [`BlockDef`] per [`BlockType`]: field schema, complete default
//! properties, renderer, and child acceptance (opaque children or named
//! slots). Built once at startup; [`Registry::build`] fails fast with a
//! [`SchemaError`] if any block's schema, defaults and renderer disagree,
//! so a mismatched catalog can never reach an editing session.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{SchemaError, SchemaResult};
use crate::props::PropMap;
use crate::render::{RenderFn, RenderInput, renderer};
use crate::schema::{self, FieldSpec};
use crate::types::BlockType;
use crate::widget::{expander, instances};

// =============================================================================
// Slot declarations
// =============================================================================

/// A named nesting point a container exposes to the host, optionally
/// restricted to a set of block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub name: &'static str,
    /// `None` accepts any block type.
    pub allowed: Option<&'static [BlockType]>,
}

const GRID_SLOT_BLOCKS: &[BlockType] = &[
    BlockType::Text,
    BlockType::Button,
    BlockType::Heading,
    BlockType::Card,
];

const GRID_SLOTS: &[SlotSpec] = &[SlotSpec {
    name: "children",
    allowed: Some(GRID_SLOT_BLOCKS),
}];

const EXPANDER_SLOTS: &[SlotSpec] = &[SlotSpec {
    name: expander::BODY_SLOT,
    allowed: None,
}];

const fn slots(block: BlockType) -> &'static [SlotSpec] {
    match block {
        BlockType::GridContainer => GRID_SLOTS,
        BlockType::Expander => EXPANDER_SLOTS,
        _ => &[],
    }
}

const fn accepts_children(block: BlockType) -> bool {
    matches!(
        block,
        BlockType::Container
            | BlockType::FlexContainer
            | BlockType::SimpleContainer
            | BlockType::PositionedElement
    )
}

// =============================================================================
// BlockDef
// =============================================================================

/// Everything the host needs to edit and render one block type.
#[derive(Debug)]
pub struct BlockDef {
    pub block: BlockType,
    /// Field schema in editor display order.
    pub fields: Vec<(&'static str, FieldSpec)>,
    /// Complete default property set seeding new instances.
    pub default_props: PropMap,
    pub render: RenderFn,
    /// Whether the host passes pre-rendered children to the renderer.
    pub accepts_children: bool,
    /// Named slots the renderer emits placeholders for.
    pub slots: &'static [SlotSpec],
}

impl BlockDef {
    fn new(block: BlockType) -> Self {
        Self {
            block,
            fields: schema::fields(block),
            default_props: schema::default_props(block),
            render: renderer(block),
            accepts_children: accepts_children(block),
            slots: slots(block),
        }
    }

    /// Look up one field's spec by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, spec)| spec)
    }

    /// Look up one slot declaration by name.
    pub fn slot(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|slot| slot.name == name)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// The full block catalog, keyed by block type.
pub struct Registry {
    defs: HashMap<BlockType, BlockDef>,
}

impl Registry {
    /// Build and validate the catalog. Fails fast on the first block type
    /// whose schema, defaults and renderer disagree.
    pub fn build() -> SchemaResult<Self> {
        let mut defs = HashMap::with_capacity(BlockType::all().len());
        for &block in BlockType::all() {
            let def = BlockDef::new(block);
            validate(&def)?;
            debug!(
                block = block.name(),
                fields = def.fields.len(),
                "block type registered"
            );
            defs.insert(block, def);
        }
        info!(count = defs.len(), "block registry built");
        Ok(Self { defs })
    }

    /// Definition for a block type.
    pub fn get(&self, block: BlockType) -> Option<&BlockDef> {
        self.defs.get(&block)
    }

    /// Definition by registry identifier. Unknown names are a
    /// schema-mismatch error, never a silently blank block.
    pub fn lookup(&self, name: &str) -> SchemaResult<&BlockDef> {
        BlockType::from_name(name)
            .and_then(|block| self.defs.get(&block))
            .ok_or_else(|| SchemaError::UnknownBlockType(name.to_string()))
    }

    /// Whether `candidate` may be placed into `slot` of `container`.
    ///
    /// False for unknown containers and undeclared slots; the host uses
    /// this to reject invalid drops.
    pub fn can_place(&self, container: BlockType, slot: &str, candidate: BlockType) -> bool {
        let Some(def) = self.defs.get(&container) else {
            return false;
        };
        match def.slot(slot) {
            Some(spec) => spec
                .allowed
                .is_none_or(|allowed| allowed.contains(&candidate)),
            None => false,
        }
    }

    /// Definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockDef> {
        BlockType::all().iter().filter_map(|block| self.defs.get(block))
    }

    /// Number of registered block types.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate(def: &BlockDef) -> SchemaResult<()> {
    // Every declared field needs a default inside its value domain.
    for (name, spec) in &def.fields {
        let name = *name;
        let Some(default) = def.default_props.get(name) else {
            warn!(block = def.block.name(), field = name, "field has no default value");
            return Err(SchemaError::MissingDefault {
                block: def.block,
                field: name.to_string(),
            });
        };
        if !spec.allows(default) {
            warn!(
                block = def.block.name(),
                field = name,
                "default value outside the declared options"
            );
            return Err(SchemaError::DefaultOutsideOptions {
                block: def.block,
                field: name.to_string(),
            });
        }
    }

    // No defaults for fields the schema does not declare.
    for key in def.default_props.keys() {
        if !def.fields.iter().any(|(name, _)| *name == key.as_str()) {
            warn!(block = def.block.name(), field = %key, "default for undeclared field");
            return Err(SchemaError::UndeclaredDefault {
                block: def.block,
                field: key.clone(),
            });
        }
    }

    // Exercise the renderer once against its own defaults, then tear down
    // any widget state the probe created.
    let probe = format!("schema-probe:{}", def.block.name());
    let input = RenderInput {
        instance: &probe,
        props: &def.default_props,
        children: &[],
    };
    let _ = (def.render)(&input);
    instances::dispose(&probe);

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_registers_full_catalog() {
        let registry = Registry::build().unwrap();
        assert_eq!(registry.len(), BlockType::all().len());
        assert!(!registry.is_empty());

        let order: Vec<_> = registry.iter().map(|def| def.block).collect();
        assert_eq!(order, BlockType::all());
    }

    #[test]
    fn test_lookup_by_identifier() {
        let registry = Registry::build().unwrap();
        let def = registry.lookup("Slider").unwrap();
        assert_eq!(def.block, BlockType::Slider);

        let err = registry.lookup("Carousel").unwrap_err();
        assert_eq!(err, SchemaError::UnknownBlockType("Carousel".to_string()));
    }

    #[test]
    fn test_every_block_renders_from_own_defaults() {
        let registry = Registry::build().unwrap();
        for def in registry.iter() {
            let instance = format!("defaults:{}", def.block.name());
            let input = RenderInput {
                instance: &instance,
                props: &def.default_props,
                children: &[],
            };
            let node = (def.render)(&input);
            assert!(
                node.as_element().is_some(),
                "{} did not render an element",
                def.block
            );
            instances::dispose(&instance);
        }
    }

    #[test]
    fn test_child_acceptance_declarations() {
        let registry = Registry::build().unwrap();

        for block in [
            BlockType::Container,
            BlockType::FlexContainer,
            BlockType::SimpleContainer,
            BlockType::PositionedElement,
        ] {
            let def = registry.get(block).unwrap();
            assert!(def.accepts_children, "{block} should accept children");
            assert!(def.slots.is_empty());
        }

        let grid = registry.get(BlockType::GridContainer).unwrap();
        assert!(!grid.accepts_children);
        assert_eq!(grid.slots.len(), 1);
        assert_eq!(grid.slots[0].name, "children");

        let leaf = registry.get(BlockType::Heading).unwrap();
        assert!(!leaf.accepts_children);
        assert!(leaf.slots.is_empty());
    }

    #[test]
    fn test_grid_slot_restriction() {
        let registry = Registry::build().unwrap();

        for allowed in [
            BlockType::Text,
            BlockType::Button,
            BlockType::Heading,
            BlockType::Card,
        ] {
            assert!(registry.can_place(BlockType::GridContainer, "children", allowed));
        }
        assert!(!registry.can_place(BlockType::GridContainer, "children", BlockType::Divider));
        assert!(!registry.can_place(BlockType::GridContainer, "children", BlockType::Slider));

        // Undeclared slot names reject everything.
        assert!(!registry.can_place(BlockType::GridContainer, "rows", BlockType::Text));
        assert!(!registry.can_place(BlockType::Heading, "children", BlockType::Text));
    }

    #[test]
    fn test_expander_slot_is_unrestricted() {
        let registry = Registry::build().unwrap();
        for &candidate in BlockType::all() {
            assert!(registry.can_place(BlockType::Expander, expander::BODY_SLOT, candidate));
        }
    }

    #[test]
    fn test_field_lookup() {
        let registry = Registry::build().unwrap();
        let def = registry.get(BlockType::Button).unwrap();
        assert!(def.field("variant").is_some());
        assert!(def.field("nonsense").is_none());
    }

    #[test]
    fn test_validate_missing_default() {
        let mut def = BlockDef::new(BlockType::Heading);
        def.default_props.remove("color");

        let err = validate(&def).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingDefault {
                block: BlockType::Heading,
                field: "color".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_undeclared_default() {
        let mut def = BlockDef::new(BlockType::Spacer);
        def.default_props.insert("width".to_string(), json!("100%"));

        let err = validate(&def).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UndeclaredDefault {
                block: BlockType::Spacer,
                field: "width".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_default_outside_options() {
        let mut def = BlockDef::new(BlockType::Heading);
        def.default_props.insert("level".to_string(), json!(9));

        let err = validate(&def).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DefaultOutsideOptions {
                block: BlockType::Heading,
                field: "level".to_string(),
            }
        );
    }
}
