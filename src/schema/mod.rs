//! Declarative block schemas.
//!
//! For every [`BlockType`](crate::types::BlockType): the field specs the
//! host's property editor renders ([`fields`]) and the complete default
//! property set that seeds a newly placed block ([`default_props`]).
//! Both are exhaustive matches over the closed block-type enum.

pub mod defaults;
mod field;
mod fields;

pub use defaults::default_props;
pub use field::{FieldKind, FieldOption, FieldSpec};
pub use fields::fields;
