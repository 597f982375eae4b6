//! Persistence-facing adapter for `tagset` enums.
//!
//! A persistence layer treats an [EnumField] as an opaque column type through the
//! [StorageType] trait: it asks for the column's [tagset_core::StorageKind], loads raw stored
//! values back into tags, dumps values for writing, and compares values for change tracking.

mod builder;
pub use builder::{read_definition, EnumFieldBuilder};

mod field;
pub use field::EnumField;

pub mod types;
pub use types::{Definition, EmbedAs, StorageType};
