#![doc = include_str!("../README.md")]

pub mod definition;
pub use definition::{validate, ValueSet};

mod engine;
pub use engine::{DynEnum, EnumType, IntegerEnum, StringEnum};

pub mod error;
pub use error::{ConversionError, ConversionResult, InvalidDefinition};

mod macros;

mod overrides;
pub use overrides::{CastHook, DumpHook, NormalizeHook, Overrides};

pub mod tables;

pub mod types;
pub use types::{Code, Entry, Format, StorageKind, Stored, Tag, Value, Values};

#[cfg(any(feature = "test-utils", test))]
pub mod test_utils;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
