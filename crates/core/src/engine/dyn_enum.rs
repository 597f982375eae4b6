//! Contains the [DynEnum], an enum whose variant is chosen by the shape of its value set.

use super::{EnumType, IntegerEnum, StringEnum};
use crate::{
    definition::{validate, ValueSet},
    error::{ConversionResult, InvalidDefinition},
    overrides::Overrides,
    types::{Entry, Format, StorageKind, Stored, Tag, Value, Values},
};

/// A [DynEnum] wraps either a [StringEnum] or an [IntegerEnum], selected at construction time.
///
/// This is the type to reach for when the value set is only known at runtime, e.g. when it is
/// read from a definition file.
#[derive(Debug)]
pub enum DynEnum {
    String(StringEnum),
    Integer(IntegerEnum),
}

impl DynEnum {
    /// Build a [DynEnum] from raw entries. A leading `(tag, code)` pair selects an
    /// [IntegerEnum]; anything else selects a [StringEnum].
    pub fn build(
        name: impl Into<String>,
        entries: &[Entry],
        overrides: Overrides,
    ) -> Result<Self, InvalidDefinition> {
        let name = name.into();
        Ok(match validate(&name, entries)? {
            ValueSet::Strings(tags) => {
                DynEnum::String(StringEnum::from_tags(name, &tags, overrides))
            }
            ValueSet::Integers(pairs) => {
                DynEnum::Integer(IntegerEnum::from_pairs(name, &pairs, overrides))
            }
        })
    }

    /// Returns the inner [IntegerEnum], if integer-backed.
    pub fn as_integer(&self) -> Option<&IntegerEnum> {
        match self {
            DynEnum::Integer(inner) => Some(inner),
            DynEnum::String(_) => None,
        }
    }

    /// Returns the inner [StringEnum], if string-backed.
    pub fn as_string(&self) -> Option<&StringEnum> {
        match self {
            DynEnum::String(inner) => Some(inner),
            DynEnum::Integer(_) => None,
        }
    }

    #[inline(always)]
    fn inner(&self) -> &dyn EnumType {
        match self {
            DynEnum::String(inner) => inner,
            DynEnum::Integer(inner) => inner,
        }
    }
}

impl EnumType for DynEnum {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn storage_kind(&self) -> StorageKind {
        self.inner().storage_kind()
    }

    fn values(&self, format: Format) -> ConversionResult<Values<'_>> {
        self.inner().values(format)
    }

    fn cast(&self, input: &Value) -> ConversionResult<Tag> {
        self.inner().cast(input)
    }

    fn dump(&self, input: &Value) -> ConversionResult<Stored> {
        self.inner().dump(input)
    }

    fn equal(&self, a: &Value, b: &Value) -> bool {
        self.inner().equal(a, b)
    }
}

impl From<StringEnum> for DynEnum {
    fn from(inner: StringEnum) -> Self {
        DynEnum::String(inner)
    }
}

impl From<IntegerEnum> for DynEnum {
    fn from(inner: IntegerEnum) -> Self {
        DynEnum::Integer(inner)
    }
}

#[cfg(test)]
mod test {
    use super::DynEnum;
    use crate::{
        error::InvalidDefinition,
        overrides::Overrides,
        types::{Entry, StorageKind, Stored, Value},
        EnumType,
    };

    #[test]
    fn test_selects_variant_by_shape() {
        let strings =
            DynEnum::build("s", &[Entry::from("a"), Entry::from("b")], Overrides::new()).unwrap();
        assert_eq!(strings.storage_kind(), StorageKind::String);
        assert!(strings.as_string().is_some());
        assert_eq!(strings.dump(&Value::tag("b")).unwrap(), Stored::Str("b".into()));

        let integers =
            DynEnum::build("i", &[Entry::from(("a", 5)), Entry::from(("b", 6))], Overrides::new())
                .unwrap();
        assert_eq!(integers.storage_kind(), StorageKind::Integer);
        assert_eq!(integers.as_integer().map(|i| i.codes().to_vec()), Some(vec![5, 6]));
        assert_eq!(integers.dump(&Value::tag("b")).unwrap(), Stored::Int(6));
        assert_eq!(integers.name(), "i");
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            DynEnum::build("none", &[], Overrides::new()),
            Err(InvalidDefinition::Empty { .. })
        ));
        assert!(matches!(
            DynEnum::build("mixed", &[Entry::from("a"), Entry::Int(1)], Overrides::new()),
            Err(InvalidDefinition::BadFormat { .. })
        ));
    }
}
