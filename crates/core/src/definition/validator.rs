//! Checks a proposed value set before any lookup table is derived from it.

use super::{bad_format, detect_kind, ValueSet};
use crate::{
    error::{InvalidDefinition, INTEGER_SHAPE, STRING_SHAPE},
    types::{Code, Entry, StorageKind, Tag},
};
use rustc_hash::FxHashSet;

/// Validate a raw value set, selecting the variant from the shape of its first entry.
///
/// ### Takes
/// - `name`: The name of the enum being defined, used in error messages.
/// - `entries`: The raw value set.
///
/// ### Returns
/// - `Ok(value_set)` if the value set is well-formed.
/// - `Err(InvalidDefinition::Empty)` if `entries` is empty.
/// - `Err(InvalidDefinition::BadFormat)` if an entry has the wrong shape, or a tag or code is
///   declared twice.
pub fn validate(name: &str, entries: &[Entry]) -> Result<ValueSet, InvalidDefinition> {
    match detect_kind(entries) {
        StorageKind::String => validate_strings(name, entries).map(ValueSet::Strings),
        StorageKind::Integer => validate_integers(name, entries).map(ValueSet::Integers),
    }
}

/// Validate a value set that must consist of bare tags only.
pub fn validate_strings(name: &str, entries: &[Entry]) -> Result<Vec<Tag>, InvalidDefinition> {
    if entries.is_empty() {
        return Err(InvalidDefinition::Empty { name: name.to_string(), expected: STRING_SHAPE });
    }

    let mut seen = FxHashSet::default();
    let tags = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Entry::Tag(tag) => {
                check_tag(name, i, tag, &mut seen, STRING_SHAPE)?;
                Ok(tag.clone())
            }
            other => Err(bad_format(
                name,
                format!("entry {} is `{}`, not a tag", i, other),
                STRING_SHAPE,
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(tags)
}

/// Validate a value set that must consist of `(tag, code)` pairs only.
pub fn validate_integers(
    name: &str,
    entries: &[Entry],
) -> Result<Vec<(Tag, Code)>, InvalidDefinition> {
    if entries.is_empty() {
        return Err(InvalidDefinition::Empty { name: name.to_string(), expected: INTEGER_SHAPE });
    }

    let mut seen_tags = FxHashSet::default();
    let mut seen_codes: FxHashSet<Code> = FxHashSet::default();
    let pairs = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Entry::Pair(tag, code) => {
                check_tag(name, i, tag, &mut seen_tags, INTEGER_SHAPE)?;
                if !seen_codes.insert(*code) {
                    return Err(bad_format(
                        name,
                        format!("code {} is declared more than once", code),
                        INTEGER_SHAPE,
                    ));
                }
                Ok((tag.clone(), *code))
            }
            other => Err(bad_format(
                name,
                format!("entry {} is `{}`, not a (tag, integer) pair", i, other),
                INTEGER_SHAPE,
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(pairs)
}

/// Checks that a tag is well-formed and has not been seen before.
fn check_tag<'a>(
    name: &str,
    index: usize,
    tag: &'a Tag,
    seen: &mut FxHashSet<&'a Tag>,
    expected: &'static str,
) -> Result<(), InvalidDefinition> {
    if !tag.is_well_formed() {
        return Err(bad_format(
            name,
            format!("entry {} has an ill-formed tag {:?}", index, tag.as_str()),
            expected,
        ));
    }
    if !seen.insert(tag) {
        return Err(bad_format(
            name,
            format!("tag :{} is declared more than once", tag),
            expected,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{validate, validate_integers, validate_strings};
    use crate::{
        definition::ValueSet,
        error::InvalidDefinition,
        types::{Entry, Tag},
    };

    fn entries<T: Into<Entry>>(items: impl IntoIterator<Item = T>) -> Vec<Entry> {
        items.into_iter().map(Into::into).collect()
    }

    #[test]
    fn test_empty() {
        assert!(matches!(validate("status", &[]), Err(InvalidDefinition::Empty { .. })));
        assert!(matches!(validate_integers("status", &[]), Err(InvalidDefinition::Empty { .. })));
    }

    #[test]
    fn test_strings() {
        let set = validate("status", &entries(["open", "closed", "paid"])).unwrap();
        assert_eq!(
            set,
            ValueSet::Strings(vec![Tag::new("open"), Tag::new("closed"), Tag::new("paid")])
        );
    }

    #[test]
    fn test_integers() {
        let set = validate("status", &entries([("open", 1), ("closed", 2)])).unwrap();
        assert_eq!(set, ValueSet::Integers(vec![(Tag::new("open"), 1), (Tag::new("closed"), 2)]));
    }

    #[test]
    fn test_mixed_shape_in_string_variant() {
        let raw = vec![Entry::from("a"), Entry::Int(1)];
        let err = validate("mixed", &raw).unwrap_err();
        assert!(matches!(err, InvalidDefinition::BadFormat { .. }));
        assert!(err.to_string().contains("not a tag"), "{}", err);
    }

    #[test]
    fn test_mixed_shape_in_integer_variant() {
        let raw = vec![Entry::from(("a", 1)), Entry::from("b")];
        assert!(matches!(validate("mixed", &raw), Err(InvalidDefinition::BadFormat { .. })));
    }

    #[test]
    fn test_duplicate_tag() {
        let err = validate("dup", &entries([("a", 1), ("a", 2)])).unwrap_err();
        assert!(matches!(err, InvalidDefinition::BadFormat { .. }));
        assert!(err.to_string().contains(":a"), "{}", err);

        let err = validate_strings("dup", &entries(["a", "b", "a"])).unwrap_err();
        assert!(matches!(err, InvalidDefinition::BadFormat { .. }));
    }

    #[test]
    fn test_duplicate_code() {
        let err = validate("dup", &entries([("a", 1), ("b", 1)])).unwrap_err();
        assert!(err.to_string().contains("code 1"), "{}", err);
    }

    #[test]
    fn test_ill_formed_tag() {
        assert!(matches!(
            validate("bad", &entries(["ok", ""])),
            Err(InvalidDefinition::BadFormat { .. })
        ));
        assert!(matches!(
            validate("bad", &entries(["tab\there"])),
            Err(InvalidDefinition::BadFormat { .. })
        ));
    }

    #[test]
    fn test_display_names_with_spaces() {
        let set = validate("workflow", &entries(["in review", "done"])).unwrap();
        assert_eq!(set, ValueSet::Strings(vec![Tag::new("in review"), Tag::new("done")]));
    }

    #[test]
    fn test_message_describes_shape() {
        let err = validate("status", &[]).unwrap_err();
        assert!(err.to_string().contains("non-empty list of unique tags"), "{}", err);
    }
}
