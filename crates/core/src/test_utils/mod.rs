//! Testing utilities.

#![allow(missing_docs)]

use crate::{IntegerEnum, Overrides, StringEnum, Tag, Value};

/// Tags of the string-backed order status fixture.
pub const STATUS_TAGS: [&str; 3] = ["open", "closed", "paid"];

/// Pairs of the integer-backed order status fixture.
pub const STATUS_PAIRS: [(&str, i64); 2] = [("open", 1), ("closed", 2)];

/// Legacy spelling accepted by [legacy_status].
pub const LEGACY_ALIAS: &str = "legacy";

/// `status` as a string-backed enum over [STATUS_TAGS].
pub fn string_status() -> StringEnum {
    StringEnum::build("status", STATUS_TAGS).unwrap()
}

/// `status` as an integer-backed enum over [STATUS_PAIRS].
pub fn integer_status() -> IntegerEnum {
    IntegerEnum::build("status", STATUS_PAIRS).unwrap()
}

/// A string-backed enum over `val_1`/`val_2` that accepts [LEGACY_ALIAS] as `val_1`.
pub fn legacy_status() -> StringEnum {
    StringEnum::build_with(
        "legacy_status",
        ["val_1", "val_2"],
        Overrides::new().with_alias(LEGACY_ALIAS, "val_1"),
    )
    .unwrap()
}

/// A string-backed enum over `n` generated tags, `value_0..value_{n-1}`.
pub fn generated_strings(n: usize) -> StringEnum {
    StringEnum::build("generated", (0..n).map(|i| format!("value_{}", i))).unwrap()
}

/// An integer-backed enum over `n` generated tags with codes `0..n`.
pub fn generated_integers(n: usize) -> IntegerEnum {
    IntegerEnum::build("generated", (0..n).map(|i| (format!("value_{}", i), i as i64))).unwrap()
}

/// Every representation of a declared value: its tag, its string and, if given, its code.
pub fn representations(tag: &Tag, code: Option<i64>) -> Vec<Value> {
    let mut out = vec![Value::Tag(tag.clone()), Value::Str(tag.to_string())];
    out.extend(code.map(Value::Int));
    out
}
