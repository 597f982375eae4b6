//! Contains the lookup tables derived from a validated [ValueSet].

use crate::{
    definition::ValueSet,
    types::{Code, Tag},
};
use rustc_hash::FxHashMap;

/// The [Tables] shared by every enum: the ordered tags and strings plus the tag <-> string
/// lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    /// Declared tags, in declaration order.
    pub tags: Vec<Tag>,
    /// String forms of `tags`, index for index.
    pub strings: Vec<String>,
    /// Map of tag -> string form.
    pub tag_to_string: FxHashMap<Tag, String>,
    /// Map of string form -> tag.
    pub string_to_tag: FxHashMap<String, Tag>,
}

/// The [CodeTables] held only by integer-backed enums.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTables {
    /// Declared codes, in declaration order.
    pub codes: Vec<Code>,
    /// Map of tag -> code.
    pub tag_to_code: FxHashMap<Tag, Code>,
    /// Map of code -> tag.
    pub code_to_tag: FxHashMap<Code, Tag>,
    /// Map of string form -> code, so strings dump without a detour through the tag.
    pub string_to_code: FxHashMap<String, Code>,
}

impl Tables {
    /// Returns `true` if the tag is declared.
    #[inline(always)]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tag_to_string.contains_key(tag)
    }

    /// Looks up the tag whose string form is `s`.
    #[inline(always)]
    pub fn tag_of(&self, s: &str) -> Option<&Tag> {
        self.string_to_tag.get(s)
    }

    /// Looks up the string form of `tag`.
    #[inline(always)]
    pub fn string_of(&self, tag: &Tag) -> Option<&String> {
        self.tag_to_string.get(tag)
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            tags: Vec::with_capacity(n),
            strings: Vec::with_capacity(n),
            tag_to_string: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            string_to_tag: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    fn insert(&mut self, tag: &Tag) -> String {
        let s = stringify(tag);
        self.tags.push(tag.clone());
        self.strings.push(s.clone());
        self.tag_to_string.insert(tag.clone(), s.clone());
        self.string_to_tag.insert(s.clone(), tag.clone());
        s
    }
}

impl CodeTables {
    fn with_capacity(n: usize) -> Self {
        Self {
            codes: Vec::with_capacity(n),
            tag_to_code: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            code_to_tag: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            string_to_code: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }
}

/// The string form of a tag.
#[inline(always)]
pub fn stringify(tag: &Tag) -> String {
    tag.as_str().to_string()
}

/// Build the lookup tables for a validated [ValueSet] in a single pass.
///
/// ### Returns
/// - The shared [Tables], and [CodeTables] if the value set is integer-backed.
pub fn build(value_set: &ValueSet) -> (Tables, Option<CodeTables>) {
    match value_set {
        ValueSet::Strings(tags) => (build_strings(tags), None),
        ValueSet::Integers(pairs) => {
            let (tables, codes) = build_integers(pairs);
            (tables, Some(codes))
        }
    }
}

/// Build the [Tables] for a string-backed value set.
pub fn build_strings(tags: &[Tag]) -> Tables {
    let mut tables = Tables::with_capacity(tags.len());
    tags.iter().for_each(|tag| {
        tables.insert(tag);
    });
    tables
}

/// Build the [Tables] and [CodeTables] for an integer-backed value set.
pub fn build_integers(pairs: &[(Tag, Code)]) -> (Tables, CodeTables) {
    let mut tables = Tables::with_capacity(pairs.len());
    let mut codes = CodeTables::with_capacity(pairs.len());
    for (tag, code) in pairs.iter() {
        let s = tables.insert(tag);
        codes.codes.push(*code);
        codes.tag_to_code.insert(tag.clone(), *code);
        codes.code_to_tag.insert(*code, tag.clone());
        codes.string_to_code.insert(s, *code);
    }
    (tables, codes)
}
