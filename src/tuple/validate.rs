//! Name validation and the rename pass.

use crate::error::{DeclarationFault, Result, SwizzleError};
use std::collections::{HashMap, HashSet};

/// Strict and reserved Rust keywords.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false", "fn",
    "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "true", "try", "type", "unsafe", "use", "where", "while", "abstract",
    "become", "box", "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
];

/// Names a field may not take because tuple methods answer to them.
pub(crate) const RESERVED: &[&str] = &[
    "arrangement",
    "as_dict",
    "as_slice",
    "field_defaults",
    "field_values",
    "fields",
    "get",
    "is_empty",
    "iter",
    "len",
    "rebuild_from",
    "replace",
    "slice",
    "swizzle",
    "type_name",
    "values",
];

pub(crate) fn is_identifier(name: &str) -> bool {
    regex!(r"^[\p{L}_][\p{L}\p{N}_]*$").is_match(name)
}

pub(crate) fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Check a type name: identifier, not a keyword.
pub(crate) fn check_type_name(name: &str) -> Result<()> {
    if !is_identifier(name) {
        return Err(SwizzleError::declaration(name, DeclarationFault::NotIdentifier));
    }
    if is_keyword(name) {
        return Err(SwizzleError::declaration(name, DeclarationFault::Keyword));
    }
    Ok(())
}

/// Check field names: identifiers, no keywords, no reserved names, unique.
pub(crate) fn check_fields(fields: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in fields {
        check_type_name(name)?;
        if RESERVED.contains(&name.as_str()) {
            return Err(SwizzleError::declaration(name, DeclarationFault::Reserved));
        }
        if !seen.insert(name.as_str()) {
            return Err(SwizzleError::declaration(name, DeclarationFault::Duplicate));
        }
    }
    Ok(())
}

/// Replace invalid, reserved and duplicate names with `_<index>` and remap
/// `arrangement` through the same table.
///
/// A duplicated name keeps mapping to its first, unrenamed occurrence.
pub(crate) fn rename(fields: &mut [String], arrangement: Option<&mut Vec<String>>) {
    let mut seen = HashSet::new();
    let mut table: HashMap<String, String> = HashMap::new();
    for (index, name) in fields.iter_mut().enumerate() {
        let original = name.clone();
        if !is_identifier(name)
            || is_keyword(name)
            || RESERVED.contains(&name.as_str())
            || seen.contains(name.as_str())
        {
            *name = format!("_{index}");
        }
        seen.insert(original.clone());
        table.entry(original).or_insert_with(|| name.clone());
    }
    if let Some(arrangement) = arrangement {
        for name in arrangement.iter_mut() {
            if let Some(renamed) = table.get(name.as_str()) {
                *name = renamed.clone();
            }
        }
    }
}

/// Split a `"x y z"` / `"x, y, z"` declaration into names.
pub(crate) fn split_names(text: &str) -> Vec<String> {
    text.replace(',', " ").split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        split_names(text)
    }

    #[test]
    fn splits_on_commas_and_whitespace() {
        assert_eq!(names("x y z"), ["x", "y", "z"]);
        assert_eq!(names("x,y ,  z"), ["x", "y", "z"]);
        assert!(names("  ").is_empty());
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_0"));
        assert!(is_identifier("x1"));
        assert!(is_identifier("größe"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn rejects_bad_fields() {
        let err = check_fields(&names("fn struct x")).unwrap_err();
        assert_eq!(err, SwizzleError::declaration("fn", DeclarationFault::Keyword));

        let err = check_fields(&names("x y x")).unwrap_err();
        assert_eq!(err, SwizzleError::declaration("x", DeclarationFault::Duplicate));

        let err = check_fields(&names("x replace")).unwrap_err();
        assert_eq!(err, SwizzleError::declaration("replace", DeclarationFault::Reserved));

        assert!(check_fields(&names("x y z")).is_ok());
    }

    #[test]
    fn rename_substitutes_positions() {
        let mut fields = names("fn struct x 9lives x len");
        let mut arrangement = names("x fn struct 9lives len");
        rename(&mut fields, Some(&mut arrangement));
        assert_eq!(fields, ["_0", "_1", "x", "_3", "_4", "_5"]);
        assert_eq!(arrangement, ["x", "_0", "_1", "_3", "_5"]);
        assert!(check_fields(&fields).is_ok());
    }
}
