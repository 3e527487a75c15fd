//! Identifier sanitization for warehouse column and table names

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits camelCase words: a lowercase letter followed by an uppercase one,
/// with an optional single `A` in between (`IsAKey` -> `Is A Key`).
static CAMEL_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])(A?)([A-Z])").unwrap());

/// Normalise a raw field path into a warehouse-safe display name.
///
/// Rules, in order: split camelCase words, uppercase, strip everything
/// outside `[A-Z0-9._ ]` (turning the stripped runs into word boundaries),
/// collapse whitespace, then encode `.` nesting boundaries as `__` before
/// the remaining word boundaries become `_`.
///
/// ```
/// use templater_core::inference::normalise_key;
///
/// assert_eq!(normalise_key("thisIsAKey"), "THIS_IS_A_KEY");
/// assert_eq!(normalise_key("json.payload.and_children"), "JSON__PAYLOAD__AND_CHILDREN");
/// ```
pub fn normalise_key(raw: &str) -> String {
    let spaced = CAMEL_CASE.replace_all(raw, "$1 $2 $3");
    let upper = spaced.to_uppercase();
    let kept: String = upper
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | ' ') {
                c
            } else {
                ' '
            }
        })
        .collect();
    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");
    // Nesting boundaries must become `__` before word boundaries become `_`.
    collapsed.trim().replace('.', "__").replace(' ', "_")
}

/// Escape a logical dotted/colon path into a chain of quoted identifiers
/// suitable for nested field access in generated SQL.
///
/// Applied at render time only; stored paths stay logical so repeated
/// escaping cannot double-quote.
///
/// ```
/// use templater_core::inference::escape_path;
///
/// assert_eq!(
///     escape_path(r#"V:attributes."available_in""#),
///     r#""V":"attributes"."available_in""#
/// );
/// ```
pub fn escape_path(path: &str) -> String {
    let stripped = path.replace('"', "");
    let quoted = stripped.replace(':', "\":\"").replace('.', "\".\"");
    format!("\"{quoted}\"")
}

/// Derive a sanitized table name from a source path: basename, extension
/// stripped, uppercased, reduced to alphanumerics and underscores.
pub fn clean_table_name(source: &str) -> String {
    let base = Path::new(source)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(source);
    base.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_uppercases() {
        assert_eq!(normalise_key("thisisakey"), "THISISAKEY");
    }

    #[test]
    fn test_normalise_spaces_to_underscores() {
        assert_eq!(normalise_key("this is a key"), "THIS_IS_A_KEY");
    }

    #[test]
    fn test_normalise_strips_symbols() {
        assert_eq!(normalise_key("this%^@is``a()*key"), "THIS_IS_A_KEY");
    }

    #[test]
    fn test_normalise_dots_become_double_underscores() {
        assert_eq!(
            normalise_key("json.payload.and_children"),
            "JSON__PAYLOAD__AND_CHILDREN"
        );
    }

    #[test]
    fn test_normalise_trims_surrounding_space() {
        assert_eq!(normalise_key("       THISISAKEY          "), "THISISAKEY");
    }

    #[test]
    fn test_normalise_parentheses_are_word_boundaries() {
        assert_eq!(normalise_key("(THIS)IS(A)KEY"), "THIS_IS_A_KEY");
    }

    #[test]
    fn test_normalise_splits_camel_case() {
        assert_eq!(normalise_key("thisIsAKey"), "THIS_IS_A_KEY");
    }

    #[test]
    fn test_normalise_empty_after_strip() {
        assert_eq!(normalise_key("%^@*"), "");
    }

    #[test]
    fn test_escape_path_quotes_each_segment() {
        assert_eq!(
            escape_path(r#"V:attributes."available_in""#),
            r#""V":"attributes"."available_in""#
        );
    }

    #[test]
    fn test_escape_path_plain_identifier() {
        assert_eq!(escape_path("PathToEscape"), "\"PathToEscape\"");
    }

    #[test]
    fn test_clean_table_name_from_path() {
        assert_eq!(clean_table_name("some/file/path/table_NamE@.csv"), "TABLE_NAME");
    }

    #[test]
    fn test_clean_table_name_strips_json_extension() {
        assert_eq!(clean_table_name("events.json"), "EVENTS");
    }
}
