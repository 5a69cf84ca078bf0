//! Define identifier casing helpers used when deriving accessor names.

/// Upper-case the first Unicode scalar of `s`, leaving the remainder untouched.
///
/// ## Parameters
/// - `s`: identifier to capitalize (usually a field name).
///
/// ## Returns
/// - (`String`): `s` with its first scalar upper-cased; empty input yields an empty string.
///
/// ## Notes
/// - Uses the full Unicode upper-case mapping, so a single scalar may expand (`ß` → `SS`).
/// - No other transformation is applied: underscores, digits and later capitals are kept as-is.
///
/// ## Examples
/// ```rust
/// use pkgaccess_core::capitalize_first;
///
/// assert_eq!(capitalize_first("name"), "Name");
/// assert_eq!(capitalize_first("x"), "X");
/// assert_eq!(capitalize_first("Age"), "Age");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_single_char() {
        assert_eq!(capitalize_first("x"), "X");
    }

    #[test]
    fn test_capitalize_already_capitalized() {
        assert_eq!(capitalize_first("Name"), "Name");
        assert_eq!(capitalize_first("URL"), "URL");
    }

    #[test]
    fn test_capitalize_keeps_rest_untouched() {
        assert_eq!(capitalize_first("firstName"), "FirstName");
        assert_eq!(capitalize_first("is_active"), "Is_active");
        assert_eq!(capitalize_first("_id"), "_id");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize_first("ärger"), "Ärger");
        assert_eq!(capitalize_first("ßeta"), "SSeta");
    }
}
