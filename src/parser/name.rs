//! Lexical predicates shared by the readers and the canonical renderer.

/// Characters a bare literal inside a concatenation may not contain.
pub const ELEMENT_FORBIDDEN: &[char] = &['#', '$', ':', '[', ']', '!', '"', '\t'];

/// Characters a bare literal on a case line may not contain once its trailing
/// comment has been removed.
pub const CASE_FORBIDDEN: &[char] = &['$', ':', '[', ']', '!', '"', '\t'];

/// Check whether a string is a valid name: `[a-z][a-z0-9-]*`.
///
/// Used for header field names, form tags and tag references.
pub fn is_name(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Check whether `s` contains any of `forbidden` or a digit.
///
/// Any Unicode numeric character counts as a digit (`7`, `²`, `٣`).
pub fn has_forbidden(s: &str, forbidden: &[char]) -> bool {
    s.chars().any(|c| forbidden.contains(&c) || c.is_numeric())
}

/// Remove a trailing `#` comment.
pub fn strip_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) => &s[..pos],
        None => s,
    }
}

/// Whether a line is blank (empty or whitespace only).
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether a line is a comment line (`#` after leading spaces).
pub fn is_comment(line: &str) -> bool {
    line.trim_start_matches(' ').starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_name_valid() {
        assert!(is_name("a"));
        assert!(is_name("name-tag"));
        assert!(is_name("x9"));
        assert!(is_name("a-1-b-"));
    }

    #[test]
    fn test_is_name_invalid() {
        assert!(!is_name(""));
        assert!(!is_name("1abc"));
        assert!(!is_name("-abc"));
        assert!(!is_name("Abc"));
        assert!(!is_name("aBc"));
        assert!(!is_name("a b"));
        assert!(!is_name("a_b"));
        assert!(!is_name("café"));
    }

    #[test]
    fn test_has_forbidden() {
        assert!(has_forbidden("a:b", CASE_FORBIDDEN));
        assert!(has_forbidden("room 101", CASE_FORBIDDEN));
        assert!(has_forbidden("tab\there", CASE_FORBIDDEN));
        assert!(!has_forbidden("hello world", CASE_FORBIDDEN));
        assert!(!has_forbidden("a#b", CASE_FORBIDDEN));
        assert!(has_forbidden("a#b", ELEMENT_FORBIDDEN));
        assert!(has_forbidden("x²", CASE_FORBIDDEN));
        assert!(!has_forbidden("Zoë", CASE_FORBIDDEN));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("value # note"), "value ");
        assert_eq!(strip_comment("# all comment"), "");
        assert_eq!(strip_comment("no comment"), "no comment");
    }

    #[test]
    fn test_line_classes() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank("  a"));
        assert!(is_comment("   # indented comment"));
        assert!(!is_comment("\t# tab is not an indent"));
    }
}
