//! Directive recognition and normalization.
//!
//! A directive is an annotation value of the form `jsonpath::<expr>`. The
//! expression may carry a leading `$`, which is dropped; the rest is wrapped
//! in braces to give the canonical query, e.g.
//! `jsonpath::$.spec.domain.machine.type` -> `{.spec.domain.machine.type}`.

use crate::validation::error::{PathError, Result};

/// Prefix that marks an annotation value as a path directive.
pub const DIRECTIVE_PREFIX: &str = "jsonpath::";

/// Check whether a string is a path directive.
pub fn is_directive(raw: &str) -> bool {
    raw.starts_with(DIRECTIVE_PREFIX)
}

/// Rewrite a directive into its normalized `{...}` query.
///
/// Only the prefix is checked here; whether the expression compiles is
/// decided when a [`Path`](super::Path) is built from it.
///
/// # Examples
/// - "jsonpath::$.spec.running" -> "{.spec.running}"
/// - "jsonpath::.spec.running" -> "{.spec.running}"
/// - "$.spec.running" -> `InvalidDirective`
pub fn normalize(raw: &str) -> Result<String> {
    let suffix = raw
        .strip_prefix(DIRECTIVE_PREFIX)
        .ok_or_else(|| PathError::missing_prefix(raw))?;
    let body = suffix.strip_prefix('$').unwrap_or(suffix);
    Ok(format!("{{{}}}", body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_non_directives() {
        for raw in [
            "string-literal",
            "$.spec.domain.resources.requests.memory",
            "",
            "jsonpath:.spec",
            "JSONPATH::.spec",
            " jsonpath::.spec",
        ] {
            let err = normalize(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDirective, "input: {:?}", raw);
            assert!(!is_directive(raw));
        }
    }

    #[test]
    fn test_dollar_is_optional() {
        let expected = "{.spec.domain.resources.requests.memory}";
        assert_eq!(
            normalize("jsonpath::$.spec.domain.resources.requests.memory").unwrap(),
            expected
        );
        assert_eq!(
            normalize("jsonpath::.spec.domain.resources.requests.memory").unwrap(),
            expected
        );
    }

    #[test]
    fn test_only_one_dollar_stripped() {
        assert_eq!(normalize("jsonpath::$$.a").unwrap(), "{$.a}");
        assert_eq!(normalize("jsonpath::").unwrap(), "{}");
        assert_eq!(normalize("jsonpath::$").unwrap(), "{}");
    }

    #[test]
    fn test_junk_is_still_normalized() {
        assert_eq!(
            normalize("jsonpath::random56junk%(*$%&*()").unwrap(),
            "{random56junk%(*$%&*()}"
        );
    }

    proptest! {
        #[test]
        fn prop_without_prefix_is_invalid(raw in "\\PC*") {
            prop_assume!(!raw.starts_with(DIRECTIVE_PREFIX));
            let err = normalize(&raw).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidDirective);
        }

        #[test]
        fn prop_dollar_is_inert(expr in "[.a-z\\[\\]0-9*-]{0,40}") {
            prop_assume!(!expr.starts_with('$'));
            let with = normalize(&format!("jsonpath::${}", expr)).unwrap();
            let without = normalize(&format!("jsonpath::{}", expr)).unwrap();
            prop_assert_eq!(&with, &without);
            prop_assert_eq!(with, format!("{{{}}}", expr));
        }
    }
}
