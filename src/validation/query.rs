//! Compilation of normalized queries.
//!
//! Normalized queries use the Kubernetes JSONPath field-access dialect
//! (`{.metadata.labels.app-name}`). They are translated into RFC 9535 queries
//! and handed to `serde_json_path` for evaluation:
//! - plain field names pass through as `.name`
//! - names with `-`, `/` or escaped dots (`\.`) become `['name']`
//! - bracket segments (`[0]`, `[*]`, `[1:3]`, `['x']`, `[?...]`) are copied verbatim
//! - `..` and `.*` keep their meaning

use crate::validation::error::{PathError, Result};
use serde_json::Value;
use serde_json_path::{JsonPath, NodeList};

/// A normalized query compiled for evaluation.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    json_path: JsonPath,
    rfc9535: String,
    parent: Option<JsonPath>,
}

impl CompiledQuery {
    /// Compile a `{...}` query.
    pub fn compile(query: &str) -> Result<Self> {
        let Translation {
            rfc9535,
            parent_end,
        } = translate(query).map_err(|reason| PathError::malformed(query, reason))?;
        let json_path = JsonPath::parse(&rfc9535)
            .map_err(|e| PathError::malformed(query, e.to_string()))?;
        let parent = parent_end.and_then(|end| JsonPath::parse(&rfc9535[..end]).ok());
        log::trace!("compiled '{}' as '{}'", query, rfc9535);
        Ok(Self {
            json_path,
            rfc9535,
            parent,
        })
    }

    /// The RFC 9535 form handed to the engine.
    pub fn as_rfc9535(&self) -> &str {
        &self.rfc9535
    }

    /// True when the query ends in a wildcard, slice or filter whose
    /// container exists in the target, so an empty result means "no
    /// elements" rather than "no such field".
    pub fn container_exists(&self, target: &Value) -> bool {
        self.parent.as_ref().is_some_and(|parent| {
            let nodes = parent.query(target);
            !nodes.is_empty() && nodes.iter().all(|n| n.is_array() || n.is_object())
        })
    }

    /// Run the query against a target, in document order.
    pub fn query<'v>(&self, target: &'v Value) -> NodeList<'v> {
        self.json_path.query(target)
    }
}

/// RFC 9535 text plus, when the last segment selects a variable number of
/// children (`[*]`, `.*`, slices, filters), the byte offset where that
/// segment starts.
struct Translation {
    rfc9535: String,
    parent_end: Option<usize>,
}

fn translate(query: &str) -> std::result::Result<Translation, String> {
    let body = query
        .strip_prefix('{')
        .and_then(|q| q.strip_suffix('}'))
        .ok_or_else(|| "query must be wrapped in '{' and '}'".to_string())?;

    let chars: Vec<char> = body.chars().collect();
    let mut out = String::with_capacity(body.len() + 8);
    out.push('$');
    let mut parent_end = None;

    let mut i = 0;
    while i < chars.len() {
        let start = out.len();
        match chars[i] {
            '.' => {
                let descendant = chars.get(i + 1) == Some(&'.');
                i += if descendant { 2 } else { 1 };
                parent_end = None;
                match chars.get(i) {
                    Some('*') => {
                        out.push_str(if descendant { "..*" } else { ".*" });
                        if !descendant {
                            parent_end = Some(start);
                        }
                        i += 1;
                    }
                    Some('[') if descendant => out.push_str(".."),
                    Some(_) => {
                        let (name, next) = read_field_name(&chars, i)?;
                        if descendant {
                            out.push('.');
                        }
                        push_field(&mut out, &name);
                        i = next;
                    }
                    None => return Err(format!("trailing '.' at offset {}", i - 1)),
                }
            }
            '[' => {
                let end = find_closing_bracket(&chars, i)?;
                let selector: String = chars[i + 1..end].iter().collect();
                parent_end = (!out.ends_with("..") && is_multi_selector(selector.trim()))
                    .then_some(start);
                out.extend(&chars[i..=end]);
                i = end + 1;
            }
            '{' | '}' => {
                return Err(format!(
                    "templates are not supported ('{}' at offset {})",
                    chars[i], i
                ));
            }
            c => return Err(format!("unexpected character '{}' at offset {}", c, i)),
        }
    }

    Ok(Translation {
        rfc9535: out,
        parent_end,
    })
}

/// Wildcards, slices and filters may legitimately select nothing.
fn is_multi_selector(selector: &str) -> bool {
    selector == "*"
        || selector.starts_with('?')
        || (selector.contains(':') && !selector.contains(['\'', '"']))
}

fn read_field_name(chars: &[char], start: usize) -> std::result::Result<(String, usize), String> {
    let mut name = String::new();
    let mut i = start;
    while i < chars.len() {
        match chars[i] {
            '.' | '[' => break,
            '\\' if chars.get(i + 1) == Some(&'.') => {
                name.push('.');
                i += 2;
            }
            c if c.is_alphanumeric() || matches!(c, '_' | '-' | '/') => {
                name.push(c);
                i += 1;
            }
            c => return Err(format!("unexpected character '{}' at offset {}", c, i)),
        }
    }
    if name.is_empty() {
        return Err(format!("empty field name at offset {}", start));
    }
    Ok((name, i))
}

fn push_field(out: &mut String, name: &str) {
    if is_shorthand(name) {
        out.push('.');
        out.push_str(name);
    } else {
        out.push_str("['");
        out.push_str(name);
        out.push_str("']");
    }
}

/// Names usable as RFC 9535 member-name shorthand.
fn is_shorthand(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn find_closing_bracket(chars: &[char], open: usize) -> std::result::Result<usize, String> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut i = open;
    while i < chars.len() {
        let c = chars[i];
        match quote {
            Some(q) => {
                if c == '\\' {
                    i += 1;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    Err(format!("unterminated '[' at offset {}", open))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rfc(query: &str) -> String {
        CompiledQuery::compile(query).unwrap().as_rfc9535().to_string()
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(
            rfc("{.spec.domain.resources.requests.memory}"),
            "$.spec.domain.resources.requests.memory"
        );
        assert_eq!(rfc("{}"), "$");
    }

    #[test]
    fn test_label_style_fields_are_bracketed() {
        assert_eq!(
            rfc("{.metadata.labels.kubevirt\\.io/os}"),
            "$.metadata.labels['kubevirt.io/os']"
        );
        assert_eq!(rfc("{.metadata.labels.app-name}"), "$.metadata.labels['app-name']");
        assert_eq!(rfc("{.spec.2nd}"), "$.spec['2nd']");
    }

    #[test]
    fn test_brackets_and_wildcards() {
        assert_eq!(
            rfc("{.spec.template.spec.volumes[*].name}"),
            "$.spec.template.spec.volumes[*].name"
        );
        assert_eq!(rfc("{.spec.disks[0]}"), "$.spec.disks[0]");
        assert_eq!(rfc("{.spec.*}"), "$.spec.*");
        assert_eq!(rfc("{..name}"), "$..name");
        assert_eq!(rfc("{..[0]}"), "$..[0]");
        assert_eq!(rfc("{['spec']['running']}"), "$['spec']['running']");
        assert_eq!(rfc("{.a[?@.b == ']']}"), "$.a[?@.b == ']']");
    }

    #[test]
    fn test_malformed_queries() {
        for query in [
            "{random56junk%(*$%&*()}",
            "{.spec.}",
            "{.spec..}",
            "{.spec[0}",
            "{.spec.na me}",
            "{.spec}{.status}",
            "{$.spec}",
            "{.spec[abc]}",
            ".spec",
        ] {
            let err = CompiledQuery::compile(query).unwrap_err();
            assert!(
                matches!(err, PathError::MalformedExpression { .. }),
                "query {:?} gave {:?}",
                query,
                err
            );
        }
    }

    #[test]
    fn test_container_exists() {
        let target = json!({
            "spec": { "disks": [], "labels": {}, "name": "vm", "volumes": [{ "size": 1 }] }
        });

        for query in [
            "{.spec.disks[*]}",
            "{.spec.labels.*}",
            "{.spec.disks[1:]}",
            "{.spec.volumes[?@.size > 5]}",
        ] {
            let q = CompiledQuery::compile(query).unwrap();
            assert!(q.query(&target).is_empty(), "{}", query);
            assert!(q.container_exists(&target), "{}", query);
        }

        for query in [
            "{.spec.missing[*]}",
            "{.spec.name[*]}",
            "{.spec.disks[0]}",
            "{.spec.disks}",
            "{..missing[*]}",
            "{.spec..[*]}",
            "{.spec['a:b']}",
        ] {
            let q = CompiledQuery::compile(query).unwrap();
            assert!(!q.container_exists(&target), "{}", query);
        }
    }

    #[test]
    fn test_query_order() {
        let q = CompiledQuery::compile("{.items[*].v}").unwrap();
        let value = json!({ "items": [{ "v": 3 }, { "v": 1 }, { "v": 2 }] });
        let found: Vec<&Value> = q.query(&value).all();
        assert_eq!(found, vec![&json!(3), &json!(1), &json!(2)]);
    }
}
