//! Placeholder substitution
//!
//! A single-pass scan over the `{{name}}` syntax. A placeholder with no
//! matching key is left verbatim by design: partially-configured templates
//! still render, and the surrounding system can spot the leftover braces.
//! Substituted values are emitted as-is and never re-scanned, so there is no
//! nested templating.

use std::collections::HashMap;

/// Replace every `{{key}}` whose key is present in `vars`.
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match vars.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        // Unmatched placeholder passes through verbatim.
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                // Dangling opener, emit the tail untouched.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_basic_substitution() {
        let rendered = render_template(
            "Hello {{name}}, welcome to {{companyName}}.",
            &vars(&[("name", "Sam"), ("companyName", "Acme")]),
        );
        assert_eq!(rendered, "Hello Sam, welcome to Acme.");
    }

    #[test]
    fn test_unmatched_placeholder_passes_through() {
        let rendered = render_template("Hello {{name}}, your order {{orderId}}.", &vars(&[("name", "Sam")]));
        assert_eq!(rendered, "Hello Sam, your order {{orderId}}.");
    }

    #[test]
    fn test_empty_value_substitutes() {
        let rendered = render_template("A{{gap}}B", &vars(&[("gap", "")]));
        assert_eq!(rendered, "AB");
    }

    #[test]
    fn test_repeated_placeholder() {
        let rendered = render_template("{{x}} and {{x}}", &vars(&[("x", "1")]));
        assert_eq!(rendered, "1 and 1");
    }

    #[test]
    fn test_value_is_not_rescanned() {
        let rendered = render_template("{{a}}", &vars(&[("a", "{{b}}"), ("b", "nope")]));
        assert_eq!(rendered, "{{b}}");
    }

    #[test]
    fn test_dangling_opener() {
        let rendered = render_template("truncated {{name", &vars(&[("name", "Sam")]));
        assert_eq!(rendered, "truncated {{name");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(render_template("plain text", &vars(&[])), "plain text");
    }
}
