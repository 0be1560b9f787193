//! `{{name}}` placeholder substitution.

use std::collections::HashMap;
use std::fmt::Write;

use crate::types::Value;

/// Replace every `{{name}}` whose name is a key of `replace` with the
/// value's display string.
///
/// Placeholders without a value are left in the text. The text is scanned
/// once from left to right, so substituted values are never scanned again.
///
/// # Example
///
/// ```
/// use tolk::{interpolate, replace};
///
/// let text = interpolate("{{greeting}} {{who}}!", &replace! { "greeting" => "Hello" });
/// assert_eq!(text, "Hello {{who}}!");
/// ```
pub fn interpolate(text: &str, replace: &HashMap<String, Value>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let inner = &rest[start + 2..];
        let found = inner
            .find("}}")
            .and_then(|end| replace.get(&inner[..end]).map(|value| (end, value)));
        match found {
            Some((end, value)) => {
                let _ = write!(out, "{value}");
                rest = &inner[end + 2..];
            }
            None => {
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace;

    #[test]
    fn replaces_every_occurrence() {
        let text = interpolate("{{what}} and {{what}}", &replace! { "what" => "World" });
        assert_eq!(text, "World and World");
    }

    #[test]
    fn extra_braces_stay_around_the_value() {
        let text = interpolate("{{{what}}}", &replace! { "what" => "World" });
        assert_eq!(text, "{World}");
    }

    #[test]
    fn unclosed_placeholder_is_kept() {
        let text = interpolate("Hello {{what", &replace! { "what" => "World" });
        assert_eq!(text, "Hello {{what");
    }

    #[test]
    fn values_are_not_rescanned() {
        let text = interpolate(
            "{{a}} {{b}}",
            &replace! { "a" => "{{b}}", "b" => "B" },
        );
        assert_eq!(text, "{{b}} B");
    }

    #[test]
    fn numbers_render_in_shortest_form() {
        let text = interpolate("{{n}} {{f}} {{g}}", &replace! { "n" => 3, "f" => 3.0, "g" => 0.25 });
        assert_eq!(text, "3 3 0.25");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        assert_eq!(interpolate("plain", &HashMap::new()), "plain");
    }
}
