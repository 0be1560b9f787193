//! Plugin placeholder parser using winnow.
//!
//! Finds `[[name]]` and `[[name|arg1|arg2]]` tokens in translated text. The
//! argument section ends at the first `]]` and never crosses a line break.

use winnow::combinator::{delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::{literal, take_until};

/// Characters that end a line.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// One `[[name|...]]` token found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The full token, brackets included, e.g. `"[[number|3.5|2]]"`.
    pub matched: String,

    /// The `|`-separated arguments, e.g. `["3.5", "2"]`.
    ///
    /// Empty for `[[name]]`; `[[name|]]` has a single empty argument.
    pub arguments: Vec<String>,
}

/// Find every `name` token in `text`, left to right.
///
/// Matching is case-sensitive and tokens do not overlap. Arguments are split
/// on `|` with no escaping.
///
/// # Example
///
/// ```
/// use tolk::parse_placeholders;
///
/// let found = parse_placeholders("Total: [[currency|12.5|EUR]] ([[currency]])", "currency");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].matched, "[[currency|12.5|EUR]]");
/// assert_eq!(found[0].arguments, ["12.5", "EUR"]);
/// assert!(found[1].arguments.is_empty());
/// ```
pub fn parse_placeholders(text: &str, name: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    let mut offset = 0;
    while let Some(start) = text[offset..].find("[[") {
        let begin = offset + start;
        let mut remaining = &text[begin..];
        match token(&mut remaining, name) {
            Ok(arguments) => {
                let end = text.len() - remaining.len();
                found.push(Placeholder {
                    matched: text[begin..end].to_string(),
                    arguments: arguments
                        .map(|args| args.split('|').map(str::to_string).collect())
                        .unwrap_or_default(),
                });
                offset = end;
            }
            Err(_) => offset = begin + 1,
        }
    }
    found
}

/// Parse one token at the start of `input`, returning its raw argument text.
fn token<'i>(input: &mut &'i str, name: &str) -> ModalResult<Option<&'i str>> {
    delimited(
        ("[[", literal(name)),
        opt(preceded('|', arguments)),
        "]]",
    )
    .parse_next(input)
}

/// Everything up to the closing brackets, on a single line.
fn arguments<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_until(0.., "]]")
        .verify(|args: &str| !args.contains(LINE_TERMINATORS))
        .parse_next(input)
}
