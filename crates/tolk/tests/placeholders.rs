//! Integration tests for the `[[name|...]]` placeholder scanner.

use tolk::{Placeholder, parse_placeholders};

fn placeholder(matched: &str, arguments: &[&str]) -> Placeholder {
    Placeholder {
        matched: matched.to_string(),
        arguments: arguments.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn finds_tokens() {
    let cases: Vec<(&str, Vec<Placeholder>)> = vec![
        ("", vec![]),
        ("xxx [[etst]]", vec![]),
        ("xxx", vec![]),
        ("xxx [[test]]", vec![placeholder("[[test]]", &[])]),
        ("xxx [[test]] xxx", vec![placeholder("[[test]]", &[])]),
        ("xxx [[test|2|yyy]]", vec![placeholder("[[test|2|yyy]]", &["2", "yyy"])]),
        ("xxx [[test|2|yyy]] xxx", vec![placeholder("[[test|2|yyy]]", &["2", "yyy"])]),
        (
            "xxx [[test]] [[test]]",
            vec![placeholder("[[test]]", &[]), placeholder("[[test]]", &[])],
        ),
        (
            "xxx [[test]] [[test]] xxx",
            vec![placeholder("[[test]]", &[]), placeholder("[[test]]", &[])],
        ),
        ("xxx [[test|2]][[test2|4]]", vec![placeholder("[[test|2]]", &["2"])]),
        (
            "xxx [[test|2|yyy]] xx [test2|4]]",
            vec![placeholder("[[test|2|yyy]]", &["2", "yyy"])],
        ),
        ("[[test|2|yyy]][test2|4]]", vec![placeholder("[[test|2|yyy]]", &["2", "yyy"])]),
        ("[[test]][test2|4]]", vec![placeholder("[[test]]", &[])]),
        (
            "[[test]][[test]]",
            vec![placeholder("[[test]]", &[]), placeholder("[[test]]", &[])],
        ),
        ("[[test]]", vec![placeholder("[[test]]", &[])]),
        ("xxx [[test]][[TEST]]", vec![placeholder("[[test]]", &[])]),
    ];

    for (text, expected) in cases {
        assert_eq!(parse_placeholders(text, "test"), expected, "scanning {text:?}");
    }
}

#[test]
fn empty_argument_section_yields_one_empty_argument() {
    assert_eq!(
        parse_placeholders("[[test|]]", "test"),
        [placeholder("[[test|]]", &[""])]
    );
}

#[test]
fn arguments_do_not_span_lines() {
    assert!(parse_placeholders("[[test|a\nb]]", "test").is_empty());
    assert!(parse_placeholders("[[test|a\u{2028}b]]", "test").is_empty());
    assert_eq!(
        parse_placeholders("[[test|a\n[[test|b]]", "test"),
        [placeholder("[[test|b]]", &["b"])]
    );
}

#[test]
fn name_is_matched_literally() {
    assert_eq!(parse_placeholders("[[t.st]]", "t.st").len(), 1);
    assert!(parse_placeholders("[[test]]", "t.st").is_empty());
}

#[test]
fn non_ascii_text_is_scanned() {
    assert_eq!(
        parse_placeholders("Prix : [[currency|12,5|€]] ✓", "currency"),
        [placeholder("[[currency|12,5|€]]", &["12,5", "€"])]
    );
}
