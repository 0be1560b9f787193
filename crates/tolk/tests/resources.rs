//! Integration tests for adding translation trees.

use insta::assert_snapshot;
use tolk::{Resource, ResourceError, TagError, Translator, resources};

fn translator() -> Translator {
    Translator::with_locale("en-US").unwrap()
}

fn dump(translator: &Translator) -> String {
    translator
        .resources()
        .iter()
        .map(|(key, text)| format!("{key}: {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// =========================================================================
// Flattening
// =========================================================================

#[test]
fn flat_tree_is_prefixed_with_tag() {
    let mut translator = translator();
    translator
        .add_resource("de", resources! {
            "my-string-one" => "My string number one",
            "myStringTwo" => "My string number two",
        })
        .unwrap();

    let store = translator.resources();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("de.my-string-one"), Some("My string number one"));
    assert_eq!(store.get("de.myStringTwo"), Some("My string number two"));
}

#[test]
fn nested_tree_is_flattened_with_dots() {
    let mut translator = translator();
    translator
        .add_resource("de", resources! {
            "myStringOne" => "My string number one",
            "my" => resources! {
                "stringTwo" => "My string number two",
                "string" => resources! { "three" => "My string number three" },
                "stringFour" => "My string number four",
            },
            "myStringFive" => "My string number five",
        })
        .unwrap();

    assert_snapshot!(dump(&translator), @r"
    de.my.string.three: My string number three
    de.my.stringFour: My string number four
    de.my.stringTwo: My string number two
    de.myStringFive: My string number five
    de.myStringOne: My string number one
    ");
}

#[test]
fn tag_is_canonicalized() {
    let mut translator = translator();
    translator.add_resource("DE-de", resources! { "x" => "y" }).unwrap();
    assert!(translator.resources().contains("de-DE.x"));
}

#[test]
fn later_resources_overwrite_earlier_ones() {
    let mut translator = translator();
    translator.add_resource("en", resources! { "a" => "1", "b" => "2" }).unwrap();
    translator.add_resource("en", resources! { "b" => "3" }).unwrap();
    assert_eq!(translator.resources().get("en.a"), Some("1"));
    assert_eq!(translator.resources().get("en.b"), Some("3"));
}

#[test]
fn text_root_adds_nothing() {
    let mut translator = translator();
    translator.add_resource("en", "just text").unwrap();
    assert!(translator.resources().is_empty());
}

// =========================================================================
// Key Validation
// =========================================================================

#[test]
fn text_keys_with_other_characters_are_rejected() {
    for key in ["string:one", "string=two", "DJJürgen", "DJ Gunther"] {
        let mut translator = translator();
        let error = translator
            .add_resource("de", resources! { key => "value" })
            .unwrap_err();
        assert_eq!(error, ResourceError::InvalidKey { key: key.to_string() });
        assert_eq!(
            error.to_string(),
            format!("only a-Z, 0-9, minus sign and underscore allowed: \"{key}\"")
        );
        assert!(translator.resources().is_empty());
    }
}

#[test]
fn text_keys_may_contain_underscore() {
    let mut translator = translator();
    translator.add_resource("de", resources! { "string_three" => "three" }).unwrap();
    assert_eq!(translator.resources().get("de.string_three"), Some("three"));
}

#[test]
fn branch_keys_with_underscore_or_space_are_rejected() {
    for key in ["string_one", "string three", "string_five"] {
        let mut translator = translator();
        let error = translator
            .add_resource("de", resources! { key => resources! { "two" => "two" } })
            .unwrap_err();
        assert_eq!(error, ResourceError::InvalidBranchKey { key: key.to_string() });
        assert_eq!(
            error.to_string(),
            format!("only a-Z, minus sign and 0-9 allowed: \"{key}\"")
        );
    }
}

#[test]
fn first_bad_key_in_document_order_is_reported() {
    let tree: Resource = serde_json::from_str(r#"{"z_a": {"x": "1"}, "a b": "2"}"#).unwrap();
    let error = translator().add_resource("de", tree).unwrap_err();
    assert_eq!(error, ResourceError::InvalidBranchKey { key: "z_a".to_string() });
}

#[test]
fn macro_trees_keep_written_order() {
    let error = translator()
        .add_resource("de", resources! { "z z" => "1", "a a" => "2" })
        .unwrap_err();
    assert_eq!(error, ResourceError::InvalidKey { key: "z z".to_string() });
}

#[test]
fn rejected_tree_leaves_store_unchanged() {
    let mut translator = translator();
    let result = translator.add_resource("de", resources! {
        "aaa" => "first",
        "zzz" => resources! { "bad key" => "value" },
    });
    assert!(result.is_err());
    assert!(translator.resources().is_empty());
}

#[test]
fn malformed_tags_are_rejected() {
    for tag in ["d:e", "e.n", "f-r", " se", "se "] {
        let mut translator = translator();
        let error = translator.add_resource(tag, resources! { "x" => "x" }).unwrap_err();
        assert!(matches!(error, ResourceError::Tag(_)), "{tag:?} should be rejected");
        assert!(error.to_string().starts_with("invalid locale tag"));
    }
}

#[test]
fn tag_error_converts_into_resource_error() {
    let error = ResourceError::from(TagError::Empty);
    assert_eq!(error, ResourceError::Tag(TagError::Empty));
}

// =========================================================================
// Deserialized Trees
// =========================================================================

#[test]
fn values_other_than_text_and_maps_are_dropped() {
    let documents = [
        r#"{"two": null}"#,
        r#"{"three": 100}"#,
        r#"{"four": 0}"#,
        r#"{"five": {"six": true}}"#,
        r#"{"seven": ["a", "b"]}"#,
    ];
    for document in documents {
        let tree: Resource = serde_json::from_str(document).unwrap();
        let mut translator = translator();
        translator.add_resource("de", tree).unwrap();
        assert!(translator.resources().is_empty(), "{document} should add nothing");
    }
}

#[test]
fn deserialized_tree_matches_macro_tree() {
    let tree: Resource =
        serde_json::from_str(r#"{"title": "Settings", "menu": {"open": "Open", "count": 2}}"#)
            .unwrap();
    assert_eq!(
        tree,
        resources! {
            "title" => "Settings",
            "menu" => resources! { "open" => "Open" },
        }
    );
}

#[test]
fn scalar_document_is_not_a_tree() {
    assert!(serde_json::from_str::<Resource>("42").is_err());
}
