//! Tests for XML response parsing

use super::*;
use crate::error::Error;

const UNREVIEWED_PAGE: &str = r#"<?xml version="1.0"?>
<api>
  <query>
    <unreviewedpages>
      <p pageid="11" ns="0" title="1-1-1" />
      <p pageid="12" ns="0" title="Foo &amp; Bar" />
    </unreviewedpages>
  </query>
</api>"#;

#[test]
fn test_parse_root_name() {
    let root = parse_root(UNREVIEWED_PAGE).unwrap();
    assert_eq!(root.name(), "api");
}

#[test]
fn test_nested_children() {
    let root = parse_root(UNREVIEWED_PAGE).unwrap();
    let listing = root.child("query").and_then(|q| q.child("unreviewedpages"));
    let listing = listing.expect("query/unreviewedpages should be present");
    assert_eq!(listing.children().len(), 2);
    assert_eq!(listing.children_named("p").count(), 2);
}

#[test]
fn test_attributes_unescaped() {
    let root = parse_root(UNREVIEWED_PAGE).unwrap();
    let pages = root.find_all("p");
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].attr("title"), Some("1-1-1"));
    assert_eq!(pages[0].attr("ns"), Some("0"));
    assert_eq!(pages[1].attr("title"), Some("Foo & Bar"));
    assert_eq!(pages[0].attr("missing"), None);
}

#[test]
fn test_find_all_document_order() {
    let xml = "<a><b n=\"1\"/><c><b n=\"2\"/></c><b n=\"3\"/></a>";
    let root = parse_root(xml).unwrap();
    let order: Vec<&str> = root
        .find_all("b")
        .iter()
        .filter_map(|b| b.attr("n"))
        .collect();
    assert_eq!(order, vec!["1", "2", "3"]);
}

#[test]
fn test_text_content() {
    let xml = "<parse><text>&lt;p&gt;rendered&lt;/p&gt;</text></parse>";
    let root = parse_root(xml).unwrap();
    assert_eq!(root.child("text").unwrap().text(), "<p>rendered</p>");
}

#[test]
fn test_cdata_content() {
    let xml = "<parse><text><![CDATA[<p>rendered</p>]]></text></parse>";
    let root = parse_root(xml).unwrap();
    assert_eq!(root.child("text").unwrap().text(), "<p>rendered</p>");
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_empty_input_fails() {
    let err = parse_root("").unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_plain_text_fails() {
    let err = parse_root("this is not xml").unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_unclosed_element_fails() {
    let err = parse_root("<api><query>").unwrap_err();
    match err {
        Error::MalformedResponse { body, .. } => assert_eq!(body, "<api><query>"),
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn test_mismatched_tags_fail() {
    let err = parse_root("<api><query></api></query>").unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_stray_closing_tag_fails() {
    let err = parse_root("</api>").unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_multiple_roots_fail() {
    let err = parse_root("<api/><api/>").unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_malformed_attaches_body() {
    let body = "<api><broken";
    match parse_root(body).unwrap_err() {
        Error::MalformedResponse { body: attached, .. } => assert_eq!(attached, body),
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}
