//! Sample-document tests for the CIF tokenizer
//!
//! These tests tokenize the sample documents under `docs/samples/` and check
//! the result against snapshots and counted expectations, to catch
//! regressions in the grammar or the category table.

use cifscan::cif::{token_spans, TokenCategory, TokenSpan};
use std::collections::HashMap;
use std::fs;

/// Helper function to read sample document content
fn read_sample_document(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read sample document")
}

/// Stable one-line-per-span rendering used for snapshots
fn render(spans: &[TokenSpan]) -> String {
    spans
        .iter()
        .map(|span| format!("{} {} {}", span.start, span.length, span.category.scope_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn category_counts(spans: &[TokenSpan]) -> HashMap<TokenCategory, usize> {
    let mut counts = HashMap::new();
    for span in spans {
        *counts.entry(span.category).or_insert(0) += 1;
    }
    counts
}

fn assert_sorted_and_in_bounds(spans: &[TokenSpan], input_len: usize) {
    let mut previous_end = 0u32;
    for span in spans {
        assert!(span.length > 0);
        assert!(span.start >= previous_end, "spans must not overlap");
        assert!((span.end() as usize) <= input_len);
        previous_end = span.end();
    }
}

#[test]
fn test_minimal_sample_tokenization() {
    let content = read_sample_document("docs/samples/minimal.cif");
    let spans = token_spans(&content);

    insta::assert_snapshot!(render(&spans), @r###"
    0 5 keyword
    13 9 property
    23 7 number
    31 13 property
    45 19 string
    "###);
}

#[test]
fn test_insulin_fragment_tokenization() {
    let content = read_sample_document("docs/samples/4ins-fragment.cif");
    let spans = token_spans(&content);

    assert_sorted_and_in_bounds(&spans, content.len());

    let counts = category_counts(&spans);
    // data_ and loop_
    assert_eq!(counts.get(&TokenCategory::Keyword), Some(&2));
    // six items, eight loop-header tags, two trailing items
    assert_eq!(counts.get(&TokenCategory::Tag), Some(&16));
    // the quoted space group and the title text field
    assert_eq!(counts.get(&TokenCategory::ComplexValue), Some(&2));
    // the leading comment plus four separator lines
    assert_eq!(counts.get(&TokenCategory::Comment), Some(&5));
    // four cell/entry values, five rows of eight, two database values
    assert_eq!(counts.get(&TokenCategory::SimpleValue), Some(&46));
}

#[test]
fn test_insulin_fragment_starts_with_comment_then_heading() {
    let content = read_sample_document("docs/samples/4ins-fragment.cif");
    let spans = token_spans(&content);

    assert_eq!(spans[0].category, TokenCategory::Comment);
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans[1].category, TokenCategory::Keyword);
    assert_eq!(spans[1].length, 5);
}

#[test]
fn test_text_field_in_fragment_spans_multiple_lines() {
    let content = read_sample_document("docs/samples/4ins-fragment.cif");
    let spans = token_spans(&content);

    let field = spans
        .iter()
        .find(|span| span.category == TokenCategory::ComplexValue && span.length > 40)
        .expect("the title text field should be present");
    let text = &content[field.start as usize..field.end() as usize];
    assert!(text.starts_with(';'));
    assert!(text.ends_with(';'));
    assert!(text.contains('\n'));
}
