//! Scenario tests for the CIF tokenizer
//!
//! Each case feeds a small document through the tokenizer and checks the
//! emitted category sequence, with exact spans asserted for the anchor
//! scenarios. Malformed documents are regular cases here, not error cases:
//! the tokenizer must return the recognized prefix and never fail.

use cifscan::cif::TokenCategory::{Comment, ComplexValue, Keyword, SimpleValue, Tag};
use cifscan::cif::{token_spans, tokenize, TokenCategory, TokenSpan};
use rstest::rstest;

fn categories(input: &str) -> Vec<TokenCategory> {
    token_spans(input).iter().map(|span| span.category).collect()
}

#[rstest]
#[case::keyword_tag_value("data_test\n_cell.length_a 10.5\n", vec![Keyword, Tag, SimpleValue])]
#[case::quoted_value("_name 'a value with spaces'", vec![Tag, ComplexValue])]
#[case::comment_then_item("# this is a comment\n_tag val", vec![Comment, Tag, SimpleValue])]
#[case::placeholders("data_x\n_a .\n_b ?\n", vec![Keyword, Tag, SimpleValue, Tag, SimpleValue])]
#[case::loop_block("data_x\nloop_\n_a\n_b\n1 2\n", vec![Keyword, Keyword, Tag, Tag, SimpleValue, SimpleValue])]
#[case::double_quoted("_t \"hello there\"", vec![Tag, ComplexValue])]
#[case::text_field("_t\n;\nmulti\nline\n;\n", vec![Tag, ComplexValue])]
#[case::upper_case_keywords("DATA_X\nLOOP_\n_a\n1\n", vec![Keyword, Keyword, Tag, SimpleValue])]
#[case::crlf_line_breaks("data_x\r\n_a 1\r\n", vec![Keyword, Tag, SimpleValue])]
#[case::global_and_stop("global_\n_a 1\nstop_", vec![Keyword, Tag, SimpleValue, Keyword])]
#[case::save_frame("save_one\n_a 1\nsave_", vec![Keyword, Tag, SimpleValue, Keyword])]
#[case::negative_number("_a -8.907", vec![Tag, SimpleValue])]
#[case::semicolon_mid_line_is_plain_value("_t a;b", vec![Tag, SimpleValue])]
#[case::unterminated_quote("_tag 'unterminated", vec![Tag])]
#[case::unterminated_text_field("_a 1\n;\nnever closed", vec![Tag, SimpleValue])]
#[case::truncated_loop_keyword("loop_x", vec![Keyword])]
#[case::heading_without_name("data_ _tag", vec![Keyword])]
#[case::comment_at_eof("# only", vec![Comment])]
fn test_category_sequences(#[case] input: &str, #[case] expected: Vec<TokenCategory>) {
    assert_eq!(categories(input), expected);
}

#[rstest]
#[case::empty("")]
#[case::blank_only("   \n\t\r\n  ")]
#[case::immediately_invalid("$frame")]
fn test_inputs_with_no_tokens(#[case] input: &str) {
    assert!(tokenize(input).is_empty());
}

#[test]
fn test_keyword_tag_value_spans() {
    // the keyword span covers `data_` only; the block name is structural
    assert_eq!(
        token_spans("data_test\n_cell.length_a 10.5\n"),
        vec![
            TokenSpan {
                start: 0,
                length: 5,
                category: Keyword
            },
            TokenSpan {
                start: 10,
                length: 14,
                category: Tag
            },
            TokenSpan {
                start: 25,
                length: 4,
                category: SimpleValue
            },
        ]
    );
}

#[test]
fn test_quoted_span_covers_both_quote_characters() {
    let spans = token_spans("_name 'a value with spaces'");
    assert_eq!(spans[1].start, 6);
    assert_eq!(spans[1].length, 21);
    assert_eq!(spans[1].category, ComplexValue);
}

#[test]
fn test_comment_span_excludes_line_break() {
    let spans = token_spans("# this is a comment\n_tag val");
    assert_eq!(
        spans,
        vec![
            TokenSpan {
                start: 0,
                length: 19,
                category: Comment
            },
            TokenSpan {
                start: 20,
                length: 4,
                category: Tag
            },
            TokenSpan {
                start: 25,
                length: 3,
                category: SimpleValue
            },
        ]
    );
}

#[test]
fn test_text_field_span_covers_both_delimiters() {
    let spans = token_spans("_t\n;\nabc\n;\n");
    assert_eq!(
        spans[1],
        TokenSpan {
            start: 3,
            length: 7,
            category: ComplexValue
        }
    );
}

#[test]
fn test_flat_stream_matches_typed_view() {
    let input = "data_a\nloop_\n_x\n_y\n1 'two words'\n# done\n";
    let flat = tokenize(input);
    assert_eq!(flat.len() % 3, 0);
    let spans = token_spans(input);
    assert_eq!(spans.len() * 3, flat.len());
    for (index, span) in spans.iter().enumerate() {
        assert_eq!(flat[index * 3], span.start);
        assert_eq!(flat[index * 3 + 1], span.length);
        assert_eq!(flat[index * 3 + 2], span.category.code());
    }
}

#[test]
fn test_unterminated_quote_keeps_everything_before_it() {
    let spans = token_spans("data_x\n_name 'oops");
    assert_eq!(
        spans.iter().map(|s| s.category).collect::<Vec<_>>(),
        vec![Keyword, Tag]
    );
    // nothing partial is emitted for the open quote itself
    assert_eq!(spans.last().map(|s| s.end()), Some(12));
}
