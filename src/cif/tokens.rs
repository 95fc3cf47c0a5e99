//! Token span and category types.
//!
//! A token is a classified contiguous byte range of the input. Spans carry a
//! start offset and a length (never an end offset) and are flattened to
//! `[start, length, category]` integer triples on the wire, which is what an
//! embedding host receives from [`crate::cif::tokenize`].

use serde::{Deserialize, Serialize};

/// Classification of a token span.
///
/// The set is closed and each variant has a fixed wire code. Code `0` is
/// reserved for "not instrumented" and never appears in output; the recorder
/// simply drops matches that have no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Structural keyword: `data_`, `loop_`, `global_`, `save_`, `stop_`.
    Keyword = 1,
    /// Item tag or loop-header tag, e.g. `_cell.length_a`.
    Tag = 2,
    /// Quoted string or semicolon text field. May span lines or contain
    /// embedded delimiters, so a renderer must honor the full span.
    ComplexValue = 3,
    /// Comment, `#` to the end of the line.
    Comment = 4,
    /// Bare scalar: numbers, bare words, and the `.` / `?` placeholders.
    /// Guaranteed single-line and delimiter-free, so a renderer can treat it
    /// as plain text.
    SimpleValue = 5,
}

/// All categories that can actually be emitted, in wire-code order.
pub const TOKEN_CATEGORIES: &[TokenCategory] = &[
    TokenCategory::Keyword,
    TokenCategory::Tag,
    TokenCategory::ComplexValue,
    TokenCategory::Comment,
    TokenCategory::SimpleValue,
];

impl TokenCategory {
    /// The fixed wire code of this category.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Decode a wire code. `0` is reserved and decodes to `None`.
    pub fn from_code(code: u32) -> Option<TokenCategory> {
        match code {
            1 => Some(TokenCategory::Keyword),
            2 => Some(TokenCategory::Tag),
            3 => Some(TokenCategory::ComplexValue),
            4 => Some(TokenCategory::Comment),
            5 => Some(TokenCategory::SimpleValue),
            _ => None,
        }
    }

    /// Returns the highlight scope string for this category.
    ///
    /// We use standard editor scope names so spans can be fed directly into
    /// an editor token legend or a terminal theme:
    /// - Keyword → "keyword" (block/loop/frame markers)
    /// - Tag → "property" (tags name fields, like object properties)
    /// - ComplexValue → "string" (quoted and multi-line text)
    /// - Comment → "comment"
    /// - SimpleValue → "number" (bare scalars are mostly numeric in mmCIF)
    pub fn scope_name(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Tag => "property",
            TokenCategory::ComplexValue => "string",
            TokenCategory::Comment => "comment",
            TokenCategory::SimpleValue => "number",
        }
    }

    /// Check if this category marks a value (simple or complex).
    pub fn is_value(self) -> bool {
        matches!(self, TokenCategory::SimpleValue | TokenCategory::ComplexValue)
    }
}

/// A classified byte range of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    /// Byte offset of the first byte of the matched lexical unit.
    pub start: u32,
    /// Byte count of the match, always positive.
    pub length: u32,
    pub category: TokenCategory,
}

impl TokenSpan {
    /// One past the last byte of the span.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    /// Decode a flattened `[start, length, category, ...]` sequence.
    ///
    /// Triples with a reserved or unknown category code are skipped, as is a
    /// trailing partial triple; [`crate::cif::tokenize`] produces neither.
    pub fn from_flat(flat: &[u32]) -> Vec<TokenSpan> {
        flat.chunks_exact(3)
            .filter_map(|triple| {
                TokenCategory::from_code(triple[2]).map(|category| TokenSpan {
                    start: triple[0],
                    length: triple[1],
                    category,
                })
            })
            .collect()
    }
}
