//! Token recorder: the category table and the match-to-triple accumulator.
//!
//! The table is the whole mapping policy: which grammar rules produce
//! tokens at all, and with which category. The recorder itself only appends;
//! it never inspects earlier tokens, never merges, and cannot fail.

use crate::cif::grammar::{MatchSink, Rule};
use crate::cif::tokens::TokenCategory;

/// Instrumented rules and the category stamped on their matches.
///
/// Rules absent from this table (block and frame names) are structural: the
/// engine still reports them, but no token is recorded. The table is data,
/// not code; adding a rule to the output means adding a row here.
pub const RULE_CATEGORIES: &[(Rule, TokenCategory)] = &[
    (Rule::DataHeading, TokenCategory::Keyword),
    (Rule::Loop, TokenCategory::Keyword),
    (Rule::Global, TokenCategory::Keyword),
    (Rule::SaveHeading, TokenCategory::Keyword),
    (Rule::Stop, TokenCategory::Keyword),
    (Rule::ItemTag, TokenCategory::Tag),
    (Rule::LoopTag, TokenCategory::Tag),
    (Rule::Unquoted, TokenCategory::SimpleValue),
    (Rule::SingleQuoted, TokenCategory::ComplexValue),
    (Rule::DoubleQuoted, TokenCategory::ComplexValue),
    (Rule::TextField, TokenCategory::ComplexValue),
    (Rule::Comment, TokenCategory::Comment),
];

/// Category for an instrumented rule, `None` for structural rules.
pub fn category_for(rule: Rule) -> Option<TokenCategory> {
    RULE_CATEGORIES
        .iter()
        .find(|(candidate, _)| *candidate == rule)
        .map(|(_, category)| *category)
}

/// Accumulator for one tokenization call.
///
/// Owns the growing flat `[start, length, category]` sequence. Created fresh
/// per call, finalized exactly once with [`TokenizerState::into_tokens`];
/// nothing persists across calls.
#[derive(Debug, Default)]
pub struct TokenizerState {
    tokens: Vec<u32>,
}

impl TokenizerState {
    /// State sized for an input of `input_len` bytes. One token per four
    /// input bytes is a rough density average for mmCIF; the hint only
    /// bounds reallocation, it is not a limit.
    pub fn with_capacity_for(input_len: usize) -> Self {
        TokenizerState {
            tokens: Vec::with_capacity(input_len / 4),
        }
    }

    pub fn tokens(&self) -> &[u32] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<u32> {
        self.tokens
    }
}

impl MatchSink for TokenizerState {
    fn rule_matched(&mut self, rule: Rule, start: usize, length: usize) {
        if let Some(category) = category_for(rule) {
            self.tokens.push(start as u32);
            self.tokens.push(length as u32);
            self.tokens.push(category.code());
        }
    }
}
