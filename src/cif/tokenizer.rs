//! Tokenize entry points and the partial-result policy.

use crate::cif::grammar::{self, Outcome};
use crate::cif::recorder::TokenizerState;
use crate::cif::tokens::TokenSpan;

/// Tokenize `input` into flattened `[start, length, category]` triples.
///
/// The result length is always a multiple of three, triples are in ascending
/// start order, and offsets are byte offsets into `input`. This never fails:
/// on input the grammar cannot fully consume, the triples recorded up to the
/// stop point are returned as-is, a prefix of the ideal stream rather than
/// an all-or-nothing error, which is what a live-editing consumer wants.
pub fn tokenize(input: &str) -> Vec<u32> {
    let mut state = TokenizerState::with_capacity_for(input.len());
    // Both outcomes return the accumulated tokens: swallowing the early stop
    // is the contract here, not an accident. Callers that need the
    // distinction drive the engine with their own sink.
    match grammar::evaluate(input, &mut state) {
        Outcome::Completed | Outcome::StoppedEarly { .. } => state.into_tokens(),
    }
}

/// Tokenize `input` into typed spans.
///
/// Same stream as [`tokenize`], decoded for in-process consumers.
pub fn token_spans(input: &str) -> Vec<TokenSpan> {
    TokenSpan::from_flat(&tokenize(input))
}
