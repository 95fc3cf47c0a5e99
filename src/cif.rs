//! CIF tokenization: grammar engine, token recorder, and entry points.
//!
//! The module is split the way the data flows:
//! 1. [`grammar`] walks the input and reports each committed rule match to a
//!    [`grammar::MatchSink`], then reports whether the scan ran to completion.
//! 2. [`recorder`] implements the sink: a static rule-to-category table
//!    decides which matches become tokens and with which category.
//! 3. [`tokenizer`] wires the two together and fixes the partial-result
//!    policy: grammar failure never reaches the caller.

pub mod grammar;
pub mod recorder;
pub mod tokenizer;
pub mod tokens;

pub use tokenizer::{token_spans, tokenize};
pub use tokens::{TokenCategory, TokenSpan};
