//! # cifscan
//!
//! A lexical tokenizer for the CIF/mmCIF format (the exchange format for
//! crystallographic and macromolecular structure data).
//!
//! One pass over the input produces a flat stream of classified spans
//! (byte offset, byte length, category) without building a parse tree or a
//! document model. The stream is meant to drive syntax highlighting and
//! lightweight navigation, so malformed or truncated documents yield the
//! spans recognized up to the failure point instead of an error.
//!
//! ```text
//! data_4INS
//! _cell.length_a   40.96
//! _struct.title    'INSULIN'
//! ```
//!
//! tokenizes to a keyword span, tag/value span pairs, and so on. See
//! [`cif::tokenize`] for the flat integer interface and [`cif::token_spans`]
//! for the typed one.

pub mod cif;
