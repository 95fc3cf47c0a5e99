//! The CIF lexical grammar and the engine-facing interface.
//!
//! The engine walks the input once and reports every committed rule match to
//! a [`MatchSink`]. A match is reported only after the rule has fully
//! consumed its text; tentative trials that the scanner abandons are never
//! reported, so a sink sees each lexical unit at most once, in scan order.
//!
//! Failure is not an error type: [`evaluate`] always returns an [`Outcome`],
//! and a sink keeps everything reported before a [`Outcome::StoppedEarly`].
//! Whether to surface the early stop is the caller's decision; the tokenizer
//! entry point deliberately ignores it.

mod engine;

pub use engine::evaluate;

/// Grammar rules reported to the sink.
///
/// Not every rule produces a token: `BlockName` and `FrameName` are
/// structural: the engine reports them like any other committed match, but
/// the recorder's category table has no entry for them, so they stay inert.
/// This is what keeps the output a flat span stream rather than a parse tree:
/// only the lexical rules of interest are mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The `data_` keyword of a block heading (the heading's name is a
    /// separate [`Rule::BlockName`] match).
    DataHeading,
    /// The `save_` keyword, both frame begin (named) and frame end (bare).
    SaveHeading,
    /// The `loop_` keyword.
    Loop,
    /// The `global_` keyword.
    Global,
    /// The `stop_` keyword.
    Stop,
    /// A tag at item position, e.g. `_entry.id`.
    ItemTag,
    /// A tag inside a loop header.
    LoopTag,
    /// A bare unquoted value, including the `.` and `?` placeholders.
    Unquoted,
    /// A single-quoted string, delimiters included.
    SingleQuoted,
    /// A double-quoted string, delimiters included.
    DoubleQuoted,
    /// A semicolon-delimited multi-line text field, delimiters included.
    TextField,
    /// A comment, `#` up to (not including) the line break.
    Comment,
    /// The name following `data_`. Structural, never a token.
    BlockName,
    /// The name following `save_` at frame begin. Structural, never a token.
    FrameName,
}

/// Receiver for committed rule matches.
///
/// `start` and `length` are byte offsets into the evaluated input;
/// `start + length` never exceeds the input length. The engine calls this
/// exactly once per committed match and never retroactively revokes one.
pub trait MatchSink {
    fn rule_matched(&mut self, rule: Rule, start: usize, length: usize);
}

/// Result of one full evaluation.
///
/// `StoppedEarly` means no valid continuation existed at `offset`; everything
/// reported to the sink before that point remains valid. A failure at offset
/// 0 means nothing was recognized at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    StoppedEarly { offset: usize },
}

impl Outcome {
    pub fn is_complete(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}
