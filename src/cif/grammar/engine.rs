//! Single-pass scanner for the CIF lexical grammar.
//!
//! The scanner walks raw bytes, skips blank space, and dispatches on the
//! first byte of each lexical unit. It keeps exactly two bits of context
//! beyond the cursor: whether the cursor sits at the beginning of a line
//! (semicolon text fields only open there) and whether the scan is inside a
//! loop header (tags there are loop tags, not item tags).
//!
//! Matches are reported to the sink only once fully consumed. When no rule
//! can consume the input at the cursor, the scan stops and reports the
//! offset; it never skips bytes to resynchronize.

use super::{MatchSink, Outcome, Rule};

const DATA: &[u8] = b"data_";
const SAVE: &[u8] = b"save_";
const LOOP: &[u8] = b"loop_";
const GLOBAL: &[u8] = b"global_";
const STOP: &[u8] = b"stop_";

/// Evaluate the grammar over `input`, reporting committed matches to `sink`.
///
/// Offsets handed to the sink are byte offsets into `input`.
pub fn evaluate(input: &str, sink: &mut dyn MatchSink) -> Outcome {
    Scanner::new(input.as_bytes(), sink).run()
}

/// Position where the grammar could not continue.
struct Stuck {
    offset: usize,
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    in_loop_header: bool,
    sink: &'a mut dyn MatchSink,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8], sink: &'a mut dyn MatchSink) -> Self {
        Scanner {
            bytes,
            pos: 0,
            in_loop_header: false,
            sink,
        }
    }

    fn run(mut self) -> Outcome {
        match self.scan_document() {
            Ok(()) => Outcome::Completed,
            Err(Stuck { offset }) => Outcome::StoppedEarly { offset },
        }
    }

    fn scan_document(&mut self) -> Result<(), Stuck> {
        while self.pos < self.bytes.len() {
            if is_blank(self.bytes[self.pos]) {
                self.pos += 1;
            } else {
                self.scan_unit()?;
            }
        }
        Ok(())
    }

    /// Dispatch on the first byte of a lexical unit.
    fn scan_unit(&mut self) -> Result<(), Stuck> {
        match self.bytes[self.pos] {
            b'#' => {
                self.comment();
                Ok(())
            }
            b';' if self.at_line_start() => self.text_field(),
            b'\'' => self.quoted(Rule::SingleQuoted, b'\''),
            b'"' => self.quoted(Rule::DoubleQuoted, b'"'),
            b'_' => self.tag(),
            _ => self.keyword_or_value(),
        }
    }

    fn comment(&mut self) {
        let start = self.pos;
        while self.pos < self.bytes.len() && !is_line_break(self.bytes[self.pos]) {
            self.pos += 1;
        }
        // comments are whitespace-equivalent: a loop header survives them
        self.emit(Rule::Comment, start, self.pos);
    }

    /// Text field: `;` at line start up to the next `;` at line start,
    /// both delimiters included in the span.
    fn text_field(&mut self) -> Result<(), Stuck> {
        let start = self.pos;
        let mut i = start + 1;
        while i < self.bytes.len() {
            if self.bytes[i] == b';' && is_line_break(self.bytes[i - 1]) {
                self.pos = i + 1;
                self.emit(Rule::TextField, start, self.pos);
                self.in_loop_header = false;
                return Ok(());
            }
            i += 1;
        }
        Err(Stuck { offset: start })
    }

    /// Quoted string on a single line. A delimiter byte terminates only when
    /// followed by blank space or end of input; otherwise it is content.
    fn quoted(&mut self, rule: Rule, delimiter: u8) -> Result<(), Stuck> {
        let start = self.pos;
        let mut i = start + 1;
        while i < self.bytes.len() && !is_line_break(self.bytes[i]) {
            if self.bytes[i] == delimiter && self.is_blank_or_end(i + 1) {
                self.pos = i + 1;
                self.emit(rule, start, self.pos);
                self.in_loop_header = false;
                return Ok(());
            }
            i += 1;
        }
        Err(Stuck { offset: start })
    }

    fn tag(&mut self) -> Result<(), Stuck> {
        let start = self.pos;
        let end = self.nonblank_end(start + 1);
        if end == start + 1 {
            // a lone underscore names nothing
            return Err(Stuck { offset: start });
        }
        let rule = if self.in_loop_header {
            Rule::LoopTag
        } else {
            Rule::ItemTag
        };
        self.pos = end;
        self.emit(rule, start, end);
        Ok(())
    }

    fn keyword_or_value(&mut self) -> Result<(), Stuck> {
        if self.keyword()? {
            return Ok(());
        }
        self.unquoted()
    }

    /// Try the five keywords, case-insensitively. The keyword token is
    /// committed as soon as its text is consumed; constraints on what must
    /// follow (a block name after `data_`, blank space after `loop_`) are
    /// checked afterwards, so a violated constraint stops the scan with the
    /// keyword already reported.
    fn keyword(&mut self) -> Result<bool, Stuck> {
        let start = self.pos;
        if self.starts_with_keyword(DATA) {
            self.pos = start + DATA.len();
            self.emit(Rule::DataHeading, start, self.pos);
            self.in_loop_header = false;
            let name_end = self.nonblank_end(self.pos);
            if name_end == self.pos {
                // a block heading requires a name
                return Err(Stuck { offset: self.pos });
            }
            self.emit(Rule::BlockName, self.pos, name_end);
            self.pos = name_end;
            return Ok(true);
        }
        if self.starts_with_keyword(SAVE) {
            self.pos = start + SAVE.len();
            self.emit(Rule::SaveHeading, start, self.pos);
            self.in_loop_header = false;
            let name_end = self.nonblank_end(self.pos);
            if name_end > self.pos {
                // frame begin; a bare save_ terminates a frame instead
                self.emit(Rule::FrameName, self.pos, name_end);
                self.pos = name_end;
            }
            return Ok(true);
        }
        for (keyword, rule) in [(LOOP, Rule::Loop), (GLOBAL, Rule::Global), (STOP, Rule::Stop)] {
            if self.starts_with_keyword(keyword) {
                self.pos = start + keyword.len();
                self.emit(rule, start, self.pos);
                self.in_loop_header = rule == Rule::Loop;
                if !self.is_separator_or_end(self.pos) {
                    return Err(Stuck { offset: self.pos });
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn unquoted(&mut self) -> Result<(), Stuck> {
        let start = self.pos;
        if matches!(self.bytes[start], b'$' | b'[' | b']') {
            // reserved as value-initial characters in CIF 1.1
            return Err(Stuck { offset: start });
        }
        let end = self.nonblank_end(start);
        self.pos = end;
        self.emit(Rule::Unquoted, start, end);
        self.in_loop_header = false;
        Ok(())
    }

    fn emit(&mut self, rule: Rule, start: usize, end: usize) {
        self.sink.rule_matched(rule, start, end - start);
    }

    fn at_line_start(&self) -> bool {
        self.pos == 0 || is_line_break(self.bytes[self.pos - 1])
    }

    /// End of the run of non-blank bytes starting at `from`.
    fn nonblank_end(&self, from: usize) -> usize {
        let mut i = from;
        while i < self.bytes.len() && !is_blank(self.bytes[i]) {
            i += 1;
        }
        i
    }

    fn is_blank_or_end(&self, offset: usize) -> bool {
        offset >= self.bytes.len() || is_blank(self.bytes[offset])
    }

    /// Blank space, a comment, or end of input: what may follow a
    /// standalone keyword. Comments count because the grammar treats them as
    /// whitespace.
    fn is_separator_or_end(&self, offset: usize) -> bool {
        offset >= self.bytes.len() || is_blank(self.bytes[offset]) || self.bytes[offset] == b'#'
    }

    fn starts_with_keyword(&self, keyword: &[u8]) -> bool {
        self.bytes[self.pos..]
            .get(..keyword.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(keyword))
    }
}

fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}
