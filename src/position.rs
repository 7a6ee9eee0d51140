use crate::capability::Capability;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::fmt;

/// A location in the input
///
/// The engine only transports positions: it needs a starting value, a total
/// order for comparing how far two attempts got, and a way to show them in
/// error messages. Advancing a position is the stream's job.
pub trait Position: Clone + Ord + fmt::Debug + fmt::Display {
    /// The position before anything has been read
    fn initial() -> Self;
}

/// Element offset from the start of the input
impl Position for usize {
    fn initial() -> Self {
        0
    }
}

/// 1-based line and column of a character in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub fn new(line: usize, column: usize) -> Self {
        LineColumn { line, column }
    }

    /// Position after reading `ch`
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            LineColumn {
                line: self.line + 1,
                column: 1,
            }
        } else {
            LineColumn {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Position for LineColumn {
    fn initial() -> Self {
        LineColumn::new(1, 1)
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The positions a successful parse started and ended at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span<P> {
    /// Start position (inclusive)
    pub start: P,
    /// End position (exclusive)
    pub end: P,
}

impl<P: Position> Span<P> {
    pub fn new(start: P, end: P) -> Self {
        Span { start, end }
    }

    /// True if the parse consumed nothing
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<P: fmt::Display> fmt::Display for Span<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Pair the output with the span it was parsed from
    pub fn with_span(self) -> Parser<'a, S, (A, Span<S::Position>), M> {
        Parser::new(move |state: ParseState<S>| {
            let start = state.position().clone();
            M::map(self.parse_state(state), move |(result, state)| {
                let span = Span::new(start, state.position().clone());
                (result.map(|value| (value, span)), state)
            })
        })
    }
}
