use crate::capability::Capability;
use crate::fail::empty;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use tracing::trace;

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Try this parser, and if it fails without consuming input, try `other`
    ///
    /// This parser runs with the consumed flag cleared, so its own progress is
    /// all that counts. The outcomes are:
    ///
    /// - success: returned as is, consumed flag included
    /// - failure after consuming input: the branch has committed, so the
    ///   failure is returned and `other` never runs
    /// - failure without consuming: the attempt is discarded and `other` runs
    ///   against the original state, with the consumed flag it came in with
    ///
    /// Wrap a branch in `attempt()` to allow backtracking after it consumed.
    pub fn or(self, other: Parser<'a, S, A, M>) -> Self {
        Parser::new(move |state: ParseState<S>| {
            let other = other.clone();
            let original = state.clone();
            M::bind(
                self.parse_state(state.with_consumed(false)),
                move |(result, attempted)| match result {
                    Err(error) if !attempted.consumed() => {
                        trace!(
                            position = %error.position(),
                            message = error.message(),
                            "branch failed without consuming, trying alternative"
                        );
                        other.parse_state(original)
                    }
                    Err(error) => {
                        trace!(
                            position = %error.position(),
                            message = error.message(),
                            "branch failed after consuming, not backtracking"
                        );
                        M::pure((Err(error), attempted))
                    }
                    Ok(value) => M::pure((Ok(value), attempted)),
                },
            )
        })
    }
}

/// Convenience function to create a backtracking choice between two parsers
pub fn or<'a, S, A, M>(first: Parser<'a, S, A, M>, second: Parser<'a, S, A, M>) -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    first.or(second)
}

/// Try each parser in turn with the rules of `or`
///
/// An empty list gives `empty()`, which always fails.
pub fn choice<'a, S, A, M, I>(parsers: I) -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
    I: IntoIterator<Item = Parser<'a, S, A, M>>,
{
    let mut parsers = parsers.into_iter();
    match parsers.next() {
        Some(first) => parsers.fold(first, Parser::or),
        None => empty(),
    }
}
