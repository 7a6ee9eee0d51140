use crate::capability::Capability;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::ops::ControlFlow;
use tracing::trace;

pub(crate) const EMPTY_ITERATION: &str = "many: parser accepted empty input";

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Match this parser zero or more times
    ///
    /// Every repetition is a choice between "one more" and "stop", decided
    /// with the rules of `or`: a failure that consumed nothing ends the loop
    /// and keeps the items so far, a failure after consuming fails the whole
    /// repetition. An iteration that succeeds without consuming would repeat
    /// forever, so it is reported as an error instead.
    ///
    /// The loop runs through `Capability::tail_rec`, so long inputs do not
    /// grow the stack.
    pub fn many(self) -> Parser<'a, S, Vec<A>, M> {
        Parser::new(move |state: ParseState<S>| {
            let parser = self.clone();
            M::tail_rec((Vec::new(), state), move |(mut items, state): (Vec<A>, ParseState<S>)| {
                let original = state.clone();
                M::map(
                    parser.parse_state(state.with_consumed(false)),
                    move |(result, attempted)| match result {
                        Ok(_) if !attempted.consumed() => {
                            let error =
                                ParseError::new(EMPTY_ITERATION, attempted.position().clone());
                            ControlFlow::Break((Err(error), attempted))
                        }
                        Ok(item) => {
                            items.push(item);
                            ControlFlow::Continue((items, attempted))
                        }
                        Err(_) if !attempted.consumed() => {
                            trace!(count = items.len(), "repetition finished");
                            ControlFlow::Break((Ok(items), original))
                        }
                        Err(error) => ControlFlow::Break((Err(error), attempted)),
                    },
                )
            })
        })
    }
}

/// Convenience function to create a repetition
pub fn many<'a, S, A, M>(parser: Parser<'a, S, A, M>) -> Parser<'a, S, Vec<A>, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    parser.many()
}
