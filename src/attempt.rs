use crate::capability::Capability;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// On failure, pretend nothing was consumed
    ///
    /// The failure keeps the state it reached but gets back the consumed flag
    /// it was entered with. Inside `or` that flag is always clear, so a failed
    /// `attempt` can be backtracked over even after reading input.
    pub fn attempt(self) -> Self {
        Parser::new(move |state: ParseState<S>| {
            let consumed = state.consumed();
            M::map(self.parse_state(state), move |(result, state)| match result {
                Ok(value) => (Ok(value), state),
                Err(error) => (Err(error), state.with_consumed(consumed)),
            })
        })
    }

    /// Run this parser, then rewind to where it started
    ///
    /// The result is reported either way; the state is always the one this
    /// parser was entered with.
    pub fn look_ahead(self) -> Self {
        Parser::new(move |state: ParseState<S>| {
            let snapshot = state.clone();
            M::map(self.parse_state(state), move |(result, _)| (result, snapshot))
        })
    }
}
