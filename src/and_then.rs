use crate::capability::Capability;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::rc::Rc;

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Sequence this parser with a continuation chosen from its result
    ///
    /// On failure the error and the state the failure left behind are passed
    /// up unchanged, consumed flag included. On success the parser returned by
    /// `continuation` runs from the state this parser ended in.
    pub fn and_then<B, F>(self, continuation: F) -> Parser<'a, S, B, M>
    where
        B: 'a,
        F: Fn(A) -> Parser<'a, S, B, M> + 'a,
    {
        let continuation = Rc::new(continuation);
        Parser::new(move |state: ParseState<S>| {
            let continuation = Rc::clone(&continuation);
            M::bind(self.parse_state(state), move |(result, state)| match result {
                Ok(value) => continuation(value).parse_state(state),
                Err(error) => M::pure((Err(error), state)),
            })
        })
    }

    /// Run `next` after this parser, keeping only `next`'s result
    pub fn then<B: 'a>(self, next: Parser<'a, S, B, M>) -> Parser<'a, S, B, M> {
        self.and_then(move |_| next.clone())
    }
}
