use crate::capability::Capability;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::borrow::Cow;
use std::rc::Rc;

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Rewrite the error of a failed parse; the state is left as it is
    pub fn map_err<F>(self, mapper: F) -> Self
    where
        F: Fn(ParseError<S::Position>) -> ParseError<S::Position> + 'a,
    {
        let mapper = Rc::new(mapper);
        Parser::new(move |state: ParseState<S>| {
            let mapper = Rc::clone(&mapper);
            M::map(self.parse_state(state), move |(result, state)| {
                (result.map_err(|error| mapper(error)), state)
            })
        })
    }

    /// Replace the message of a failure, keeping its position
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        self.map_err(move |error| {
            let (_, position) = error.into_parts();
            ParseError::new(message.clone(), position)
        })
    }

    /// Report a failure at the position this parser started from
    pub fn at_start(self) -> Self {
        Parser::new(move |state: ParseState<S>| {
            let start = state.position().clone();
            M::map(self.parse_state(state), move |(result, state)| {
                (result.map_err(|error| error.at(start)), state)
            })
        })
    }
}
