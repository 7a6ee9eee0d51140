use crate::capability::Capability;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::borrow::Cow;

/// Message of the parser that has no alternatives
pub const NO_ALTERNATIVE: &str = "No alternative";

/// Parser that always fails at the current position
///
/// Failing never touches the state: whatever the consumed flag was when the
/// failure happened is what `or` will see.
pub fn fail<'a, S, A, M>(message: impl Into<Cow<'static, str>>) -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    let message = message.into();
    Parser::new(move |state: ParseState<S>| {
        let error = ParseError::new(message.clone(), state.position().clone());
        M::pure((Err(error), state))
    })
}

/// Parser that always fails, reporting `position` instead of the current one
///
/// Useful for attributing an error to where a construct started rather than
/// where reading it went wrong.
pub fn fail_at<'a, S, A, M>(
    message: impl Into<Cow<'static, str>>,
    position: S::Position,
) -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    let message = message.into();
    Parser::new(move |state: ParseState<S>| {
        let error = ParseError::new(message.clone(), position.clone());
        M::pure((Err(error), state))
    })
}

/// The parser with no alternatives: the identity element of `or`
pub fn empty<'a, S, A, M>() -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    fail(NO_ALTERNATIVE)
}
