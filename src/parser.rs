use crate::capabilities::Identity;
use crate::capability::Capability;
use crate::error::ParseError;
use crate::state::ParseState;
use crate::stream::Stream;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// What one parse step hands back: its outcome and the state it left behind
///
/// The state is returned on failure too. A failed step may already have
/// consumed input, and `or` needs to see that to decide whether to backtrack.
pub type Reply<S, A> = (Result<A, ParseError<<S as Stream>::Position>>, ParseState<S>);

type Action<'a, S, A, M> = dyn Fn(ParseState<S>) -> <M as Capability<'a>>::Of<Reply<S, A>> + 'a;

/// A parse action: runs against a state inside the host computation `M`
///
/// Parsers are cheap to clone (the action is shared) and are built by
/// composing the primitives of this crate: `and_then` for sequencing, `or`
/// for backtracking choice, `fail` for errors, `lazy` for recursion.
///
/// # Example
///
/// ```
/// use parsicore::token::item;
/// use parsicore::{LineColumn, Parser, fail};
///
/// let digit: Parser<'_, &str, char> = fail("no digit here").or(item('7'));
/// assert_eq!(digit.run("7"), Ok('7'));
///
/// let error = digit.run("x").unwrap_err();
/// assert_eq!(*error.position(), LineColumn::new(1, 1));
/// ```
pub struct Parser<'a, S, A, M = Identity>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    action: Rc<Action<'a, S, A, M>>,
}

impl<'a, S, A, M> Clone for Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    fn clone(&self) -> Self {
        Parser {
            action: Rc::clone(&self.action),
        }
    }
}

impl<'a, S, A, M> fmt::Debug for Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("action", &"<function>")
            .finish()
    }
}

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Build a parser from a raw step function
    pub fn new(action: impl Fn(ParseState<S>) -> M::Of<Reply<S, A>> + 'a) -> Self {
        Parser {
            action: Rc::new(action),
        }
    }

    /// Run one step against `state`
    pub fn parse_state(&self, state: ParseState<S>) -> M::Of<Reply<S, A>> {
        (self.action)(state)
    }

    /// Parser that succeeds with `value` without touching the state
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Parser::new(move |state| M::pure((Ok(value.clone()), state)))
    }

    /// Parse `input` from the initial position and return the final state too
    pub fn run_state(&self, input: S) -> M::Of<Reply<S, A>> {
        self.parse_state(ParseState::new(input))
    }

    /// Parse `input` from the initial position, discarding the final state
    pub fn run(&self, input: S) -> M::Of<Result<A, ParseError<S::Position>>> {
        M::map(self.run_state(input), |(result, state)| {
            match &result {
                Ok(_) => debug!(position = %state.position(), "parse succeeded"),
                Err(error) => debug!(
                    position = %error.position(),
                    message = error.message(),
                    "parse failed"
                ),
            }
            result
        })
    }
}

/// Parse `input` with `parser` from the initial position
pub fn run<'a, S, A, M>(input: S, parser: &Parser<'a, S, A, M>) -> M::Of<Result<A, ParseError<S::Position>>>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    parser.run(input)
}

/// Parser that runs a host computation and returns its value
///
/// The state passes through untouched; this is how effects of the underlying
/// computation (a read that feeds more input, a lookup) enter a parse.
pub fn lift<'a, S, A, M>(computation: impl Fn() -> M::Of<A> + 'a) -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    Parser::new(move |state| M::map(computation(), move |value| (Ok(value), state)))
}
