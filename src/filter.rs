use crate::capability::Capability;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::borrow::Cow;
use std::rc::Rc;

pub(crate) const ABSENT_VALUE: &str = "compact: parsed value was absent";

/// Run `parser` and let `decide` keep or reject its value
///
/// A rejected value rolls the state back to where `parser` started, consumed
/// flag included, and fails there with `message`. From the outside a
/// rejection looks exactly like a failure that consumed nothing, so `or` will
/// try its alternative. Failures of `parser` itself pass through untouched.
pub(crate) fn keep_or_restore<'a, S, A, B, M, F>(
    parser: Parser<'a, S, A, M>,
    decide: F,
    message: Cow<'static, str>,
) -> Parser<'a, S, B, M>
where
    S: Stream + 'a,
    A: 'a,
    B: 'a,
    M: Capability<'a>,
    F: Fn(A) -> Option<B> + 'a,
{
    let decide = Rc::new(decide);
    Parser::new(move |state: ParseState<S>| {
        let snapshot = state.clone();
        let decide = Rc::clone(&decide);
        let message = message.clone();
        M::map(parser.parse_state(state), move |(result, state)| match result {
            Ok(value) => match decide(value) {
                Some(kept) => (Ok(kept), state),
                None => {
                    let error = ParseError::new(message, snapshot.position().clone());
                    (Err(error), snapshot)
                }
            },
            Err(error) => (Err(error), state),
        })
    })
}

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Keep the parsed value only if `predicate` accepts it
    ///
    /// # Example
    ///
    /// ```
    /// use parsicore::Parser;
    /// use parsicore::token::any_item;
    ///
    /// let vowel: Parser<'_, &str, char> = any_item().filter(|c: &char| "aeiou".contains(*c), "expected a vowel");
    /// assert_eq!(vowel.run("e"), Ok('e'));
    /// assert_eq!(vowel.run("x").unwrap_err().message(), "expected a vowel");
    /// ```
    pub fn filter<F>(self, predicate: F, error_message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&A) -> bool + 'a,
    {
        keep_or_restore(
            self,
            move |value| predicate(&value).then_some(value),
            error_message.into(),
        )
    }

    /// Transform the parsed value, rejecting it when `mapper` returns `None`
    pub fn filter_map<B, F>(
        self,
        mapper: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> Parser<'a, S, B, M>
    where
        B: 'a,
        F: Fn(A) -> Option<B> + 'a,
    {
        keep_or_restore(self, mapper, error_message.into())
    }
}

impl<'a, S, A, M> Parser<'a, S, Option<A>, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Unwrap a parsed `Some`, rejecting a parsed `None`
    pub fn compact(self) -> Parser<'a, S, A, M> {
        keep_or_restore(self, |value| value, Cow::Borrowed(ABSENT_VALUE))
    }
}
