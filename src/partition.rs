use crate::capability::Capability;
use crate::filter::keep_or_restore;
use crate::parser::Parser;
use crate::stream::Stream;
use std::borrow::Cow;
use std::rc::Rc;

const NOT_AN_ERR: &str = "separate: expected an Err value";
const NOT_AN_OK: &str = "separate: expected an Ok value";
const PREDICATE_HELD: &str = "partition: predicate held";
const PREDICATE_FAILED: &str = "partition: predicate failed";

// Either-shaped values are `Result`s here: `Err` is the left side and `Ok`
// the right side. Each half of a split is an independent parser that runs
// the original one and rejects the values belonging to the other half.

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Split into `(rejected, accepted)` parsers by `predicate`
    pub fn partition<F>(self, predicate: F) -> (Self, Self)
    where
        F: Fn(&A) -> bool + 'a,
    {
        let predicate = Rc::new(predicate);
        let rejecting = Rc::clone(&predicate);
        let rejected = keep_or_restore(
            self.clone(),
            move |value| (!rejecting(&value)).then_some(value),
            Cow::Borrowed(PREDICATE_HELD),
        );
        let accepted = keep_or_restore(
            self,
            move |value| predicate(&value).then_some(value),
            Cow::Borrowed(PREDICATE_FAILED),
        );
        (rejected, accepted)
    }

    /// Split by a classifying function into `(errs, oks)` parsers
    pub fn partition_map<L, R, F>(self, classify: F) -> (Parser<'a, S, L, M>, Parser<'a, S, R, M>)
    where
        L: 'a,
        R: 'a,
        F: Fn(A) -> Result<R, L> + 'a,
    {
        self.map(classify).separate()
    }
}

impl<'a, S, L, R, M> Parser<'a, S, Result<R, L>, M>
where
    S: Stream + 'a,
    L: 'a,
    R: 'a,
    M: Capability<'a>,
{
    /// Split a parser of `Result`s into `(errs, oks)` parsers
    pub fn separate(self) -> (Parser<'a, S, L, M>, Parser<'a, S, R, M>) {
        let errs = keep_or_restore(self.clone(), Result::err, Cow::Borrowed(NOT_AN_ERR));
        let oks = keep_or_restore(self, Result::ok, Cow::Borrowed(NOT_AN_OK));
        (errs, oks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::LineColumn;
    use crate::state::ParseState;
    use crate::token::any_item;

    type TestParser<A> = Parser<'static, &'static str, A>;

    #[test]
    fn test_partition_splits_by_predicate() {
        let parser: TestParser<_> = any_item();
        let (others, digits) = parser.partition(|c| c.is_ascii_digit());

        assert_eq!(digits.run("5"), Ok('5'));
        assert_eq!(others.run("x"), Ok('x'));

        let (result, state) = digits.run_state("x");
        assert_eq!(result.unwrap_err().message(), PREDICATE_FAILED);
        assert_eq!(state, ParseState::new("x"));

        let (result, state) = others.run_state("5");
        assert_eq!(result.unwrap_err().message(), PREDICATE_HELD);
        assert_eq!(state, ParseState::new("5"));
    }

    #[test]
    fn test_partition_halves_compose_with_or() {
        let parser: TestParser<_> = any_item();
        let (others, digits) = parser.partition(|c| c.is_ascii_digit());
        let classified = digits.map(|c| format!("digit {c}")).or(others.map(|c| format!("other {c}")));

        assert_eq!(classified.run("3"), Ok("digit 3".to_string()));
        assert_eq!(classified.run("?"), Ok("other ?".to_string()));
    }

    #[test]
    fn test_separate() {
        let parser: TestParser<Result<u32, char>> =
            any_item().map(|c: char| c.to_digit(10).ok_or(c));
        let (letters, numbers) = parser.separate();

        assert_eq!(numbers.run("8"), Ok(8));
        assert_eq!(letters.run("k"), Ok('k'));

        let error = numbers.run("k").unwrap_err();
        assert_eq!(error.message(), NOT_AN_OK);
        assert_eq!(*error.position(), LineColumn::new(1, 1));

        let error = letters.run("8").unwrap_err();
        assert_eq!(error.message(), NOT_AN_ERR);
    }

    #[test]
    fn test_partition_map() {
        let parser: TestParser<_> = any_item();
        let (uppercase, lowercase) = parser.partition_map(|c| {
            if c.is_lowercase() {
                Ok(c.to_ascii_uppercase())
            } else {
                Err(c.to_ascii_lowercase())
            }
        });

        assert_eq!(lowercase.run("q"), Ok('Q'));
        assert_eq!(uppercase.run("Q"), Ok('q'));

        let (result, state) = lowercase.run_state("Q");
        assert!(result.is_err());
        assert!(!state.consumed());
        assert_eq!(*state.input(), "Q");
    }
}
