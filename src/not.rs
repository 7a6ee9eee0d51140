use crate::capability::Capability;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;

pub(crate) const UNEXPECTED_MATCH: &str = "negative lookahead failed: unexpected match";

impl<'a, S, A, M> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    /// Negative lookahead
    ///
    /// Succeeds with `()` if this parser fails at the current position and
    /// fails if it succeeds. Never consumes any input regardless of outcome.
    pub fn not(self) -> Parser<'a, S, (), M> {
        Parser::new(move |state: ParseState<S>| {
            let snapshot = state.clone();
            M::map(self.parse_state(state), move |(result, _)| match result {
                Ok(_) => {
                    let error = ParseError::new(UNEXPECTED_MATCH, snapshot.position().clone());
                    (Err(error), snapshot)
                }
                Err(_) => (Ok(()), snapshot),
            })
        })
    }
}

/// Convenience function to create a negative lookahead
pub fn not<'a, S, A, M>(parser: Parser<'a, S, A, M>) -> Parser<'a, S, (), M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
{
    parser.not()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::LineColumn;
    use crate::token::{any_item, item, string};

    type TestParser<A> = Parser<'static, &'static str, A>;

    #[test]
    fn test_not_fails_on_match() {
        let parser: TestParser<_> = not(string("hello"));

        let (result, state) = parser.run_state("hello");
        assert_eq!(
            result,
            Err(ParseError::new(UNEXPECTED_MATCH, LineColumn::new(1, 1)))
        );
        assert_eq!(state, ParseState::new("hello"));
    }

    #[test]
    fn test_not_succeeds_on_no_match() {
        let parser: TestParser<_> = string("hello").not();

        let (result, state) = parser.run_state("world");
        assert_eq!(result, Ok(()));
        assert_eq!(state, ParseState::new("world"));
    }

    #[test]
    fn test_not_hides_consuming_failure() {
        let parser: TestParser<_> = item('a').then(item('b')).not();

        let (result, state) = parser.run_state("ax");
        assert_eq!(result, Ok(()));
        assert!(!state.consumed());
    }

    #[test]
    fn test_identifier_not_keyword() {
        let identifier: TestParser<_> = string("if")
            .then(any_item().filter(|c: &char| c.is_alphanumeric(), "identifier char").not())
            .not()
            .then(any_item().filter(|c: &char| c.is_alphabetic(), "expected letter"));

        assert_eq!(identifier.run("x"), Ok('x'));
        assert_eq!(identifier.run("iffy"), Ok('i'));
        assert_eq!(identifier.run("if ").unwrap_err().message(), UNEXPECTED_MATCH);
    }
}
