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
    /// Sequence two parsers and return both results as a tuple
    ///
    /// Chaining `.and()` produces nested tuples like `((a, b), c)`.
    pub fn and<B: 'a>(self, other: Parser<'a, S, B, M>) -> Parser<'a, S, (A, B), M> {
        Parser::new(move |state: ParseState<S>| {
            let other = other.clone();
            M::bind(self.parse_state(state), move |(result, state)| match result {
                Ok(first) => M::map(other.parse_state(state), move |(result, state)| {
                    (result.map(|second| (first, second)), state)
                }),
                Err(error) => M::pure((Err(error), state)),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::item;

    type TestParser<A> = Parser<'static, &'static str, A>;

    #[test]
    fn test_and_both_succeed() {
        let parser: TestParser<_> = item('A').and(item('5'));

        let (result, state) = parser.run_state("A5xyz");
        assert_eq!(result, Ok(('A', '5')));
        assert_eq!(*state.input(), "xyz");
    }

    #[test]
    fn test_and_first_fails() {
        let parser: TestParser<_> = item('A').and(item('x'));
        assert!(parser.run("Bxyz").is_err());
    }

    #[test]
    fn test_and_second_fails_after_consuming() {
        let parser: TestParser<_> = item('A').and(item('5'));

        let (result, state) = parser.run_state("Axyz");
        assert!(result.is_err());
        assert!(state.consumed());
    }

    #[test]
    fn test_and_chain() {
        let parser: TestParser<_> = item('A').and(item('5')).and(item('B'));
        assert_eq!(parser.run("A5B"), Ok((('A', '5'), 'B')));
    }
}
