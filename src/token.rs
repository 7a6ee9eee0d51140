use crate::capability::Capability;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::borrow::Cow;
use std::fmt;

/// Parser that reads one item if `predicate` accepts it
///
/// This is the primitive every reading parser is built on: on success it
/// advances input and position and marks the attempt as consuming. On failure
/// nothing is consumed and the error reads "expected {expected}".
pub fn satisfy<'a, S, M, F>(
    predicate: F,
    expected: impl Into<Cow<'static, str>>,
) -> Parser<'a, S, S::Item, M>
where
    S: Stream + 'a,
    S::Item: 'a,
    M: Capability<'a>,
    F: Fn(&S::Item) -> bool + 'a,
{
    let expected = expected.into();
    Parser::new(move |state: ParseState<S>| {
        let reply = match state.input().uncons() {
            Some((item, rest)) if predicate(&item) => {
                let position = S::advance_position(state.position(), &item);
                (Ok(item), state.advance(rest, position))
            }
            Some(_) => {
                let error = ParseError::new(format!("expected {expected}"), state.position().clone());
                (Err(error), state)
            }
            None => {
                let error = ParseError::new(
                    format!("unexpected end of input, expected {expected}"),
                    state.position().clone(),
                );
                (Err(error), state)
            }
        };
        M::pure(reply)
    })
}

/// Parser that reads any single item
pub fn any_item<'a, S, M>() -> Parser<'a, S, S::Item, M>
where
    S: Stream + 'a,
    S::Item: 'a,
    M: Capability<'a>,
{
    satisfy(|_| true, "any item")
}

/// Parser that reads exactly `expected`
pub fn item<'a, S, M>(expected: S::Item) -> Parser<'a, S, S::Item, M>
where
    S: Stream + 'a,
    S::Item: PartialEq + fmt::Debug + 'a,
    M: Capability<'a>,
{
    let description = format!("{expected:?}");
    satisfy(move |found| *found == expected, description)
}

/// Parser that succeeds only at the end of input
pub fn eof<'a, S, M>() -> Parser<'a, S, (), M>
where
    S: Stream + 'a,
    M: Capability<'a>,
{
    Parser::new(|state: ParseState<S>| {
        if state.input().is_exhausted() {
            M::pure((Ok(()), state))
        } else {
            let error = ParseError::new("expected end of input", state.position().clone());
            M::pure((Err(error), state))
        }
    })
}

/// Parser that reads `literal` as a whole
///
/// Either every character matches and all of them are consumed, or nothing
/// is: a partial match fails at the position the literal would have started.
pub fn string<'a, S, M>(literal: &'static str) -> Parser<'a, S, &'static str, M>
where
    S: Stream<Item = char> + 'a,
    M: Capability<'a>,
{
    Parser::new(move |state: ParseState<S>| {
        if literal.is_empty() {
            return M::pure((Ok(literal), state));
        }

        let mut input = state.input().clone();
        let mut position = state.position().clone();
        for wanted in literal.chars() {
            match input.uncons() {
                Some((found, rest)) if found == wanted => {
                    position = S::advance_position(&position, &found);
                    input = rest;
                }
                _ => {
                    let error =
                        ParseError::new(format!("expected {literal:?}"), state.position().clone());
                    return M::pure((Err(error), state));
                }
            }
        }
        M::pure((Ok(literal), state.advance(input, position)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::LineColumn;

    type TestParser<A> = Parser<'static, &'static str, A>;

    #[test]
    fn test_satisfy_advances_and_consumes() {
        let parser: TestParser<_> = satisfy(|c: &char| c.is_ascii_digit(), "digit");

        let (result, state) = parser.run_state("7x");
        assert_eq!(result, Ok('7'));
        assert_eq!(*state.input(), "x");
        assert_eq!(*state.position(), LineColumn::new(1, 2));
        assert!(state.consumed());
    }

    #[test]
    fn test_satisfy_rejects_without_consuming() {
        let parser: TestParser<_> = satisfy(|c: &char| c.is_ascii_digit(), "digit");

        let (result, state) = parser.run_state("x7");
        assert_eq!(result, Err(ParseError::new("expected digit", LineColumn::new(1, 1))));
        assert_eq!(state, ParseState::new("x7"));
    }

    #[test]
    fn test_satisfy_at_end_of_input() {
        let parser: TestParser<_> = any_item();

        let error = parser.run("").unwrap_err();
        assert_eq!(error.message(), "unexpected end of input, expected any item");
    }

    #[test]
    fn test_item_tracks_lines() {
        let parser: TestParser<_> = item('a').then(item('\n')).then(item('b'));

        let (result, state) = parser.run_state("a\nb");
        assert_eq!(result, Ok('b'));
        assert_eq!(*state.position(), LineColumn::new(2, 2));
    }

    #[test]
    fn test_item_message() {
        let parser: TestParser<_> = item('q');
        assert_eq!(parser.run("z").unwrap_err().message(), "expected 'q'");
    }

    #[test]
    fn test_eof() {
        let parser: TestParser<_> = item('a').then(eof());
        assert_eq!(parser.run("a"), Ok(()));

        let error = parser.run("ab").unwrap_err();
        assert_eq!(error.message(), "expected end of input");
        assert_eq!(*error.position(), LineColumn::new(1, 2));
    }

    #[test]
    fn test_string_is_all_or_nothing() {
        let parser: TestParser<_> = string("let");

        let (result, state) = parser.run_state("let x");
        assert_eq!(result, Ok("let"));
        assert_eq!(*state.input(), " x");
        assert!(state.consumed());

        let (result, state) = parser.run_state("lex");
        assert_eq!(result, Err(ParseError::new("expected \"let\"", LineColumn::new(1, 1))));
        assert_eq!(state, ParseState::new("lex"));
    }

    #[test]
    fn test_empty_string_consumes_nothing() {
        let parser: TestParser<_> = string("");

        let (result, state) = parser.run_state("abc");
        assert_eq!(result, Ok(""));
        assert!(!state.consumed());
    }

    #[test]
    fn test_token_stream_offsets() {
        #[derive(Debug, Clone, PartialEq)]
        enum Token {
            Ident(&'static str),
            Equals,
            Number(i64),
        }

        let tokens = [Token::Ident("x"), Token::Equals, Token::Number(4)];
        let parser: Parser<'_, &[Token], _> =
            satisfy(|t: &Token| matches!(t, Token::Ident(_)), "identifier")
                .then(item(Token::Equals))
                .then(satisfy(|t: &Token| matches!(t, Token::Number(_)), "number"));

        let (result, state) = parser.run_state(&tokens[..]);
        assert_eq!(result, Ok(Token::Number(4)));
        assert_eq!(*state.position(), 3);

        let error = parser.run(&tokens[1..]).unwrap_err();
        assert_eq!(error.message(), "expected identifier");
        assert_eq!(*error.position(), 0);
    }
}
