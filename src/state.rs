use crate::capability::Capability;
use crate::parser::Parser;
use crate::position::Position;
use crate::stream::Stream;

/// The state threaded through every parse step
///
/// States are plain values. Steps take a state by value and hand back a new
/// one, so keeping a clone is all it takes to roll back. The `consumed` flag
/// records whether the current attempt has advanced since the last reset; it
/// is what `or` inspects to decide whether backtracking is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState<S: Stream> {
    input: S,
    position: S::Position,
    consumed: bool,
}

impl<S: Stream> ParseState<S> {
    /// The state a top-level parse starts from
    pub fn new(input: S) -> Self {
        ParseState {
            input,
            position: S::Position::initial(),
            consumed: false,
        }
    }

    /// Resume at an explicit position
    pub fn at(input: S, position: S::Position) -> Self {
        ParseState {
            input,
            position,
            consumed: false,
        }
    }

    /// The input that has not been read yet
    pub fn input(&self) -> &S {
        &self.input
    }

    /// Where the next item will be read
    pub fn position(&self) -> &S::Position {
        &self.position
    }

    /// True if the current attempt has advanced since the last reset
    pub fn consumed(&self) -> bool {
        self.consumed
    }

    /// Overwrite the consumed flag; input and position are untouched
    pub fn set_consumed(&mut self, consumed: bool) {
        self.consumed = consumed;
    }

    /// Mark the current attempt as consuming
    pub fn consume(&mut self) {
        self.set_consumed(true);
    }

    /// Clear the consumed flag
    pub fn unconsume(&mut self) {
        self.set_consumed(false);
    }

    /// Same state with the consumed flag replaced
    pub fn with_consumed(mut self, consumed: bool) -> Self {
        self.set_consumed(consumed);
        self
    }

    /// Move to `input` at `position`, marking the attempt as consuming
    ///
    /// This is the only way parsers advance; everything that reads input goes
    /// through it.
    pub fn advance(mut self, input: S, position: S::Position) -> Self {
        self.input = input;
        self.position = position;
        self.consume();
        self
    }

    /// Split into input, position and consumed flag
    pub fn into_parts(self) -> (S, S::Position, bool) {
        (self.input, self.position, self.consumed)
    }
}

/// Parser that returns a snapshot of the current state
pub fn get_state<'a, S, M>() -> Parser<'a, S, ParseState<S>, M>
where
    S: Stream + 'a,
    M: Capability<'a>,
{
    Parser::new(|state: ParseState<S>| M::pure((Ok(state.clone()), state)))
}

/// Parser that replaces the current state wholesale
pub fn put_state<'a, S, M>(replacement: ParseState<S>) -> Parser<'a, S, (), M>
where
    S: Stream + 'a,
    M: Capability<'a>,
{
    Parser::new(move |_: ParseState<S>| M::pure((Ok(()), replacement.clone())))
}

/// Parser that returns the current position without consuming anything
pub fn position<'a, S, M>() -> Parser<'a, S, S::Position, M>
where
    S: Stream + 'a,
    M: Capability<'a>,
{
    Parser::new(|state: ParseState<S>| M::pure((Ok(state.position().clone()), state)))
}

/// Parser that overwrites the consumed flag
pub fn set_consumed<'a, S, M>(consumed: bool) -> Parser<'a, S, (), M>
where
    S: Stream + 'a,
    M: Capability<'a>,
{
    Parser::new(move |state: ParseState<S>| M::pure((Ok(()), state.with_consumed(consumed))))
}

/// Parser that marks the current attempt as consuming
pub fn consume<'a, S, M>() -> Parser<'a, S, (), M>
where
    S: Stream + 'a,
    M: Capability<'a>,
{
    set_consumed(true)
}

/// Parser that clears the consumed flag
pub fn unconsume<'a, S, M>() -> Parser<'a, S, (), M>
where
    S: Stream + 'a,
    M: Capability<'a>,
{
    set_consumed(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::LineColumn;
    use crate::token::any_item;

    type TestParser<A> = Parser<'static, &'static str, A>;

    #[test]
    fn test_new_state() {
        let state = ParseState::new("abc");
        assert_eq!(*state.input(), "abc");
        assert_eq!(*state.position(), LineColumn::new(1, 1));
        assert!(!state.consumed());
    }

    #[test]
    fn test_set_consumed_leaves_input_and_position() {
        let mut state = ParseState::at("rest", LineColumn::new(3, 4));
        state.consume();
        assert!(state.consumed());
        assert_eq!(*state.input(), "rest");
        assert_eq!(*state.position(), LineColumn::new(3, 4));

        state.unconsume();
        assert!(!state.consumed());
        assert_eq!(*state.input(), "rest");
    }

    #[test]
    fn test_advance_marks_consumed() {
        let state = ParseState::new("ab").advance("b", LineColumn::new(1, 2));
        let (input, position, consumed) = state.into_parts();
        assert_eq!(input, "b");
        assert_eq!(position, LineColumn::new(1, 2));
        assert!(consumed);
    }

    #[test]
    fn test_snapshot_independence() {
        let original = ParseState::new("xy");
        let saved = original.clone();

        let advanced = original.advance("y", LineColumn::new(1, 2));
        assert_eq!(*advanced.input(), "y");
        assert_eq!(*saved.input(), "xy");
        assert!(!saved.consumed());
    }

    #[test]
    fn test_position_parser_does_not_consume() {
        let parser: TestParser<_> = position();

        let (result, state) = parser.run_state("abc");
        assert_eq!(result.unwrap(), LineColumn::new(1, 1));
        assert_eq!(*state.input(), "abc");
        assert!(!state.consumed());
    }

    #[test]
    fn test_position_after_consuming() {
        let parser: TestParser<_> = any_item().and_then(|_| position());

        let (result, state) = parser.run_state("abc");
        assert_eq!(result.unwrap(), LineColumn::new(1, 2));
        assert!(state.consumed());
    }

    #[test]
    fn test_consume_and_unconsume_parsers() {
        let parser: TestParser<_> = consume();
        let (_, state) = parser.run_state("abc");
        assert!(state.consumed());
        assert_eq!(*state.input(), "abc");

        let parser: TestParser<_> = any_item().and_then(|_| unconsume());
        let (_, state) = parser.run_state("abc");
        assert!(!state.consumed());
        assert_eq!(*state.input(), "bc");
    }

    #[test]
    fn test_get_and_put_state() {
        let parser: TestParser<_> = get_state().and_then(|saved: ParseState<&'static str>| {
            any_item().and_then(move |_| put_state(saved.clone()))
        });

        let (result, state) = parser.run_state("abc");
        assert!(result.is_ok());
        assert_eq!(state, ParseState::new("abc"));
    }
}
