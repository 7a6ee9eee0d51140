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
    /// Transform the output of a successful parse
    pub fn map<B, F>(self, mapper: F) -> Parser<'a, S, B, M>
    where
        B: 'a,
        F: Fn(A) -> B + 'a,
    {
        let mapper = Rc::new(mapper);
        Parser::new(move |state: ParseState<S>| {
            let mapper = Rc::clone(&mapper);
            M::map(self.parse_state(state), move |(result, state)| {
                (result.map(|value| mapper(value)), state)
            })
        })
    }
}
