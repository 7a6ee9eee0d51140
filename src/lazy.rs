use crate::capability::Capability;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::stream::Stream;
use std::rc::Rc;

/// A parser whose construction is deferred until it runs
///
/// `factory` is called every time a parse reaches this node, and never while
/// building the grammar. This is what breaks the construction cycle of
/// recursive and mutually recursive grammars.
pub fn lazy<'a, S, A, M, F>(factory: F) -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
    F: Fn() -> Parser<'a, S, A, M> + 'a,
{
    Parser::new(move |state: ParseState<S>| factory().parse_state(state))
}

/// Build a self-referential parser
///
/// `define` receives a handle to the parser being defined and returns its
/// body. The handle expands one level per use, through `lazy`.
///
/// Left recursion (a rule that reaches itself without consuming input first)
/// recurses until the stack is exhausted; rewrite such rules to consume first.
///
/// # Example
///
/// ```
/// use parsicore::token::item;
/// use parsicore::{Parser, recursive};
///
/// // nested ::= '(' nested ')' | 'x'
/// let nested: Parser<'_, &str, usize> = recursive(|nested| {
///     item('(')
///         .then(nested)
///         .and_then(|depth| item(')').map(move |_| depth + 1))
///         .or(item('x').map(|_| 0))
/// });
/// assert_eq!(nested.run("((x))"), Ok(2));
/// ```
pub fn recursive<'a, S, A, M, F>(define: F) -> Parser<'a, S, A, M>
where
    S: Stream + 'a,
    A: 'a,
    M: Capability<'a>,
    F: Fn(Parser<'a, S, A, M>) -> Parser<'a, S, A, M> + 'a,
{
    type Definition<'a, S, A, M> = Rc<dyn Fn(Parser<'a, S, A, M>) -> Parser<'a, S, A, M> + 'a>;

    fn tie<'a, S, A, M>(define: Definition<'a, S, A, M>) -> Parser<'a, S, A, M>
    where
        S: Stream + 'a,
        A: 'a,
        M: Capability<'a>,
    {
        lazy(move || define(tie(Rc::clone(&define))))
    }

    tie(Rc::new(define))
}
