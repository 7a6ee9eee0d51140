use std::ops::ControlFlow;
use std::rc::Rc;

/// The underlying computation a parser runs inside
///
/// Rust has no higher-kinded types, so the host computation is named through
/// the generic associated type `Of<T>`: `Identity` maps `T` to itself, a
/// fallible host maps it to `Result<T, E>`, an async host to a boxed future.
/// Parsers only ever touch host values through the operations below, which
/// lets one combinator definition run unchanged in all of them.
///
/// `'a` bounds everything a computation may capture, usually the lifetime of
/// the input being parsed.
pub trait Capability<'a>: Sized + 'a {
    /// A host computation producing a `T`
    type Of<T: 'a>;

    /// Embed a plain value
    fn pure<T: 'a>(value: T) -> Self::Of<T>;

    /// Transform the value of a computation
    fn map<T: 'a, U: 'a>(computation: Self::Of<T>, f: impl FnOnce(T) -> U + 'a) -> Self::Of<U>;

    /// Sequence a computation with a continuation that produces the next one
    fn bind<T: 'a, U: 'a>(
        computation: Self::Of<T>,
        f: impl FnOnce(T) -> Self::Of<U> + 'a,
    ) -> Self::Of<U>;

    /// Run `step` until it breaks, starting from `seed`
    ///
    /// The default goes through `bind` once per iteration and grows the stack
    /// with the number of iterations. Every capability in this crate overrides
    /// it with a loop.
    fn tail_rec<A: 'a, B: 'a>(
        seed: A,
        step: impl Fn(A) -> Self::Of<ControlFlow<B, A>> + 'a,
    ) -> Self::Of<B> {
        fn go<'a, M, A, B>(seed: A, step: Rc<dyn Fn(A) -> M::Of<ControlFlow<B, A>> + 'a>) -> M::Of<B>
        where
            M: Capability<'a>,
            A: 'a,
            B: 'a,
        {
            let next = Rc::clone(&step);
            M::bind(step(seed), move |flow| match flow {
                ControlFlow::Continue(seed) => go::<M, A, B>(seed, next),
                ControlFlow::Break(done) => M::pure(done),
            })
        }

        go::<Self, A, B>(seed, Rc::new(step))
    }
}
