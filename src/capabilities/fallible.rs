use crate::capability::Capability;
use std::marker::PhantomData;
use std::ops::ControlFlow;

/// A host computation that can fail on its own, independently of parsing
///
/// Host failures short-circuit the whole parse and never reach `or`: a parse
/// run in `Fallible<E>` yields `Result<Result<A, ParseError>, E>`.
#[derive(Debug)]
pub struct Fallible<E> {
    _phantom: PhantomData<E>,
}

impl<E> Fallible<E> {
    /// Fail the host computation
    pub fn throw<T>(error: E) -> Result<T, E> {
        Err(error)
    }

    /// Recover from a host failure
    pub fn catch<T>(
        computation: Result<T, E>,
        handler: impl FnOnce(E) -> Result<T, E>,
    ) -> Result<T, E> {
        computation.or_else(handler)
    }
}

impl<'a, E: 'a> Capability<'a> for Fallible<E> {
    type Of<T: 'a> = Result<T, E>;

    fn pure<T: 'a>(value: T) -> Self::Of<T> {
        Ok(value)
    }

    fn map<T: 'a, U: 'a>(computation: Self::Of<T>, f: impl FnOnce(T) -> U + 'a) -> Self::Of<U> {
        computation.map(f)
    }

    fn bind<T: 'a, U: 'a>(
        computation: Self::Of<T>,
        f: impl FnOnce(T) -> Self::Of<U> + 'a,
    ) -> Self::Of<U> {
        computation.and_then(f)
    }

    fn tail_rec<A: 'a, B: 'a>(
        seed: A,
        step: impl Fn(A) -> Self::Of<ControlFlow<B, A>> + 'a,
    ) -> Self::Of<B> {
        let mut seed = seed;
        loop {
            match step(seed)? {
                ControlFlow::Continue(next) => seed = next,
                ControlFlow::Break(done) => return Ok(done),
            }
        }
    }
}
