use crate::capability::Capability;
use std::ops::ControlFlow;

/// The trivial synchronous host: a computation is just its value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<'a> Capability<'a> for Identity {
    type Of<T: 'a> = T;

    fn pure<T: 'a>(value: T) -> Self::Of<T> {
        value
    }

    fn map<T: 'a, U: 'a>(computation: Self::Of<T>, f: impl FnOnce(T) -> U + 'a) -> Self::Of<U> {
        f(computation)
    }

    fn bind<T: 'a, U: 'a>(
        computation: Self::Of<T>,
        f: impl FnOnce(T) -> Self::Of<U> + 'a,
    ) -> Self::Of<U> {
        f(computation)
    }

    fn tail_rec<A: 'a, B: 'a>(
        seed: A,
        step: impl Fn(A) -> Self::Of<ControlFlow<B, A>> + 'a,
    ) -> Self::Of<B> {
        let mut seed = seed;
        loop {
            match step(seed) {
                ControlFlow::Continue(next) => seed = next,
                ControlFlow::Break(done) => return done,
            }
        }
    }
}
