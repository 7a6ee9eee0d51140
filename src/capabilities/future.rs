use crate::capability::Capability;
use futures::future::{FutureExt, LocalBoxFuture, ready};
use std::ops::ControlFlow;

/// Asynchronous host: every computation is a future that may suspend
///
/// The engine itself never suspends; only computations lifted into a parser
/// (for example a read that feeds more input) do. Futures are not `Send`
/// because parsers share their closures through `Rc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Async;

impl<'a> Capability<'a> for Async {
    type Of<T: 'a> = LocalBoxFuture<'a, T>;

    fn pure<T: 'a>(value: T) -> Self::Of<T> {
        ready(value).boxed_local()
    }

    fn map<T: 'a, U: 'a>(computation: Self::Of<T>, f: impl FnOnce(T) -> U + 'a) -> Self::Of<U> {
        async move { f(computation.await) }.boxed_local()
    }

    fn bind<T: 'a, U: 'a>(
        computation: Self::Of<T>,
        f: impl FnOnce(T) -> Self::Of<U> + 'a,
    ) -> Self::Of<U> {
        async move { f(computation.await).await }.boxed_local()
    }

    fn tail_rec<A: 'a, B: 'a>(
        seed: A,
        step: impl Fn(A) -> Self::Of<ControlFlow<B, A>> + 'a,
    ) -> Self::Of<B> {
        async move {
            let mut seed = seed;
            loop {
                match step(seed).await {
                    ControlFlow::Continue(next) => seed = next,
                    ControlFlow::Break(done) => return done,
                }
            }
        }
        .boxed_local()
    }
}
