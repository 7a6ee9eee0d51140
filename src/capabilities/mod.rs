pub mod fallible;
pub mod future;
pub mod identity;

pub use fallible::Fallible;
pub use future::Async;
pub use futures::future::LocalBoxFuture;
pub use identity::Identity;
