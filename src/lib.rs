//! # ParsiCore - Parser Combinator Core
//!
//! A small parser combinator core that is generic over the computation it runs
//! in. The same grammar can be run as a plain function, inside a fallible host,
//! or as a future that awaits between steps.
//!
//! A parser is a function from a [`ParseState`] to a reply inside a host
//! [`Capability`]. The state carries the remaining input, a [`Position`] and a
//! consumed flag. Choice is decided the Parsec way:
//!
//! - **Committed choice**: `or` only tries its alternative when the first
//!   branch failed without consuming input
//! - **Explicit backtracking**: `attempt` turns a consuming failure back into
//!   a non-consuming one
//! - **Stream agnostic**: text is read as `char`s with line/column positions,
//!   token slices with offsets
//! - **Host agnostic**: [`Identity`], [`Fallible`] and [`Async`] ship with the
//!   crate, other hosts implement [`Capability`]
//!
//! # Example
//!
//! ```
//! use parsicore::token::{item, satisfy};
//! use parsicore::{LineColumn, Parser, recursive};
//!
//! // sum ::= digit ('+' sum)?
//! let sum: Parser<'_, &str, u32> = recursive(|sum| {
//!     satisfy(|c: &char| c.is_ascii_digit(), "digit")
//!         .map(|c: char| c.to_digit(10).unwrap_or(0))
//!         .and_then(move |left| {
//!             item('+')
//!                 .then(sum.clone())
//!                 .map(move |right| left + right)
//!                 .or(Parser::pure(left))
//!         })
//! });
//!
//! assert_eq!(sum.run("1+2+3"), Ok(6));
//!
//! let error = sum.run("1+x").unwrap_err();
//! assert_eq!(error.message(), "expected digit");
//! assert_eq!(*error.position(), LineColumn::new(1, 3));
//! ```

pub mod and;
pub mod and_then;
pub mod attempt;
pub mod capabilities;
pub mod capability;
pub mod error;
pub mod fail;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod map_err;
pub mod not;
pub mod or;
pub mod parser;
pub mod partition;
pub mod position;
pub mod state;
pub mod stream;
pub mod streams;
pub mod token;


pub use capabilities::{Async, Fallible, Identity, LocalBoxFuture};
pub use capability::Capability;
pub use error::ParseError;
pub use fail::{NO_ALTERNATIVE, empty, fail, fail_at};
pub use lazy::{lazy, recursive};
pub use many::many;
pub use not::not;
pub use or::{choice, or};
pub use parser::{Parser, Reply, lift, run};
pub use position::{LineColumn, Position, Span};
pub use state::{ParseState, consume, get_state, position, put_state, set_consumed, unconsume};
pub use stream::Stream;
