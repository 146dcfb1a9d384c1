//! Outcome containers and their synchronous combinators.
//!
//! - [`Outcome`]: a success value or a failure error
//! - [`Maybe`]: a present value or nothing
//! - [`InvalidStateError`]: reading the payload of the wrong branch
//! - [`Fault`]: a panic trapped by the `*_safe` combinators
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Maybe, Outcome};
//!
//! let outcome: Outcome<i32, String> = Maybe::just(5)
//!     .to_outcome("missing".to_string())
//!     .ensure(|v| *v > 0, "negative".to_string())
//!     .bind(|v| Outcome::success(v * 2));
//!
//! assert_eq!(outcome, Outcome::success(10));
//! ```

mod error;
mod fault;
mod maybe;
mod outcome;
mod safe;

pub use error::{Branch, CombineError, InvalidStateError};
pub use fault::Fault;
pub use maybe::Maybe;
pub use outcome::{Outcome, UnitOutcome};

#[cfg(feature = "async")]
pub(crate) use fault::trap_future;
