//! # railway
//!
//! Outcome and Maybe types with a combinator algebra that composes the same
//! way whether values are available now or only after an `.await`.
//!
//! ## Overview
//!
//! - **Containers**: [`Outcome`](control::Outcome) (success or failure) and
//!   [`Maybe`](control::Maybe) (present or absent)
//! - **Combinators**: `map`, `bind`, `tap`, `ensure`, `map_error`, `filter`,
//!   `match_with`, `finally`, and the panic-trapping `*_safe` family
//! - **Async Bridge**: one `*_async` combinator per operation, accepting
//!   resolved and pending receivers and continuations alike
//! - **Aggregation**: `combine` / `combine_values` over tuples and sequences,
//!   first failure wins
//! - **Collections**: `try_find`, `try_first`, `try_last`, `choose`
//!
//! ## Feature Flags
//!
//! - `async`: the async bridge and async aggregators
//! - `collections`: collection helpers
//! - `serde`: `Serialize` / `Deserialize` for the containers
//! - `tracing`: log trapped panics and rejected aggregator input
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_or_else(|_| Outcome::failure("InvalidNumber".to_string()), Outcome::success)
//! }
//!
//! let summary = combine_values((parse("40"), parse("2")))
//!     .map(|(left, right)| left + right)
//!     .ensure(|sum| *sum > 0, "neg".to_string())
//!     .match_with(|ok| format!("Success => {ok}"), |err| format!("Fail => {err}"));
//!
//! assert_eq!(summary, "Success => 42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;

    pub use crate::combine::*;

    #[cfg(feature = "async")]
    pub use crate::bridge::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;
}

pub mod combine;
pub mod control;

#[cfg(feature = "async")]
pub mod bridge;

#[cfg(feature = "collections")]
pub mod collections;
