//! Merging independent outcomes into one, first failure wins.
//!
//! - [`combine_values`] / [`combine`]: tuples of two to five outcomes
//! - [`combine_values_all`] / [`combine_all`]: any number of outcomes
//! - [`combine_values_slots`]: sequences whose slots may be empty
//! - `*_async` forms (feature `async`): the same over pending outcomes,
//!   awaited one at a time in positional order
//!
//! Every aggregator inspects its inputs left to right and reports only the
//! first failure it meets. Failures are never collected into a list.
//!
//! # Examples
//!
//! ```rust
//! use railway::combine::{combine, combine_values};
//! use railway::control::Outcome;
//!
//! let both = combine_values((
//!     Outcome::<i32, &str>::success(2),
//!     Outcome::<i32, &str>::success(3),
//! ));
//! assert_eq!(both, Outcome::success((2, 3)));
//!
//! let first_failure = combine((
//!     Outcome::<i32, &str>::success(2),
//!     Outcome::<i32, &str>::failure("x"),
//!     Outcome::<i32, &str>::success(4),
//! ));
//! assert_eq!(first_failure, Outcome::failure("x"));
//! ```

mod tuple;
mod variadic;

use crate::control::{Outcome, UnitOutcome};

pub use tuple::CombineValues;
pub use variadic::{combine_all, combine_values_all, combine_values_slots};

#[cfg(feature = "async")]
pub use tuple::CombineValuesAsync;
#[cfg(feature = "async")]
pub use variadic::{combine_all_async, combine_values_all_async};

/// Merges a tuple of two to five outcomes into an outcome of a tuple.
pub fn combine_values<C, E>(outcomes: C) -> Outcome<C::Values, E>
where
    C: CombineValues<E>,
{
    outcomes.combine_values()
}

/// Like [`combine_values`], discarding the values.
pub fn combine<C, E>(outcomes: C) -> UnitOutcome<E>
where
    C: CombineValues<E>,
{
    outcomes.combine_values().map(|_| ())
}

/// Awaits a tuple of two to five pending outcomes in order and merges them.
///
/// # Examples
///
/// ```rust
/// use railway::combine::combine_values_async;
/// use railway::control::Outcome;
///
/// # futures::executor::block_on(async {
/// let combined = combine_values_async((
///     async { Outcome::<i32, String>::success(1) },
///     Outcome::<&str, String>::success("resolved"),
/// ))
/// .await;
/// assert_eq!(combined, Outcome::success((1, "resolved")));
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn combine_values_async<C, E>(pending: C) -> Outcome<C::Values, E>
where
    C: CombineValuesAsync<E>,
{
    pending.combine_values_async().await
}

/// Like [`combine_values_async`], discarding the values.
#[cfg(feature = "async")]
pub async fn combine_async<C, E>(pending: C) -> UnitOutcome<E>
where
    C: CombineValuesAsync<E>,
{
    pending.combine_values_async().await.map(|_| ())
}
