//! Asynchronous combinators over [`Outcome`] and [`Maybe`].
//!
//! Every combinator of [`control`](crate::control) has one asynchronous
//! counterpart here, written once and usable for all four combinations of
//! a resolved or pending receiver with a resolved or pending continuation.
//!
//! # How It Works
//!
//! [`Outcome`] and [`Maybe`] implement [`IntoFuture`], resolving
//! immediately. The extension traits are implemented for every
//! `IntoFuture` whose output is an `Outcome` (or a `Maybe`), so a plain
//! outcome and a pending future of one expose the same methods.
//! Continuations likewise return `impl IntoFuture`:
//!
//! | Continuation returns | Write |
//! |---|---|
//! | an `Outcome` / `Maybe` | return it directly |
//! | a plain value | `std::future::ready(value)` |
//! | a pending value | an `async` block or any future |
//!
//! The receiver is awaited exactly once. If it resolves to `Failure` or
//! `Nothing`, no continuation is called and nothing else is awaited.
//!
//! # Examples
//!
//! ```rust
//! use railway::bridge::OutcomeFutureExt;
//! use railway::control::Outcome;
//! use std::future::ready;
//!
//! # futures::executor::block_on(async {
//! async fn fetch(id: u32) -> Outcome<String, String> {
//!     if id == 0 {
//!         Outcome::failure("no such user".to_string())
//!     } else {
//!         Outcome::success(format!("user-{id}"))
//!     }
//! }
//!
//! // pending receiver, resolved continuation
//! let name = fetch(7).map_async(|name| ready(name.len())).await;
//! assert_eq!(name, Outcome::success(6));
//!
//! // resolved receiver, pending continuation
//! let user = Outcome::<u32, String>::success(7).bind_async(fetch).await;
//! assert_eq!(user, Outcome::success("user-7".to_string()));
//!
//! // failure short-circuits: `fetch` is never called
//! let missing = Outcome::<u32, String>::failure("bad id".to_string())
//!     .bind_async(fetch)
//!     .await;
//! assert_eq!(missing, Outcome::failure("bad id".to_string()));
//! # });
//! ```

mod maybe;
mod outcome;

use std::future::{IntoFuture, Ready, ready};

use crate::control::{Maybe, Outcome};

pub use maybe::MaybeFutureExt;
pub use outcome::OutcomeFutureExt;

impl<T, E> IntoFuture for Outcome<T, E> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    /// An outcome is already resolved; awaiting it yields it unchanged.
    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

impl<T> IntoFuture for Maybe<T> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}
