use std::future::{Future, IntoFuture};

use crate::control::{Maybe, Outcome};

/// Asynchronous combinators for anything that resolves to a [`Maybe`].
///
/// Implemented for every `R: IntoFuture<Output = Maybe<T>>`, including
/// `Maybe<T>` itself.
///
/// # Examples
///
/// ```rust
/// use railway::bridge::MaybeFutureExt;
/// use railway::control::{Maybe, Outcome};
/// use std::future::ready;
///
/// # futures::executor::block_on(async {
/// let lookup = async { Maybe::just("42") };
/// let parsed = lookup
///     .bind_async(|text| ready(Maybe::from_nullable(text.parse::<i32>().ok())))
///     .filter_async(|n| ready(*n > 0))
///     .to_outcome_async("not a positive number")
///     .await;
/// assert_eq!(parsed, Outcome::success(42));
/// # });
/// ```
pub trait MaybeFutureExt<T>: IntoFuture<Output = Maybe<T>> + Sized {
    /// Asynchronous [`Maybe::map`].
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        async move {
            match self.await {
                Maybe::Just(value) => Maybe::Just(function(value).await),
                Maybe::Nothing => Maybe::Nothing,
            }
        }
    }

    /// Asynchronous [`Maybe::bind`].
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Maybe<U>>,
    {
        async move {
            match self.await {
                Maybe::Just(value) => function(value).await,
                Maybe::Nothing => Maybe::Nothing,
            }
        }
    }

    /// Asynchronous [`Maybe::tap`].
    fn tap_async<F, Fut>(self, action: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        async move {
            let maybe = self.await;
            if let Maybe::Just(value) = &maybe {
                action(value).await;
            }
            maybe
        }
    }

    /// Asynchronous [`Maybe::filter`].
    fn filter_async<P, Fut>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        async move {
            match self.await {
                Maybe::Just(value) => {
                    if predicate(&value).await {
                        Maybe::Just(value)
                    } else {
                        Maybe::Nothing
                    }
                }
                Maybe::Nothing => Maybe::Nothing,
            }
        }
    }

    /// Asynchronous [`Maybe::or_else`]; `function` runs only when the value is absent.
    fn or_else_async<F, Fut>(self, function: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Maybe<T>>,
    {
        async move {
            match self.await {
                Maybe::Just(value) => Maybe::Just(value),
                Maybe::Nothing => function().await,
            }
        }
    }

    /// Asynchronous [`Maybe::or`].
    fn or_async(self, fallback: T) -> impl Future<Output = Maybe<T>> {
        async move { self.await.or(fallback) }
    }

    /// Asynchronous [`Maybe::or_maybe`].
    ///
    /// `fallback` is awaited only when the value is absent; otherwise it is
    /// dropped unpolled.
    fn or_maybe_async<Fut>(self, fallback: Fut) -> impl Future<Output = Maybe<T>>
    where
        Fut: IntoFuture<Output = Maybe<T>>,
    {
        async move {
            match self.await {
                Maybe::Just(value) => Maybe::Just(value),
                Maybe::Nothing => fallback.await,
            }
        }
    }

    /// Asynchronous [`Maybe::to_outcome`].
    fn to_outcome_async<E>(self, error: E) -> impl Future<Output = Outcome<T, E>> {
        async move { self.await.to_outcome(error) }
    }

    /// Asynchronous [`Maybe::to_outcome_with`]; the error is built only when
    /// the value is absent.
    fn to_outcome_with_async<E, F, Fut>(self, error_function: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = E>,
    {
        async move {
            match self.await {
                Maybe::Just(value) => Outcome::Success(value),
                Maybe::Nothing => Outcome::Failure(error_function().await),
            }
        }
    }

    /// Asynchronous [`Maybe::match_with`].
    fn match_async<R, F, G, FutJ, FutN>(self, on_just: F, on_nothing: G) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> FutJ,
        G: FnOnce() -> FutN,
        FutJ: IntoFuture<Output = R>,
        FutN: IntoFuture<Output = R>,
    {
        async move {
            match self.await {
                Maybe::Just(value) => on_just(value).await,
                Maybe::Nothing => on_nothing().await,
            }
        }
    }

    /// Asynchronous [`Maybe::finally`].
    fn finally_async<R, F, Fut>(self, function: F) -> impl Future<Output = R>
    where
        F: FnOnce(Maybe<T>) -> Fut,
        Fut: IntoFuture<Output = R>,
    {
        async move { function(self.await).await }
    }
}

impl<R, T> MaybeFutureExt<T> for R where R: IntoFuture<Output = Maybe<T>> {}
