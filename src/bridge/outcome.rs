use std::future::{Future, IntoFuture};

use crate::control::{Fault, Outcome, trap_future};

/// Asynchronous combinators for anything that resolves to an [`Outcome`].
///
/// Implemented for every `R: IntoFuture<Output = Outcome<T, E>>`, which
/// includes `Outcome<T, E>` itself and every `Future` producing one.
///
/// The returned futures are lazy: nothing, not even the receiver, runs
/// until they are awaited.
///
/// # Examples
///
/// ```rust
/// use railway::bridge::OutcomeFutureExt;
/// use railway::control::Outcome;
/// use std::future::ready;
///
/// # futures::executor::block_on(async {
/// let pending = async { Outcome::<i32, String>::success(5) };
/// let text = pending
///     .ensure_async(|v| ready(*v > 0), "neg".to_string())
///     .map_async(|v| async move { v + 10 })
///     .match_async(
///         |v| ready(format!("Success => {v}")),
///         |e| ready(format!("Fail => {e}")),
///     )
///     .await;
/// assert_eq!(text, "Success => 15");
/// # });
/// ```
pub trait OutcomeFutureExt<T, E>: IntoFuture<Output = Outcome<T, E>> + Sized {
    /// Asynchronous [`Outcome::map`].
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(function(value).await),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    /// Asynchronous [`Outcome::bind`].
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Outcome<U, E>>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => function(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    /// Asynchronous [`Outcome::tap`].
    ///
    /// The action receives a borrow of the value; the future it returns
    /// cannot hold on to that borrow, so copy out what it needs first.
    fn tap_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        async move {
            let outcome = self.await;
            if let Outcome::Success(value) = &outcome {
                action(value).await;
            }
            outcome
        }
    }

    /// Asynchronous [`Outcome::ensure`].
    fn ensure_async<P, Fut>(self, predicate: P, error: E) -> impl Future<Output = Outcome<T, E>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => {
                    if predicate(&value).await {
                        Outcome::Success(value)
                    } else {
                        Outcome::Failure(error)
                    }
                }
                Outcome::Failure(failure) => Outcome::Failure(failure),
            }
        }
    }

    /// Asynchronous [`Outcome::ensure_with`].
    ///
    /// `error_function` runs only when the predicate rejects the value.
    fn ensure_with_async<P, Fut, F, FutE>(
        self,
        predicate: P,
        error_function: F,
    ) -> impl Future<Output = Outcome<T, E>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
        F: FnOnce(&T) -> FutE,
        FutE: IntoFuture<Output = E>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => {
                    if predicate(&value).await {
                        Outcome::Success(value)
                    } else {
                        Outcome::Failure(error_function(&value).await)
                    }
                }
                Outcome::Failure(failure) => Outcome::Failure(failure),
            }
        }
    }

    /// Asynchronous [`Outcome::check`].
    fn check_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = Outcome<U, E>>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => match function(&value).await {
                    Outcome::Success(_) => Outcome::Success(value),
                    Outcome::Failure(error) => Outcome::Failure(error),
                },
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    /// Asynchronous [`Outcome::map_error`].
    fn map_error_async<F2, F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, F2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = F2>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => Outcome::Failure(function(error).await),
            }
        }
    }

    /// Asynchronous [`Outcome::tap_error`].
    fn tap_error_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&E) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        async move {
            let outcome = self.await;
            if let Outcome::Failure(error) = &outcome {
                action(error).await;
            }
            outcome
        }
    }

    /// Asynchronous [`Outcome::compensate`].
    fn compensate_async<F2, F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, F2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = Outcome<T, F2>>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => function(error).await,
            }
        }
    }

    /// Asynchronous [`Outcome::map_both`].
    fn map_both_async<U, F2, F, G, FutS, FutF>(
        self,
        success_function: F,
        failure_function: G,
    ) -> impl Future<Output = Outcome<U, F2>>
    where
        F: FnOnce(T) -> FutS,
        G: FnOnce(E) -> FutF,
        FutS: IntoFuture<Output = U>,
        FutF: IntoFuture<Output = F2>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(success_function(value).await),
                Outcome::Failure(error) => Outcome::Failure(failure_function(error).await),
            }
        }
    }

    /// Asynchronous [`Outcome::match_with`].
    fn match_async<R, F, G, FutS, FutF>(
        self,
        on_success: F,
        on_failure: G,
    ) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> FutS,
        G: FnOnce(E) -> FutF,
        FutS: IntoFuture<Output = R>,
        FutF: IntoFuture<Output = R>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => on_success(value).await,
                Outcome::Failure(error) => on_failure(error).await,
            }
        }
    }

    /// Asynchronous [`Outcome::finally`].
    fn finally_async<R, F, Fut>(self, function: F) -> impl Future<Output = R>
    where
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: IntoFuture<Output = R>,
    {
        async move { function(self.await).await }
    }

    /// Asynchronous [`Outcome::map_safe`].
    ///
    /// A panic raised while the continuation builds its future, or while
    /// that future is polled, becomes `Failure(converter(fault))`.
    fn map_safe_async<U, F, Fut, C>(
        self,
        function: F,
        converter: C,
    ) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
        C: FnOnce(Fault) -> E,
    {
        async move {
            match self.await {
                Outcome::Success(value) => match trap_future(|| function(value)).await {
                    Ok(mapped) => Outcome::Success(mapped),
                    Err(fault) => Outcome::Failure(converter(fault)),
                },
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    /// Asynchronous [`Outcome::bind_safe`].
    fn bind_safe_async<U, F, Fut, C>(
        self,
        function: F,
        converter: C,
    ) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Outcome<U, E>>,
        C: FnOnce(Fault) -> E,
    {
        async move {
            match self.await {
                Outcome::Success(value) => trap_future(|| function(value))
                    .await
                    .unwrap_or_else(|fault| Outcome::Failure(converter(fault))),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    /// Asynchronous [`Outcome::tap_safe`].
    fn tap_safe_async<F, Fut, C>(self, action: F, converter: C) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = ()>,
        C: FnOnce(Fault) -> E,
    {
        async move {
            match self.await {
                Outcome::Success(value) => match trap_future(|| action(&value)).await {
                    Ok(()) => Outcome::Success(value),
                    Err(fault) => Outcome::Failure(converter(fault)),
                },
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }
}

impl<R, T, E> OutcomeFutureExt<T, E> for R where R: IntoFuture<Output = Outcome<T, E>> {}
