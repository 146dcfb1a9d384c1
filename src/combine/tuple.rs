//! Fixed-arity aggregation over tuples of two to five outcomes.

use crate::control::Outcome;

/// A tuple of outcomes sharing one error type that can be merged into a
/// single outcome of a tuple.
///
/// Implemented for tuples of arity 2 through 5. Branches are inspected left
/// to right and the first `Failure` is returned as is; values after it are
/// discarded.
///
/// # Examples
///
/// ```rust
/// use railway::combine::CombineValues;
/// use railway::control::Outcome;
///
/// let combined = (
///     Outcome::<i32, &str>::success(2),
///     Outcome::<&str, &str>::success("three"),
/// )
///     .combine_values();
/// assert_eq!(combined, Outcome::success((2, "three")));
/// ```
pub trait CombineValues<E> {
    /// The tuple of success values.
    type Values;

    /// Merges the outcomes, first failure wins.
    fn combine_values(self) -> Outcome<Self::Values, E>;
}

/// The asynchronous counterpart of [`CombineValues`], for tuples of
/// `IntoFuture`s (resolved outcomes included).
///
/// Each element is awaited strictly in positional order. When one resolves
/// to `Failure`, the remaining elements are dropped without being awaited,
/// so the reported failure is the first by position, not the first to
/// complete.
#[cfg(feature = "async")]
pub trait CombineValuesAsync<E> {
    /// The tuple of success values.
    type Values;

    /// Awaits and merges the outcomes, first failure wins.
    fn combine_values_async(self) -> impl Future<Output = Outcome<Self::Values, E>>;
}

macro_rules! impl_combine_values {
    ($($name:ident: $value:ident, $pending:ident);+) => {
        impl<E, $($value),+> CombineValues<E> for ($(Outcome<$value, E>,)+) {
            type Values = ($($value,)+);

            fn combine_values(self) -> Outcome<Self::Values, E> {
                let ($($name,)+) = self;
                $(
                    let $name = match $name {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($name,)+))
            }
        }

        #[cfg(feature = "async")]
        impl<E, $($value,)+ $($pending),+> CombineValuesAsync<E> for ($($pending,)+)
        where
            $($pending: IntoFuture<Output = Outcome<$value, E>>,)+
        {
            type Values = ($($value,)+);

            fn combine_values_async(self) -> impl Future<Output = Outcome<Self::Values, E>> {
                let ($($name,)+) = self;
                async move {
                    $(
                        let $name = match $name.await {
                            Outcome::Success(value) => value,
                            Outcome::Failure(error) => return Outcome::Failure(error),
                        };
                    )+
                    Outcome::Success(($($name,)+))
                }
            }
        }
    };
}

impl_combine_values!(first: A, PendingA; second: B, PendingB);
impl_combine_values!(first: A, PendingA; second: B, PendingB; third: C, PendingC);
impl_combine_values!(
    first: A, PendingA;
    second: B, PendingB;
    third: C, PendingC;
    fourth: D, PendingD
);
impl_combine_values!(
    first: A, PendingA;
    second: B, PendingB;
    third: C, PendingC;
    fourth: D, PendingD;
    fifth: F, PendingF
);
