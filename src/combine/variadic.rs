//! Variadic aggregation over sequences of outcomes.

use crate::control::{CombineError, Outcome, UnitOutcome};

impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    /// Collects success values until the first failure, which is returned.
    ///
    /// Iteration stops at the first `Failure`; later items are not pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let all: Outcome<Vec<i32>, &str> =
    ///     [Outcome::success(1), Outcome::success(2)].into_iter().collect();
    /// assert_eq!(all, Outcome::success(vec![1, 2]));
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(outcomes: I) -> Self {
        outcomes
            .into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

/// Merges any number of outcomes into one outcome of all their values.
///
/// An empty input yields `Success(vec![])`.
///
/// # Examples
///
/// ```rust
/// use railway::combine::combine_values_all;
/// use railway::control::Outcome;
///
/// let outcomes = vec![
///     Outcome::success(2),
///     Outcome::failure("x"),
///     Outcome::success(4),
/// ];
/// assert_eq!(combine_values_all(outcomes), Outcome::failure("x"));
/// ```
pub fn combine_values_all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Like [`combine_values_all`], discarding the values.
pub fn combine_all<T, E, I>(outcomes: I) -> UnitOutcome<E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes
        .into_iter()
        .map(|outcome| outcome.map(|_| ()))
        .collect()
}

/// Merges a sequence whose slots may be empty.
///
/// Slots are inspected left to right. The first slot that is either empty
/// or a `Failure` decides the result: an empty slot is rejected with
/// [`CombineError::MissingElement`], a failure is returned as the combined
/// outcome. Nothing after that slot is inspected.
///
/// # Errors
///
/// Returns [`CombineError::MissingElement`] for the first empty slot that
/// precedes any failure.
///
/// # Examples
///
/// ```rust
/// use railway::combine::combine_values_slots;
/// use railway::control::{CombineError, Outcome};
///
/// let slots = vec![Some(Outcome::<i32, &str>::success(1)), None];
/// assert_eq!(
///     combine_values_slots(slots),
///     Err(CombineError::MissingElement { index: 1 })
/// );
///
/// let slots = vec![Some(Outcome::<i32, &str>::failure("early")), None];
/// assert_eq!(combine_values_slots(slots), Ok(Outcome::failure("early")));
/// ```
pub fn combine_values_slots<T, E, I>(slots: I) -> Result<Outcome<Vec<T>, E>, CombineError>
where
    I: IntoIterator<Item = Option<Outcome<T, E>>>,
{
    let mut values = Vec::new();
    for (index, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(Outcome::Success(value)) => values.push(value),
            Some(Outcome::Failure(error)) => return Ok(Outcome::Failure(error)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, "rejecting empty slot in combine input");
                return Err(CombineError::MissingElement { index });
            }
        }
    }
    Ok(Outcome::Success(values))
}

/// Awaits any number of outcomes in order and merges them.
///
/// Each element is awaited only after the previous one resolved to
/// `Success`. After the first `Failure` the iterator is not advanced again,
/// so the remaining futures are neither created nor awaited.
#[cfg(feature = "async")]
pub async fn combine_values_all_async<T, E, I, Fut>(pending: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: IntoFuture<Output = Outcome<T, E>>,
{
    let mut values = Vec::new();
    for future in pending {
        match future.await {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(values)
}

/// Like [`combine_values_all_async`], discarding the values.
#[cfg(feature = "async")]
pub async fn combine_all_async<T, E, I, Fut>(pending: I) -> UnitOutcome<E>
where
    I: IntoIterator<Item = Fut>,
    Fut: IntoFuture<Output = Outcome<T, E>>,
{
    combine_values_all_async(pending).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_combine_values_all_empty() {
        let outcomes: Vec<Outcome<i32, String>> = Vec::new();
        assert_eq!(combine_values_all(outcomes), Outcome::success(Vec::new()));
    }

    #[rstest]
    fn test_combine_all_stops_pulling_after_failure() {
        let pulled = Cell::new(0);
        let outcomes = (0..5).map(|n| {
            pulled.set(pulled.get() + 1);
            if n == 1 { Outcome::failure(n) } else { Outcome::success(n) }
        });
        assert_eq!(combine_all(outcomes), Outcome::failure(1));
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_combine_values_slots_all_present() {
        let slots = vec![Some(Outcome::<i32, ()>::success(1)), Some(Outcome::success(2))];
        assert_eq!(combine_values_slots(slots), Ok(Outcome::success(vec![1, 2])));
    }

    #[rstest]
    fn test_combine_values_slots_unbounded_input_leading_failure() {
        let slots = std::iter::repeat(Some(Outcome::<u64, &str>::failure("x"))).take(usize::MAX);
        assert_eq!(combine_values_slots(slots), Ok(Outcome::failure("x")));
    }

    #[rstest]
    fn test_combine_values_slots_unbounded_input_leading_empty_slot() {
        let slots = std::iter::repeat(None::<Outcome<u64, &str>>).take(usize::MAX);
        assert_eq!(
            combine_values_slots(slots),
            Err(CombineError::MissingElement { index: 0 })
        );
    }

    #[cfg(feature = "async")]
    #[rstest]
    #[tokio::test]
    async fn test_combine_values_all_async_unbounded_input_leading_failure() {
        let pending =
            std::iter::repeat_with(|| Outcome::<u64, &str>::failure("x")).take(usize::MAX);
        assert_eq!(combine_values_all_async(pending).await, Outcome::failure("x"));
    }

    #[cfg(feature = "async")]
    #[rstest]
    #[tokio::test]
    async fn test_combine_all_async_unbounded_input_leading_failure() {
        let pending = std::iter::repeat_with(|| std::future::ready(Outcome::<u64, &str>::failure("x")))
            .take(usize::MAX);
        assert_eq!(combine_all_async(pending).await, Outcome::failure("x"));
    }
}
