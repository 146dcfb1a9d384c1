use std::iter::FusedIterator;

use crate::control::Maybe;

/// Sequence searches that report "not found" as [`Maybe::Nothing`].
///
/// Implemented for every `IntoIterator`.
///
/// # Examples
///
/// ```rust
/// use railway::collections::SequenceExt;
/// use railway::control::Maybe;
///
/// let numbers = vec![1, 2, 3, 4];
/// assert_eq!(numbers.iter().try_first(), Maybe::just(&1));
/// assert_eq!(numbers.iter().try_last_by(|n| *n % 2 == 1), Maybe::just(&3));
/// assert_eq!(Vec::<i32>::new().try_first(), Maybe::nothing());
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// The first element, if any.
    fn try_first(self) -> Maybe<Self::Item> {
        Maybe::from_nullable(self.into_iter().next())
    }

    /// The first element satisfying `predicate`, if any.
    fn try_first_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from_nullable(self.into_iter().find(predicate))
    }

    /// The last element, if any.
    fn try_last(self) -> Maybe<Self::Item> {
        Maybe::from_nullable(self.into_iter().last())
    }

    /// The last element satisfying `predicate`, if any.
    fn try_last_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from_nullable(self.into_iter().filter(predicate).last())
    }
}

impl<I: IntoIterator> SequenceExt for I {}

/// Lazy unwrapping of the present values in a sequence of [`Maybe`]s.
///
/// # Examples
///
/// ```rust
/// use railway::collections::ChooseExt;
/// use railway::control::Maybe;
///
/// let maybes = vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)];
/// let present: Vec<i32> = maybes.iter().copied().choose().collect();
/// assert_eq!(present, vec![1, 3]);
///
/// let doubled: Vec<i32> = maybes.into_iter().choose_map(|n| n * 2).collect();
/// assert_eq!(doubled, vec![2, 6]);
/// ```
pub trait ChooseExt<T>: IntoIterator<Item = Maybe<T>> + Sized {
    /// Yields the payload of every `Just`, skipping `Nothing`.
    fn choose(self) -> Choose<Self::IntoIter> {
        Choose {
            source: self.into_iter(),
        }
    }

    /// Yields `selector(value)` for the payload of every `Just`.
    fn choose_map<U, F>(self, selector: F) -> ChooseMap<Self::IntoIter, F>
    where
        F: FnMut(T) -> U,
    {
        ChooseMap {
            source: self.into_iter(),
            selector,
        }
    }
}

impl<I, T> ChooseExt<T> for I where I: IntoIterator<Item = Maybe<T>> {}

/// Iterator returned by [`ChooseExt::choose`].
///
/// Restartable (via `Clone`) exactly when the source iterator is.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Choose<I> {
    source: I,
}

impl<I, T> Iterator for Choose<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.source.by_ref().find_map(Maybe::into_option)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, T> FusedIterator for Choose<I> where I: FusedIterator<Item = Maybe<T>> {}

/// Iterator returned by [`ChooseExt::choose_map`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChooseMap<I, F> {
    source: I,
    selector: F,
}

impl<I, F, T, U> Iterator for ChooseMap<I, F>
where
    I: Iterator<Item = Maybe<T>>,
    F: FnMut(T) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let selector = &mut self.selector;
        self.source
            .by_ref()
            .find_map(|maybe| maybe.into_option().map(&mut *selector))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I: std::fmt::Debug, F> std::fmt::Debug for ChooseMap<I, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ChooseMap")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
