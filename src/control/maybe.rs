//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is exactly one of `Just(T)` or `Nothing`. It shares the
//! combinator vocabulary of [`Outcome`] (`map`, `bind`, `tap`,
//! `match_with`, `finally`) and adds `filter`, the `or` family and
//! [`to_outcome`](Maybe::to_outcome), the only bridge to `Outcome`.
//!
//! # Absence Sentinel
//!
//! [`Maybe::from_nullable`] (and `From<Option<T>>`) turns Rust's absence
//! sentinel, `Option::None`, into `Nothing` and any present value into
//! `Just`. This is the boundary conversion for values that may be missing.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Maybe, Outcome};
//!
//! let port = Maybe::from_nullable(std::env::var("NO_SUCH_VARIABLE_HOPEFULLY").ok())
//!     .bind(|text| Maybe::from_nullable(text.parse::<u16>().ok()))
//!     .or(8080);
//! assert_eq!(port, Maybe::just(8080));
//!
//! let outcome: Outcome<u16, &str> = Maybe::nothing().to_outcome("missing port");
//! assert_eq!(outcome, Outcome::failure("missing port"));
//! ```

use std::fmt;

use super::error::{Branch, InvalidStateError};
use super::outcome::Outcome;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Examples
///
/// ```rust
/// use railway::control::Maybe;
///
/// let present = Maybe::just(4);
/// assert_eq!(present.filter(|x| x % 2 == 0), Maybe::just(4));
/// assert_eq!(present.filter(|x| x % 2 == 1), Maybe::nothing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a `Maybe` may be `Nothing`, which should be handled"]
pub enum Maybe<T> {
    /// The value is present.
    Just(T),
    /// The value is absent.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Converts a nullable value: `None` becomes `Nothing`, `Some(v)` becomes `Just(v)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::Nothing);
    /// assert_eq!(Maybe::from_nullable(Some(3)), Maybe::Just(3));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    #[must_use]
    pub const fn has_no_value(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Payload Access
    // =========================================================================

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is `Nothing`.
    #[inline]
    pub const fn value(&self) -> Result<&T, InvalidStateError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(InvalidStateError {
                accessor: "value",
                expected: Branch::Just,
                actual: Branch::Nothing,
            }),
        }
    }

    /// Returns the value, consuming the `Maybe`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is `Nothing`.
    #[inline]
    pub fn into_value(self) -> Result<T, InvalidStateError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(InvalidStateError {
                accessor: "into_value",
                expected: Branch::Just,
                actual: Branch::Nothing,
            }),
        }
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the value, or `default` if absent.
    #[inline]
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the value, or computes one if absent.
    #[inline]
    #[must_use]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies a function to the value if present.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains an operation that may itself produce no value.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Runs a side effect on the value if present.
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            action(value);
        }
        self
    }

    /// Keeps the value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Replaces an absent value with `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::nothing().or(1), Maybe::just(1));
    /// assert_eq!(Maybe::just(2).or(1), Maybe::just(2));
    /// ```
    #[inline]
    pub fn or(self, fallback: T) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => Self::Just(fallback),
        }
    }

    /// Replaces an absent value with another `Maybe`.
    #[inline]
    pub fn or_maybe(self, fallback: Self) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => fallback,
        }
    }

    /// Replaces an absent value with a lazily computed `Maybe`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => function(),
        }
    }

    /// Converts into an [`Outcome`], failing with `error` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::just(1).to_outcome("none"), Outcome::success(1));
    /// assert_eq!(Maybe::<i32>::nothing().to_outcome("none"), Outcome::failure("none"));
    /// ```
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        self.to_outcome_with(|| error)
    }

    /// Converts into an [`Outcome`], computing the error only when absent.
    #[inline]
    pub fn to_outcome_with<E, F>(self, error_function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error_function()),
        }
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Eliminates the `Maybe` by applying exactly one of two functions.
    #[inline]
    pub fn match_with<R, F, G>(self, on_just: F, on_nothing: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Hands the whole `Maybe` to `function`, whatever its branch.
    #[inline]
    pub fn finally<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the value, or `T::default()` if absent.
    #[inline]
    #[must_use]
    pub fn value_or_default(self) -> T {
        self.value_or_else(T::default)
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_nullable(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone, Default, fmt::Display);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_is_nothing() {
        assert_eq!(Maybe::<i32>::default(), Maybe::Nothing);
    }

    #[rstest]
    fn test_value_on_nothing_fails() {
        let maybe: Maybe<i32> = Maybe::nothing();
        let error = maybe.value().unwrap_err();
        assert_eq!(error.expected, Branch::Just);
        assert_eq!(error.actual, Branch::Nothing);
    }

    #[rstest]
    fn test_or_maybe_and_or_else() {
        assert_eq!(Maybe::nothing().or_maybe(Maybe::just(1)), Maybe::just(1));
        assert_eq!(Maybe::just(2).or_else(|| Maybe::just(1)), Maybe::just(2));
        assert_eq!(Maybe::<i32>::nothing().or_else(Maybe::nothing), Maybe::nothing());
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", Maybe::just(1)), "Just(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::nothing()), "Nothing");
    }

    #[rstest]
    #[case(Maybe::just(1), "Just(1)")]
    #[case(Maybe::nothing(), "Nothing")]
    fn test_display(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(maybe.to_string(), expected);
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let maybe: Maybe<i32> = Some(3).into();
        assert_eq!(maybe.into_option(), Some(3));
        let maybe: Maybe<i32> = None.into();
        assert_eq!(maybe.into_option(), None);
    }
}
