//! Outcome type - the result of an operation that either succeeded or failed.
//!
//! This module provides the `Outcome<T, E>` type, which is exactly one of
//! `Success(T)` or `Failure(E)`, together with the combinators used to build
//! derivation chains over it:
//!
//! | Combinator | `Success` branch | `Failure` branch |
//! |---|---|---|
//! | [`map`](Outcome::map) | becomes `function(value)` | unchanged |
//! | [`bind`](Outcome::bind) | becomes the returned outcome | unchanged |
//! | [`tap`](Outcome::tap) | runs the action, value unchanged | no-op |
//! | [`ensure`](Outcome::ensure) | fails when the predicate is false | unchanged |
//! | [`map_error`](Outcome::map_error) | unchanged | becomes `Failure(function(error))` |
//! | [`match_with`](Outcome::match_with) | `on_success(value)` | `on_failure(error)` |
//! | [`finally`](Outcome::finally) | receives the whole outcome | receives the whole outcome |
//!
//! On the failure branch no continuation is ever invoked. Continuations are
//! assumed to be total: if one panics, the panic propagates to the caller.
//! Use the `*_safe` family to convert panics into failures instead.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_or_else(|_| Outcome::failure("InvalidNumber".to_string()), Outcome::success)
//! }
//!
//! let describe = |input: &str| {
//!     parse(input)
//!         .ensure(|value| *value > 0, "neg".to_string())
//!         .map(|value| value + 10)
//!         .match_with(
//!             |value| format!("Success => {value}"),
//!             |error| format!("Fail => {error}"),
//!         )
//! };
//!
//! assert_eq!(describe("42"), "Success => 52");
//! assert_eq!(describe("abc"), "Fail => InvalidNumber");
//! ```

use std::fmt;

use super::error::{Branch, InvalidStateError};

/// The outcome of an operation: a success value or a failure error.
///
/// The two payloads are mutually exclusive by construction, and an
/// `Outcome` is never mutated in place; every combinator consumes the
/// receiver and builds a new value.
///
/// There is no `From<T>` or `From<E>` conversion, since the direction is
/// ambiguous for `Outcome<String, String>`. Use [`Outcome::success`] and
/// [`Outcome::failure`].
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure error
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::success(21);
/// assert_eq!(success.map(|x| x * 2), Outcome::success(42));
///
/// let failure: Outcome<i32, String> = Outcome::failure("error".to_string());
/// assert!(failure.map(|x| x * 2).is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

/// An outcome that carries no success payload.
pub type UnitOutcome<E> = Outcome<(), E>;

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(1);
    /// assert!(outcome.is_success());
    /// assert!(!outcome.is_failure());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Payload Access
    // =========================================================================

    /// Returns a reference to the success value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(success.value(), Ok(&42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("error".to_string());
    /// assert!(failure.value().is_err());
    /// ```
    #[inline]
    pub const fn value(&self) -> Result<&T, InvalidStateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidStateError {
                accessor: "value",
                expected: Branch::Success,
                actual: Branch::Failure,
            }),
        }
    }

    /// Returns a reference to the failure error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is a `Success`.
    #[inline]
    pub const fn error(&self) -> Result<&E, InvalidStateError> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => Err(InvalidStateError {
                accessor: "error",
                expected: Branch::Failure,
                actual: Branch::Success,
            }),
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is a `Failure`.
    #[inline]
    pub fn into_value(self) -> Result<T, InvalidStateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidStateError {
                accessor: "into_value",
                expected: Branch::Success,
                actual: Branch::Failure,
            }),
        }
    }

    /// Returns the failure error, consuming the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is a `Success`.
    #[inline]
    pub fn into_error(self) -> Result<E, InvalidStateError> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => Err(InvalidStateError {
                accessor: "into_error",
                expected: Branch::Failure,
                actual: Branch::Success,
            }),
        }
    }

    /// Converts into `Option<T>`, discarding the error.
    #[inline]
    #[must_use]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding the value.
    #[inline]
    #[must_use]
    pub fn failure_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    #[inline]
    #[must_use]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure value if this is a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    // =========================================================================
    // Success-Branch Combinators
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// On `Failure` the function is not invoked and the error is carried over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(5);
    /// assert_eq!(success.map(|x| x.to_string()), Outcome::success("5".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains an operation that itself produces an outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let halve = |x: i32| {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure(format!("{x} is odd"))
    ///     }
    /// };
    ///
    /// assert_eq!(Outcome::success(8).bind(halve).bind(halve), Outcome::success(2));
    /// assert_eq!(
    ///     Outcome::success(6).bind(halve).bind(halve),
    ///     Outcome::failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Runs a side effect on the success value and returns the outcome unchanged.
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Turns a success into `Failure(error)` when `predicate` rejects the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(outcome.ensure(|v| *v > 10, "small"), Outcome::failure("small"));
    /// assert_eq!(outcome.ensure(|v| *v > 0, "small"), Outcome::success(5));
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`ensure`](Self::ensure), building the error from the rejected value.
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, error_function: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error_function(&value))
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Runs a fallible check on the success value, keeping the value if it passes.
    ///
    /// The check's own success payload is discarded.
    #[inline]
    pub fn check<U, F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => match function(&value) {
                Outcome::Success(_) => Self::Success(value),
                Outcome::Failure(error) => Self::Failure(error),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    // =========================================================================
    // Failure-Branch Combinators
    // =========================================================================

    /// Applies a function to the failure error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("oops");
    /// assert_eq!(failure.map_error(str::len), Outcome::failure(4));
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Runs a side effect on the failure error and returns the outcome unchanged.
    #[inline]
    pub fn tap_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Recovers from a failure by producing a new outcome from the error.
    ///
    /// A success is passed through and `function` is not invoked.
    #[inline]
    pub fn compensate<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Applies one of two functions depending on the branch.
    #[inline]
    pub fn map_both<U, F2, F, G>(self, success_function: F, failure_function: G) -> Outcome<U, F2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(success_function(value)),
            Self::Failure(error) => Outcome::Failure(failure_function(error)),
        }
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("bad".to_string());
    /// let text = outcome.match_with(|v| v.to_string(), |e| format!("error: {e}"));
    /// assert_eq!(text, "error: bad");
    /// ```
    #[inline]
    pub fn match_with<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Hands the whole outcome to `function`, whatever its branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(3);
    /// assert!(outcome.finally(|o| o.is_success()));
    /// ```
    #[inline]
    pub fn finally<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }
}

impl<E> Outcome<(), E> {
    /// Creates a successful outcome without a payload.
    #[inline]
    pub const fn unit() -> Self {
        Self::Success(())
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or `T::default()` on failure.
    #[inline]
    #[must_use]
    pub fn value_or_default(self) -> T {
        self.value_or_else(|_| T::default())
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, String>: Send, Sync);
