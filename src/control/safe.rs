//! The `*_safe` combinators of [`Outcome`].
//!
//! These behave like [`map`](Outcome::map), [`bind`](Outcome::bind) and
//! [`tap`](Outcome::tap) except that the continuation runs under
//! `catch_unwind`. A panic is converted into `Failure(converter(fault))`.
//! On a `Failure` receiver neither the continuation nor the converter runs.

use super::fault::{Fault, trap};
use super::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Applies a possibly panicking function to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<Vec<i32>, String> = Outcome::success(vec![]);
    /// let first = outcome.map_safe(|items| items[0], |fault| fault.to_string());
    /// assert!(first.is_failure());
    /// ```
    pub fn map_safe<U, F, C>(self, function: F, converter: C) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        C: FnOnce(Fault) -> E,
    {
        match self {
            Self::Success(value) => match trap(|| function(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(fault) => Outcome::Failure(converter(fault)),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a possibly panicking operation that produces an outcome.
    ///
    /// A `Failure` returned normally by `function` is kept as is; only a
    /// panic goes through `converter`.
    pub fn bind_safe<U, F, C>(self, function: F, converter: C) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        C: FnOnce(Fault) -> E,
    {
        match self {
            Self::Success(value) => {
                trap(|| function(value)).unwrap_or_else(|fault| Outcome::Failure(converter(fault)))
            }
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Runs a possibly panicking side effect on the success value.
    ///
    /// If the action panics the value is dropped and the outcome becomes
    /// `Failure(converter(fault))`.
    pub fn tap_safe<F, C>(self, action: F, converter: C) -> Self
    where
        F: FnOnce(&T),
        C: FnOnce(Fault) -> E,
    {
        match self {
            Self::Success(value) => match trap(|| action(&value)) {
                Ok(()) => Self::Success(value),
                Err(fault) => Self::Failure(converter(fault)),
            },
            failure @ Self::Failure(_) => failure,
        }
    }
}
