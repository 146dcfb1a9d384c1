//! Error types for the outcome containers.
//!
//! These errors report programmer mistakes, never domain failures: domain
//! failures travel in the `Failure` branch of an [`Outcome`](super::Outcome)
//! or as [`Maybe::Nothing`](super::Maybe::Nothing).

/// The branch a container was found in (or was expected to be in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `Outcome::Success`.
    Success,
    /// `Outcome::Failure`.
    Failure,
    /// `Maybe::Just`.
    Just,
    /// `Maybe::Nothing`.
    Nothing,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Just => "Just",
            Self::Nothing => "Nothing",
        };
        formatter.write_str(name)
    }
}

/// Represents an attempt to read the payload of a branch that is not present.
///
/// Returned by accessors such as [`Outcome::value`](super::Outcome::value)
/// and [`Outcome::error`](super::Outcome::error) when called on the wrong
/// branch. No accessor ever falls back to a default value.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Branch, InvalidStateError, Outcome};
///
/// let outcome: Outcome<i32, String> = Outcome::failure("boom".to_string());
/// assert_eq!(
///     outcome.value(),
///     Err(InvalidStateError {
///         accessor: "value",
///         expected: Branch::Success,
///         actual: Branch::Failure,
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStateError {
    /// The accessor that was called.
    pub accessor: &'static str,
    /// The branch the accessor requires.
    pub expected: Branch,
    /// The branch the container is actually in.
    pub actual: Branch,
}

impl std::fmt::Display for InvalidStateError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "invalid state: `{}` requires a {} value, but the container is {}",
            self.accessor, self.expected, self.actual
        )
    }
}

impl std::error::Error for InvalidStateError {}

/// Represents a rejected input to the slot-based aggregator.
///
/// See [`combine_values_slots`](crate::combine::combine_values_slots).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombineError {
    /// The slot at `index` held no outcome at all.
    MissingElement {
        /// Zero-based position of the empty slot.
        index: usize,
    },
}

impl std::fmt::Display for CombineError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingElement { index } => {
                write!(formatter, "combine: input slot {index} holds no outcome")
            }
        }
    }
}

impl std::error::Error for CombineError {}
