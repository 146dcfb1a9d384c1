//! Fault trapping for the `*_safe` combinator family.
//!
//! A continuation passed to [`Outcome::map_safe`](super::Outcome::map_safe),
//! [`Outcome::bind_safe`](super::Outcome::bind_safe) or
//! [`Outcome::tap_safe`](super::Outcome::tap_safe) may panic. The panic is
//! caught here and handed to a caller-supplied converter as a [`Fault`],
//! which turns it into the failure type of the outcome.
//!
//! Nothing outside the safe family uses this module: every other combinator
//! lets a panicking continuation unwind straight through to the caller.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A panic raised by a continuation inside a safe combinator.
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
///
/// let outcome: Outcome<i32, String> = Outcome::success(1);
/// let result = outcome.map_safe(
///     |_| -> i32 { panic!("division by zero") },
///     |fault| fault.message().to_string(),
/// );
/// assert_eq!(result, Outcome::failure("division by zero".to_string()));
/// ```
pub struct Fault {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl Fault {
    /// Builds a fault from a raw panic payload.
    ///
    /// `&str` and `String` payloads (what `panic!` produces) become the
    /// message; anything else is reported as `"unknown panic"`.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Self { message, payload }
    }

    /// The panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the original panic payload, e.g. for
    /// [`std::panic::resume_unwind`].
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl std::fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Fault")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "continuation panicked: {}", self.message)
    }
}

impl std::error::Error for Fault {}

/// Runs `continuation`, catching a panic as a [`Fault`].
///
/// # Errors
///
/// Returns the [`Fault`] if `continuation` panics.
pub fn trap<R>(continuation: impl FnOnce() -> R) -> Result<R, Fault> {
    catch_unwind(AssertUnwindSafe(continuation))
        .map_err(Fault::from_panic)
        .inspect_err(report)
}

/// Creates the continuation's future with `thunk` and awaits it, catching a
/// panic raised either while the future is created or while it is polled.
///
/// # Errors
///
/// Returns the [`Fault`] if `thunk` panics or the future panics when polled.
#[cfg(feature = "async")]
pub async fn trap_future<F, Fut>(thunk: F) -> Result<Fut::Output, Fault>
where
    F: FnOnce() -> Fut,
    Fut: std::future::IntoFuture,
{
    use futures::FutureExt;

    let pending = trap(thunk)?;
    AssertUnwindSafe(pending.into_future())
        .catch_unwind()
        .await
        .map_err(Fault::from_panic)
        .inspect_err(report)
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn report(fault: &Fault) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        panic = %fault.message,
        "continuation panicked inside a safe combinator; converting to failure"
    );
}
