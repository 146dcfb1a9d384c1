//! Collection helpers that return [`Maybe`](crate::control::Maybe) instead
//! of panicking or returning `Option`.
//!
//! - [`LookupExt::try_find`]: key lookup on `HashMap` / `BTreeMap`
//! - [`SequenceExt`]: `try_first`, `try_first_by`, `try_last`, `try_last_by`
//! - [`ChooseExt`]: lazily unwrap the present values of a `Maybe` sequence

mod lookup;
mod sequence;

pub use lookup::LookupExt;
pub use sequence::{Choose, ChooseExt, ChooseMap, SequenceExt};
