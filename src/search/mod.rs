//! The scheduler-facing side of the strategy layer.
//!
//! Scheduling, utility and convergence live elsewhere. What lives here
//! is the loop they all share: sample candidates from the current
//! strategy, keep what is adoptable, and move on a clear improvement.

mod round;
mod search;

pub use round::*;
pub use search::*;
