//! Budget arithmetic shared by every strategy shape.
//!
//! [`normalize`] is what delegator candidates are built on.
//! [`Rescale`] is the opt-in repair step for candidates that
//! are allowed to overshoot the budget when first drawn.

mod normalize;
mod rescale;

pub use normalize::*;
pub use rescale::*;
