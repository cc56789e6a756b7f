mod landscape;
mod pool;

pub use landscape::*;
pub use pool::*;
