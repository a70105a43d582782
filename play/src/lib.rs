pub mod play;
pub mod simulate;

pub use crate::play::*;
pub use crate::simulate::*;
