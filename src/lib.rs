mod blocks;
mod cartpure;
mod harmonics;
mod shell;

pub use blocks::*;
pub use cartpure::*;
pub use harmonics::*;
pub use shell::*;
