pub mod expense;
pub mod goal;
pub mod routine;

pub use expense::*;
pub use goal::*;
pub use routine::*;
