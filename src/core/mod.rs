pub mod clock;
pub mod input_adapter;

pub use clock::*;
pub use input_adapter::*;
