pub mod host;
pub mod input;

pub use host::*;
pub use input::*;
