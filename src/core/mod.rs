pub mod fit;
pub mod ripple;

pub use fit::*;
pub use ripple::*;
