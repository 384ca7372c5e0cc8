pub mod governor;
pub mod limits;
pub mod usage;

pub use governor::*;
pub use limits::*;
pub use usage::*;
