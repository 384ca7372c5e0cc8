pub mod builder;
pub mod model;
pub mod patch;

pub use builder::*;
pub use model::*;
pub use patch::*;
