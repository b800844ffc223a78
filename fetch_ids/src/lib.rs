pub mod ids;
pub mod kind;

pub use ids::*;
pub use kind::*;
