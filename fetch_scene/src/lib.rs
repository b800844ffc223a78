pub mod arena;
pub mod node;
pub mod provider;
pub mod scene_set;

pub use arena::*;
pub use node::*;
pub use provider::*;
pub use scene_set::*;
