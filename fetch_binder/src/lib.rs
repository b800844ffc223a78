pub mod binder;
pub mod diagnostics;
pub mod resolve;
pub mod undo;

pub use binder::*;
pub use diagnostics::*;
pub use resolve::*;
pub use undo::*;
