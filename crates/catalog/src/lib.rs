pub mod event;
pub mod normalize;
pub mod raw;

pub use event::*;
pub use normalize::*;
pub use raw::*;
