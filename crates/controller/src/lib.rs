pub mod refresh;
pub mod source;
pub mod timer;

pub use refresh::*;
pub use source::*;
pub use timer::*;
