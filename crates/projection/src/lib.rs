pub mod card;
pub mod dispatch;
pub mod projector;
pub mod recording;
pub mod surfaces;
pub mod symbology;
pub mod viewport;

pub use card::*;
pub use dispatch::*;
pub use projector::*;
pub use surfaces::*;
pub use symbology::*;
pub use viewport::*;
