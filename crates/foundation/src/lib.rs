pub mod geo;
pub mod ordering;
pub mod time;

// Foundation crate: small, well-tested primitives only.
pub use geo::*;
pub use ordering::*;
pub use time::*;
