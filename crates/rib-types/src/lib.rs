pub mod curve;
pub mod params;
pub mod stats;

pub use curve::*;
pub use params::*;
pub use stats::*;
