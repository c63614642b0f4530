pub mod constants;
pub mod error;
pub mod geometry;
pub mod prize;
pub mod random;
pub mod selection;
pub mod wheel;

pub use error::CatalogError;
pub use geometry::WheelSegment;
pub use prize::{PrizeCatalog, PrizeOption};
pub use random::{RandomSource, ScriptedSource, ThreadRandom};
pub use selection::CumulativeOption;
pub use wheel::{SpinOutcome, SpinState, Wheel};
