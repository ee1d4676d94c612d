//! Unit-square packing environment.
//!
//! Components
//! - `geom`: square poses, corner derivation, strict overlap, bounding square.
//! - `surface`: the packing surface ("map") with `step`/`reset` transitions.
//! - `agent`: agent interface and the seeded uniform-random placeholder.
//! - `train`: bounded episode loop.
//! - `render`: SVG output for inspection.

pub mod agent;
pub mod api;
pub mod geom;
pub mod render;
pub mod surface;
pub mod train;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{BoundingSquare, GeomCfg, PlaceError, Placement, Square};
pub use surface::{PackingSurface, Step};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::agent::{ActionBounds, Agent, RandomAgent};
    pub use crate::geom::{overlap, BoundingSquare, GeomCfg, PlaceError, Placement, Square};
    pub use crate::surface::{PackingSurface, Step};
    pub use crate::train::{train, EpisodeStats, TrainCfg};
}
