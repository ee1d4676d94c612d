//! Curated surface for the CLI and experiments (UNSTABLE).
//!
//! Prefer these re-exports over reaching into submodules; breaking changes are
//! allowed while the environment evolves.

pub use crate::agent::{ActionBounds, Agent, AgentError, RandomAgent};
pub use crate::geom::{
    angle_in_range, overlap, BoundingSquare, GeomCfg, PlaceError, Placement, Position, Square,
};
pub use crate::render::{to_svg, write_svg, RenderCfg};
pub use crate::surface::{PackingSurface, Step};
pub use crate::train::{run_episode, train, train_with, EpisodeStats, TrainCfg};
