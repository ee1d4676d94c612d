//! Unit-square geometry.
//!
//! Purpose
//! - Represent a placed unit square minimally (reference corner + angle) and
//!   derive its corner polygon on demand.
//! - Decide strict interior overlap between two squares (touching is allowed).
//! - Enclose a set of squares in an axis-aligned bounding square.
//!
//! Conventions
//! - Angles are radians in `[0, π/2)`, rotation is counter-clockwise about the
//!   reference corner.
//! - Numerical tolerance lives in `GeomCfg` (`eps_sep`), default `1e-9`.
//!
//! Code cross-refs: `Square`, `overlap`, `BoundingSquare`, `surface::PackingSurface`

mod bounds;
mod sat;
mod types;

pub use bounds::BoundingSquare;
pub use sat::overlap;
pub use types::{angle_in_range, GeomCfg, PlaceError, Placement, Position, Square};
