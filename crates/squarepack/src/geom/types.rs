//! Pose types for placed unit squares.
//!
//! - `GeomCfg`: tolerance for the strict (interior-only) overlap predicate.
//! - `Placement`: the `(x, y, angle)` triple exchanged with agents.
//! - `Square`: validated pose with derived corners.
//!
//! Code cross-refs: `sat::overlap`, `bounds::BoundingSquare`

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};
use std::fmt;

use nalgebra::Vector2;
use serde::Serialize;

/// Point in the plane.
pub type Position = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Projections that overlap by at most this much count as touching, not overlapping.
    pub eps_sep: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_sep: 1e-9 }
    }
}

/// Rejected square pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaceError {
    /// Angle outside `[0, π/2)` (or not a number).
    InvalidAngle { angle: f64 },
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::InvalidAngle { angle } => {
                write!(f, "angle {angle} is outside [0, π/2)")
            }
        }
    }
}

impl std::error::Error for PlaceError {}

/// Minimal encoding of a square pose: reference corner plus rotation in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Placement {
    #[inline]
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }
}

/// True iff `angle ∈ [0, π/2)`. A square is symmetric under quarter turns,
/// so this range covers every distinct orientation exactly once.
#[inline]
pub fn angle_in_range(angle: f64) -> bool {
    (0.0..FRAC_PI_2).contains(&angle)
}

/// Unit square placed on the surface.
///
/// Invariants:
/// - `0 <= angle < π/2` (checked by `Square::new`).
/// - Immutable once constructed; the corners are derived on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    position: Position,
    angle: f64,
}

impl Square {
    /// Validate the angle and build the square.
    pub fn new(x: f64, y: f64, angle: f64) -> Result<Self, PlaceError> {
        if !angle_in_range(angle) {
            return Err(PlaceError::InvalidAngle { angle });
        }
        Ok(Self {
            position: Vector2::new(x, y),
            angle,
        })
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Corners of the template `{(0,0),(0,1),(1,1),(1,0)}` rotated
    /// counter-clockwise by `angle` about the reference corner, in that order.
    pub fn corners(&self) -> [Position; 4] {
        let p = self.position;
        let a = self.angle;
        [
            p,
            p + Vector2::new(-a.sin(), a.cos()),
            p + Vector2::new((a + FRAC_PI_4).cos(), (a + FRAC_PI_4).sin()) * SQRT_2,
            p + Vector2::new(a.cos(), a.sin()),
        ]
    }

    #[inline]
    pub fn representation(&self) -> Placement {
        Placement::new(self.position.x, self.position.y, self.angle)
    }

    /// Axis-aligned extent `(min, max)` of the corners.
    pub fn aabb(&self) -> (Position, Position) {
        let cs = self.corners();
        let mut lo = cs[0];
        let mut hi = cs[0];
        for c in &cs[1..] {
            lo = lo.inf(c);
            hi = hi.sup(c);
        }
        (lo, hi)
    }

    /// Strict interior overlap with default tolerances.
    #[inline]
    pub fn overlaps(&self, other: &Square) -> bool {
        super::sat::overlap(self, other, GeomCfg::default())
    }
}

impl TryFrom<Placement> for Square {
    type Error = PlaceError;

    fn try_from(p: Placement) -> Result<Self, Self::Error> {
        Square::new(p.x, p.y, p.angle)
    }
}
