//! Packing surface: the set of placed unit squares.
//!
//! Purpose
//! - Accept a placement only if it keeps every pair of squares interior-disjoint.
//! - Expose the per-timestep transition `step` used by training drivers.
//! - Report the enclosing bounding square and the packing density.
//!
//! Invariants
//! - `squares` is in placement order; no two members overlap (touching allowed).
//! - `place_square` (also behind `step`) and `reset` are the only mutators.
//!
//! Degenerate case: an empty surface reports the `(0,0,0,0)` bounding square and
//! density `0.0`.

use crate::geom::{overlap, BoundingSquare, GeomCfg, PlaceError, Placement, Square};

/// Result of one `step`: post-step state, reward, and whether the square was placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: Vec<Placement>,
    pub reward: f64,
    pub done: bool,
}

/// Collection of non-overlapping unit squares.
#[derive(Clone, Debug, Default)]
pub struct PackingSurface {
    squares: Vec<Square>,
    cfg: GeomCfg,
}

impl PackingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: GeomCfg) -> Self {
        Self {
            squares: Vec::new(),
            cfg,
        }
    }

    /// Remove every placed square. Idempotent.
    pub fn reset(&mut self) {
        self.squares.clear();
    }

    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// True iff `candidate` overlaps none of the placed squares.
    pub fn can_place(&self, candidate: &Square) -> bool {
        self.squares
            .iter()
            .all(|placed| !overlap(placed, candidate, self.cfg))
    }

    /// Place a square at `(x, y)` rotated by `angle`.
    ///
    /// Returns `Ok(false)` and leaves the surface unchanged if the square would
    /// overlap an existing one. An angle outside `[0, π/2)` is an error.
    pub fn place_square(&mut self, x: f64, y: f64, angle: f64) -> Result<bool, PlaceError> {
        Ok(self.insert(Square::new(x, y, angle)?))
    }

    fn insert(&mut self, candidate: Square) -> bool {
        if !self.can_place(&candidate) {
            return false;
        }
        self.squares.push(candidate);
        true
    }

    /// One `(x, y, angle)` triple per placed square, in placement order.
    pub fn state(&self) -> Vec<Placement> {
        self.squares.iter().map(Square::representation).collect()
    }

    /// Try to place `action`; reward is `+1` on success and `-1` on rejection.
    pub fn step(&mut self, action: Placement) -> Result<Step, PlaceError> {
        let done = self.insert(Square::try_from(action)?);
        let reward = if done { 1.0 } else { -1.0 };
        if !done {
            tracing::trace!(x = action.x, y = action.y, angle = action.angle, "rejected");
        }
        Ok(Step {
            state: self.state(),
            reward,
            done,
        })
    }

    /// Smallest axis-aligned square over all corners, anchored at `(min_x, min_y)`.
    pub fn minimal_bounding_square(&self) -> BoundingSquare {
        BoundingSquare::enclosing(&self.squares).unwrap_or_else(BoundingSquare::degenerate)
    }

    /// Placed area over bounding-square area; `0.0` when nothing is placed.
    pub fn packing_density(&self) -> f64 {
        let side = self.minimal_bounding_square().side_len();
        if self.squares.is_empty() || side <= 0.0 {
            return 0.0;
        }
        self.squares.len() as f64 / (side * side)
    }

    /// Pairwise validation of the non-overlap invariant.
    pub fn has_overlaps(&self) -> bool {
        for i in 0..self.squares.len() {
            for j in (i + 1)..self.squares.len() {
                if overlap(&self.squares[i], &self.squares[j], self.cfg) {
                    return true;
                }
            }
        }
        false
    }
}
