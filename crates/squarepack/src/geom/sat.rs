//! Strict overlap test for placed squares (separating-axis theorem).
//!
//! Two convex polygons have disjoint interiors iff some edge normal of either
//! polygon separates their projections. For squares only two normals per
//! square are distinct, so four axes suffice.
//!
//! eps policy: projections that overlap by at most `eps_sep` are treated as
//! touching, so shared edges and vertices never count as overlap.

use super::types::{GeomCfg, Position, Square};

/// Edge normals of a square (unit length, one per pair of parallel edges).
#[inline]
fn axes(sq: &Square) -> [Position; 2] {
    let a = sq.angle();
    [
        Position::new(a.cos(), a.sin()),
        Position::new(-a.sin(), a.cos()),
    ]
}

#[inline]
fn project(corners: &[Position; 4], axis: &Position) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for c in corners {
        let t = c.dot(axis);
        lo = lo.min(t);
        hi = hi.max(t);
    }
    (lo, hi)
}

#[inline]
fn separated_on(ca: &[Position; 4], cb: &[Position; 4], axis: &Position, eps: f64) -> bool {
    let (a_lo, a_hi) = project(ca, axis);
    let (b_lo, b_hi) = project(cb, axis);
    a_hi <= b_lo + eps || b_hi <= a_lo + eps
}

/// True iff the interiors of `a` and `b` intersect. Symmetric in its arguments.
pub fn overlap(a: &Square, b: &Square, cfg: GeomCfg) -> bool {
    // Cheap reject on axis-aligned extents; never changes the result.
    let (a_lo, a_hi) = a.aabb();
    let (b_lo, b_hi) = b.aabb();
    if a_hi.x <= b_lo.x + cfg.eps_sep
        || b_hi.x <= a_lo.x + cfg.eps_sep
        || a_hi.y <= b_lo.y + cfg.eps_sep
        || b_hi.y <= a_lo.y + cfg.eps_sep
    {
        return false;
    }
    let ca = a.corners();
    let cb = b.corners();
    !axes(a)
        .iter()
        .chain(axes(b).iter())
        .any(|axis| separated_on(&ca, &cb, axis, cfg.eps_sep))
}
