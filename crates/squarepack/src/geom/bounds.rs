use super::types::{Position, Square};

/// Axis-aligned square enclosing a set of placed squares.
///
/// Invariant: `max_x - min_x == max_y - min_y`. The all-zero value stands for
/// the empty surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingSquare {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingSquare {
    /// The `(0, 0, 0, 0)` square reported when nothing is placed.
    #[inline]
    pub fn degenerate() -> Self {
        Self::default()
    }

    /// Tightest box over all corners of `squares`, widened to a square anchored
    /// at its lower-left corner. `None` if `squares` is empty.
    pub fn enclosing<'a, I>(squares: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Square>,
    {
        let mut it = squares.into_iter();
        let (mut lo, mut hi) = it.next()?.aabb();
        for sq in it {
            let (l, h) = sq.aabb();
            lo = lo.inf(&l);
            hi = hi.sup(&h);
        }
        let side = (hi.x - lo.x).max(hi.y - lo.y);
        Some(Self {
            min_x: lo.x,
            max_x: lo.x + side,
            min_y: lo.y,
            max_y: lo.y + side,
        })
    }

    #[inline]
    pub fn side_len(&self) -> f64 {
        (self.max_x - self.min_x).max(self.max_y - self.min_y)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.side_len() <= 0.0
    }

    /// Corners in counter-clockwise order starting at `(min_x, min_y)`.
    pub fn corners(&self) -> [Position; 4] {
        let s = self.side_len();
        [
            Position::new(self.min_x, self.min_y),
            Position::new(self.min_x + s, self.min_y),
            Position::new(self.min_x + s, self.min_y + s),
            Position::new(self.min_x, self.min_y + s),
        ]
    }
}
