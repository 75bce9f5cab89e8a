/// Boundary ray from the observer as an exact rise/run pair.
///
/// Comparisons against a candidate point `(y, x)` cross-multiply instead of
/// dividing, so they are exact for any integer input. Components are stored
/// as `i64` so products of two grid-scale values never overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slope {
    pub y: i64,
    pub x: i64,
}

impl Slope {
    /// The 45° diagonal, upper bound of every octant scan.
    pub const DIAGONAL: Slope = Slope { y: 1, x: 1 };
    /// The primary axis, lower bound of every octant scan.
    pub const AXIS: Slope = Slope { y: 0, x: 1 };

    #[inline]
    pub fn new(y: impl Into<i64>, x: impl Into<i64>) -> Self {
        Self {
            y: y.into(),
            x: x.into(),
        }
    }

    /// `Y * x > X * y`
    #[inline]
    pub fn greater(self, y: impl Into<i64>, x: impl Into<i64>) -> bool {
        self.y * x.into() > self.x * y.into()
    }

    /// `Y * x >= X * y`
    #[inline]
    pub fn greater_or_equal(self, y: impl Into<i64>, x: impl Into<i64>) -> bool {
        self.y * x.into() >= self.x * y.into()
    }

    /// `Y * x < X * y`
    #[inline]
    pub fn less(self, y: impl Into<i64>, x: impl Into<i64>) -> bool {
        self.y * x.into() < self.x * y.into()
    }

    /// `Y * x <= X * y`
    #[inline]
    pub fn less_or_equal(self, y: impl Into<i64>, x: impl Into<i64>) -> bool {
        self.y * x.into() <= self.x * y.into()
    }
}
