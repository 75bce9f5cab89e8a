//! Integer grid geometry for the field-of-view crates: coordinates, exact slopes, octant mapping.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Sub};

mod octant;
mod slope;

pub use octant::{InvalidOctant, Octant, local_to_map};
pub use slope::Slope;

/// Grid cell. Arithmetic wraps at the `i32` limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance in `i64`, saturating at `i64::MAX` for
    /// points near opposite ends of the `i32` range.
    #[inline]
    pub fn distance_sq(self, rhs: Coord) -> i64 {
        let dx = i64::from(self.x) - i64::from(rhs.x);
        let dy = i64::from(self.y) - i64::from(rhs.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Inclusive Euclidean range test. A negative radius is unbounded.
    #[inline]
    pub fn within_radius(self, center: Coord, radius: i32) -> bool {
        radius < 0 || {
            let r = i64::from(radius);
            self.distance_sq(center) <= r * r
        }
    }

    /// Quarter turn about `center`: (dx, dy) -> (dy, -dx).
    #[inline]
    pub fn rotated_about(self, center: Coord) -> Coord {
        let d = self - center;
        center + Coord::new(d.y, d.x.wrapping_neg())
    }

    /// Mirror across the horizontal line through `center`.
    #[inline]
    pub fn mirrored_about(self, center: Coord) -> Coord {
        Coord::new(self.x, center.y.wrapping_mul(2).wrapping_sub(self.y))
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl Add for Coord {
    type Output = Coord;
    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        *self = *self + rhs;
    }
}

impl Sub for Coord {
    type Output = Coord;
    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
