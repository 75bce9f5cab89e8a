use crate::Coord;

/// One of the eight 45° wedges around an observer.
///
/// Local coordinates inside a wedge are `(x, y)` with `x >= 1` the distance
/// along the wedge's primary axis and `0 <= y <= x` the lateral offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
    pub const ALL: [Octant; 8] = [
        Octant(0),
        Octant(1),
        Octant(2),
        Octant(3),
        Octant(4),
        Octant(5),
        Octant(6),
        Octant(7),
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Maps octant-local `(x, y)` around `origin` to absolute grid coordinates,
    /// wrapping at the `i32` limits.
    #[inline]
    pub fn to_map(self, x: i32, y: i32, origin: Coord) -> Coord {
        let (nx, ny) = (x.wrapping_neg(), y.wrapping_neg());
        let (dx, dy) = match self.0 {
            0 => (x, ny),
            1 => (y, nx),
            2 => (ny, nx),
            3 => (nx, ny),
            4 => (nx, y),
            5 => (ny, x),
            6 => (y, x),
            _ => (x, y),
        };
        origin + Coord::new(dx, dy)
    }
}

impl TryFrom<i32> for Octant {
    type Error = InvalidOctant;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (0..8).contains(&value) {
            Ok(Octant(value as u8))
        } else {
            Err(InvalidOctant(value))
        }
    }
}

impl From<Octant> for i32 {
    #[inline]
    fn from(o: Octant) -> Self {
        i32::from(o.0)
    }
}

/// Octant index outside `0..=7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidOctant(pub i32);

impl std::fmt::Display for InvalidOctant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid octant {}: must be between 0 and 7 inclusive", self.0)
    }
}

impl std::error::Error for InvalidOctant {}

/// Index-based form of [`Octant::to_map`] for callers holding a raw octant number.
pub fn local_to_map(x: i32, y: i32, origin: Coord, octant: i32) -> Result<Coord, InvalidOctant> {
    Octant::try_from(octant).map(|o| o.to_map(x, y, origin))
}
