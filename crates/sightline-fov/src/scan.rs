use sightline_geom::{Coord, Octant, Slope};

use crate::{FovMap, UNBOUNDED_REACH, VisibleSet};

/// Per-octant view of one computation: the map, the shared result and the
/// local-to-grid mapping. Scanners recurse with `&mut OctantScan` so every
/// branch writes into the same set.
pub(crate) struct OctantScan<'a, M: FovMap + ?Sized> {
    map: &'a M,
    visible: &'a mut VisibleSet,
    origin: Coord,
    octant: Octant,
    radius: i32,
    /// Last column to scan; equals `radius` when bounded.
    pub(crate) reach: i32,
}

impl<M: FovMap + ?Sized> OctantScan<'_, M> {
    #[inline]
    pub(crate) fn to_map(&self, x: i32, y: i32) -> Coord {
        self.octant.to_map(x, y, self.origin)
    }

    #[inline]
    pub(crate) fn blocks_light(&self, x: i32, y: i32) -> bool {
        let c = self.to_map(x, y);
        self.map.blocks_light(c.x, c.y)
    }

    /// `x² + y² <= r²`, the exact form of `sqrt(x² + y²) <= r`.
    #[inline]
    pub(crate) fn in_range(&self, x: i32, y: i32) -> bool {
        self.radius < 0 || {
            let (x, y, r) = (i64::from(x), i64::from(y), i64::from(self.radius));
            x * x + y * y <= r * r
        }
    }

    #[inline]
    pub(crate) fn reveal(&mut self, x: i32, y: i32) {
        let c = self.to_map(x, y);
        if self.map.in_bounds(c.x, c.y) {
            self.visible.insert(c);
        }
    }
}

/// Runs `scan_octant` over all eight octants into one set seeded with `origin`.
pub(crate) fn scan_octants<M, F>(map: &M, origin: Coord, radius: i32, mut scan_octant: F) -> VisibleSet
where
    M: FovMap + ?Sized,
    F: FnMut(&mut OctantScan<'_, M>),
{
    let mut visible = VisibleSet::default();
    visible.insert(origin);
    if radius == 0 {
        return visible;
    }

    let reach = if radius < 0 { UNBOUNDED_REACH } else { radius };
    for octant in Octant::ALL {
        let mut scan = OctantScan {
            map,
            visible: &mut visible,
            origin,
            octant,
            radius,
            reach,
        };
        scan_octant(&mut scan);
    }
    visible
}

/// Row a slope passes through as it enters column `x` from the left:
/// `((2x - 1) * Y + X) / (2X)`. Inputs are non-negative so division floors.
#[inline]
pub(crate) fn entry_row(x: i32, s: Slope) -> i32 {
    (((2 * i64::from(x) - 1) * s.y + s.x) / (2 * s.x)) as i32
}
