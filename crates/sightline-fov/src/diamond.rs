//! Diamond walls: shadow casting that models walls as diamonds.
//!
//! Nearly as fast as [`ShadowCast`](crate::ShadowCast) but more permissive.
//! A wall sitting on the edge of the lit sector only counts as opaque when the
//! sector actually cuts into its diamond, so walls seen edge-on let more of
//! the room behind them through.

use sightline_geom::{Coord, Slope};

use crate::scan::{OctantScan, entry_row, scan_octants};
use crate::{FovAlgorithm, FovMap, VisibleSet};

#[derive(Clone, Copy, Debug, Default)]
pub struct DiamondWalls;

impl FovAlgorithm for DiamondWalls {
    const NAME: &'static str = "diamond-walls";

    fn compute<M: FovMap + ?Sized>(map: &M, origin: Coord, radius: i32) -> VisibleSet {
        scan_octants(map, origin, radius, |scan| {
            scan_octant(scan, 1, Slope::DIAGONAL, Slope::AXIS)
        })
    }
}

fn scan_octant<M: FovMap + ?Sized>(
    scan: &mut OctantScan<'_, M>,
    mut x: i32,
    mut top: Slope,
    mut bottom: Slope,
) {
    while x <= scan.reach {
        let top_y = top_row(scan, x, top);
        let bottom_y = if bottom.y == 0 { 0 } else { entry_row(x, bottom) };

        let mut was_opaque: Option<bool> = None;
        for y in (bottom_y..=top_y).rev() {
            let in_range = scan.in_range(x, y);
            if in_range {
                scan.reveal(x, y);
            }
            let mut is_opaque = !in_range || scan.blocks_light(x, y);

            // A boundary wall the sector only grazes does not move the slopes.
            if is_opaque
                && ((y == top_y
                    && top.less_or_equal(y * 2 - 1, x * 2)
                    && !scan.blocks_light(x, y - 1))
                    || (y == bottom_y
                        && bottom.greater_or_equal(y * 2 + 1, x * 2)
                        && !scan.blocks_light(x, y + 1)))
            {
                is_opaque = false;
            }

            if x != scan.reach {
                if is_opaque {
                    if was_opaque == Some(false) {
                        let new_bottom = Slope::new(y * 2 + 1, x * 2);
                        if !in_range || y == bottom_y {
                            bottom = new_bottom;
                            break;
                        }
                        scan_octant(scan, x + 1, top, new_bottom);
                    }
                    was_opaque = Some(true);
                } else {
                    if was_opaque == Some(true) {
                        top = Slope::new(y * 2 + 1, x * 2);
                    }
                    was_opaque = Some(false);
                }
            }
        }

        if was_opaque == Some(true) {
            break;
        }
        x += 1;
    }
}

fn top_row<M: FovMap + ?Sized>(scan: &OctantScan<'_, M>, x: i32, top: Slope) -> i32 {
    if top.x == 1 {
        return x;
    }

    let mut top_y = entry_row(x, top);
    // Candidate row edge, pre-scaled by the run of `top`.
    let ay = i64::from(top_y * 2 + 1) * top.x;
    if scan.blocks_light(x, top_y) {
        if top.greater_or_equal(ay, x * 2) {
            top_y += 1;
        }
    } else if top.greater(ay, x * 2 + 1) {
        top_y += 1;
    }
    top_y
}
