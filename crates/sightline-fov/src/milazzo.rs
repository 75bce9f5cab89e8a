//! Beveled-corner scanning after Adam Milazzo's roguelike vision algorithm.
//!
//! Slower than shadow casting and diamond walls, but the result looks the
//! most natural around single-tile obstacles: wall corners are treated as
//! beveled, so pillars throw narrow diagonal shadows instead of stair steps.
//!
//! Two precisions are in play. Slope bookkeeping works on half-tile points
//! (`2x`, `2y`); the decision whether a clear boundary tile is shown uses
//! quarter-tile points (`4x`, `4y`) and reveals anything not provably hidden.

use sightline_geom::{Coord, Slope};

use crate::scan::{OctantScan, entry_row, scan_octants};
use crate::{FovAlgorithm, FovMap, VisibleSet};

#[derive(Clone, Copy, Debug, Default)]
pub struct Milazzo;

impl FovAlgorithm for Milazzo {
    const NAME: &'static str = "milazzo";

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
        let bottom_y = bottom_row(scan, x, bottom);

        let mut was_opaque: Option<bool> = None;
        for y in (bottom_y..=top_y).rev() {
            if !scan.in_range(x, y) {
                continue;
            }

            let is_opaque = scan.blocks_light(x, y);
            let is_visible = is_opaque
                || ((y != top_y || top.greater(y * 4 - 1, x * 4 + 1))
                    && (y != bottom_y || bottom.less(y * 4 + 1, x * 4 - 1)));
            if is_visible {
                scan.reveal(x, y);
            }

            if x == scan.reach {
                continue;
            }

            if is_opaque {
                if was_opaque == Some(false) {
                    // Bevel: a wall above lets the new bottom hug the corner.
                    let ny = y * 2 + 1;
                    let nx = if scan.blocks_light(x, y + 1) { x * 2 - 1 } else { x * 2 };
                    if top.greater(ny, nx) {
                        if y == bottom_y {
                            bottom = Slope::new(ny, nx);
                            break;
                        }
                        scan_octant(scan, x + 1, top, Slope::new(ny, nx));
                    } else if y == bottom_y {
                        // Sector closed at its bottom edge: nothing further out is lit.
                        return;
                    }
                }
                was_opaque = Some(true);
            } else {
                if was_opaque == Some(true) {
                    let ny = y * 2 + 1;
                    let nx = if scan.blocks_light(x + 1, y + 1) { x * 2 + 1 } else { x * 2 };
                    // New top at or below the bottom: the sector is empty.
                    if bottom.greater_or_equal(ny, nx) {
                        return;
                    }
                    top = Slope::new(ny, nx);
                }
                was_opaque = Some(false);
            }
        }

        if was_opaque != Some(false) {
            break;
        }
        x += 1;
    }
}

fn top_row<M: FovMap + ?Sized>(scan: &OctantScan<'_, M>, x: i32, top: Slope) -> i32 {
    if top.x == 1 {
        return x;
    }

    let top_y = entry_row(x, top);
    let round_up = if scan.blocks_light(x, top_y) {
        // Top vector clears the wall's upper edge into an open tile above.
        top.greater_or_equal(top_y * 2 + 1, x * 2) && !scan.blocks_light(x, top_y + 1)
    } else {
        // A wall diagonally above-right bevels the corner the vector must pass.
        let ax = if scan.blocks_light(x + 1, top_y + 1) { x * 2 + 1 } else { x * 2 };
        top.greater(top_y * 2 + 1, ax)
    };
    if round_up { top_y + 1 } else { top_y }
}

fn bottom_row<M: FovMap + ?Sized>(scan: &OctantScan<'_, M>, x: i32, bottom: Slope) -> i32 {
    if bottom.y == 0 {
        return 0;
    }

    let bottom_y = entry_row(x, bottom);
    // Bottom vector grazes a wall's upper edge with open space above it.
    if bottom.greater_or_equal(bottom_y * 2 + 1, x * 2)
        && scan.blocks_light(x, bottom_y)
        && !scan.blocks_light(x, bottom_y + 1)
    {
        bottom_y + 1
    } else {
        bottom_y
    }
}
