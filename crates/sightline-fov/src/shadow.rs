//! Recursive shadow casting.
//!
//! Fastest of the scanners and the least revealing: walls cast hard
//! shadows, so it reads as the most claustrophobic of the four.

use sightline_geom::{Coord, Slope};

use crate::scan::{OctantScan, entry_row, scan_octants};
use crate::{FovAlgorithm, FovMap, VisibleSet};

#[derive(Clone, Copy, Debug, Default)]
pub struct ShadowCast;

impl FovAlgorithm for ShadowCast {
    const NAME: &'static str = "shadow-cast";

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
        let top_y = if top.x == 1 {
            x
        } else {
            (((2 * i64::from(x) + 1) * top.y + top.x - 1) / (2 * top.x)) as i32
        };
        let bottom_y = if bottom.y == 0 { 0 } else { entry_row(x, bottom) };

        let mut was_opaque: Option<bool> = None;
        for y in (bottom_y..=top_y).rev() {
            let in_range = scan.in_range(x, y);
            if in_range {
                scan.reveal(x, y);
            }
            let is_opaque = !in_range || scan.blocks_light(x, y);

            // Last column: nothing beyond it depends on the slopes.
            if x != scan.reach {
                if is_opaque {
                    if was_opaque == Some(false) {
                        let new_bottom = Slope::new(y * 2 + 1, x * 2 - 1);
                        if !in_range || y == bottom_y {
                            bottom = new_bottom;
                            break;
                        }
                        scan_octant(scan, x + 1, top, new_bottom);
                    }
                    was_opaque = Some(true);
                } else {
                    if was_opaque == Some(true) {
                        top = Slope::new(y * 2 + 1, x * 2 + 1);
                    }
                    was_opaque = Some(false);
                }
            }
        }

        if was_opaque != Some(false) {
            break;
        }
        x += 1;
    }
}
