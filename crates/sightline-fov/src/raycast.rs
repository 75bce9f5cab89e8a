//! Ray casting: a Bresenham line from the observer to every tile on the
//! perimeter of the scan rectangle.
//!
//! Middling speed and coverage; the discrete lines leave gaps that can look
//! wrong next to walls. [`Milazzo`](crate::Milazzo) costs about the same and
//! looks more natural.

use sightline_geom::Coord;

use crate::{FovAlgorithm, FovMap, VisibleSet};

#[derive(Clone, Copy, Debug, Default)]
pub struct RayCast;

impl FovAlgorithm for RayCast {
    const NAME: &'static str = "ray-cast";

    fn compute<M: FovMap + ?Sized>(map: &M, origin: Coord, radius: i32) -> VisibleSet {
        let mut visible = VisibleSet::default();
        visible.insert(origin);
        if radius == 0 {
            return visible;
        }

        let Some(area) = ScanRect::clipped(map, origin, radius) else {
            return visible;
        };

        for x in area.left..area.right {
            trace_line(map, &mut visible, origin, Coord::new(x, area.top), radius);
            trace_line(map, &mut visible, origin, Coord::new(x, area.bottom - 1), radius);
        }
        for y in area.top + 1..area.bottom - 1 {
            trace_line(map, &mut visible, origin, Coord::new(area.left, y), radius);
            trace_line(map, &mut visible, origin, Coord::new(area.right - 1, y), radius);
        }
        visible
    }
}

/// Half-open rectangle `[left, right) x [top, bottom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScanRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl ScanRect {
    /// Map extents, narrowed to the square around `origin` when the radius is bounded.
    fn clipped<M: FovMap + ?Sized>(map: &M, origin: Coord, radius: i32) -> Option<Self> {
        let mut rect = ScanRect {
            left: 0,
            top: 0,
            right: map.width(),
            bottom: map.height(),
        };
        if radius >= 0 {
            rect.left = rect.left.max(origin.x.saturating_sub(radius));
            rect.top = rect.top.max(origin.y.saturating_sub(radius));
            rect.right = rect.right.min(origin.x.saturating_add(radius).saturating_add(1));
            rect.bottom = rect.bottom.min(origin.y.saturating_add(radius).saturating_add(1));
        }
        (rect.left < rect.right && rect.top < rect.bottom).then_some(rect)
    }
}

fn trace_line<M: FovMap + ?Sized>(
    map: &M,
    visible: &mut VisibleSet,
    origin: Coord,
    target: Coord,
    radius: i32,
) {
    // Lengths in i64: the span between two i32 points can exceed i32::MAX.
    let dx = i64::from(target.x) - i64::from(origin.x);
    let dy = i64::from(target.y) - i64::from(origin.y);
    let mut major_len = dx.abs();
    let mut minor_len = dy.abs();
    let mut major_step = Coord::new(dx.signum() as i32, 0);
    let mut minor_step = Coord::new(0, dy.signum() as i32);
    if major_len < minor_len {
        core::mem::swap(&mut major_len, &mut minor_len);
        core::mem::swap(&mut major_step, &mut minor_step);
    }

    let error_inc = minor_len * 2;
    let error_reset = major_len * 2;
    let mut error = -major_len;
    let mut cur = origin;
    for _ in 0..major_len {
        cur += major_step;
        error += error_inc;
        if error > 0 {
            error -= error_reset;
            cur += minor_step;
        }

        if !cur.within_radius(origin, radius) {
            break;
        }
        if map.in_bounds(cur.x, cur.y) {
            visible.insert(cur);
        }
        if map.blocks_light(cur.x, cur.y) {
            break;
        }
    }
}
