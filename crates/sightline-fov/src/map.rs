/// Opacity source consulted by every scanner.
///
/// `blocks_light` is queried again on every visit and may be asked about any
/// coordinate, including far outside the real grid. Maps should answer `true`
/// beyond their edges so unbounded scans stop.
pub trait FovMap {
    fn blocks_light(&self, x: i32, y: i32) -> bool;

    /// Only the ray-cast scanner uses the extents, to clip its scan rectangle.
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Cells outside the map are never reported as visible (the origin excepted).
    #[inline]
    fn in_bounds(&self, _x: i32, _y: i32) -> bool {
        true
    }
}

impl<M: FovMap + ?Sized> FovMap for &M {
    #[inline]
    fn blocks_light(&self, x: i32, y: i32) -> bool {
        (**self).blocks_light(x, y)
    }
    #[inline]
    fn width(&self) -> i32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> i32 {
        (**self).height()
    }
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        (**self).in_bounds(x, y)
    }
}

/// Adapts a closure into a map with nominal extents.
#[derive(Clone, Copy, Debug)]
pub struct FnMap<F> {
    width: i32,
    height: i32,
    blocks: F,
}

impl<F> FnMap<F>
where
    F: Fn(i32, i32) -> bool,
{
    pub fn new(width: i32, height: i32, blocks: F) -> Self {
        Self {
            width,
            height,
            blocks,
        }
    }
}

impl<F> FovMap for FnMap<F>
where
    F: Fn(i32, i32) -> bool,
{
    #[inline]
    fn blocks_light(&self, x: i32, y: i32) -> bool {
        (self.blocks)(x, y)
    }
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }
    #[inline]
    fn height(&self) -> i32 {
        self.height
    }
}
