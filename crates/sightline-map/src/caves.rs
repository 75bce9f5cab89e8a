//! Noise-threshold cave maps for demos and benchmarks.

use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;
use sightline_geom::Coord;

use crate::{GridMap, Tile};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CaveParams {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    /// Noise above this value becomes wall; noise lies in [-1, 1].
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_width() -> i32 {
    64
}
fn default_height() -> i32 {
    32
}
fn default_seed() -> i32 {
    1337
}
fn default_frequency() -> f32 {
    0.09
}
fn default_threshold() -> f32 {
    0.25
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            seed: default_seed(),
            frequency: default_frequency(),
            threshold: default_threshold(),
        }
    }
}

/// Builds a walled cave and marks the floor tile closest to the centre as the origin.
pub fn generate(params: &CaveParams) -> GridMap {
    let mut noise = FastNoiseLite::with_seed(params.seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(params.frequency));

    let mut map = GridMap::new(params.width, params.height);
    let (w, h) = (map.width(), map.height());
    for y in 0..h {
        for x in 0..w {
            let border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
            let n = noise.get_noise_2d(x as f32, y as f32);
            if border || n > params.threshold {
                map.set(Coord::new(x, y), Tile::Wall);
            }
        }
    }

    let center = Coord::new(w / 2, h / 2);
    let origin = map.floor_tiles().min_by_key(|c| (c.distance_sq(center), *c));
    map.set_marked_origin(origin);
    log::debug!(
        "generated {}x{} cave seed={} floor={} origin={:?}",
        w,
        h,
        params.seed,
        map.floor_tiles().count(),
        origin
    );
    map
}
