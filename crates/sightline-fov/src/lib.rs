//! Field-of-view on 2D tile grids.
//!
//! Three octant-recursive scanners ([`ShadowCast`], [`DiamondWalls`],
//! [`Milazzo`]) and a line tracer ([`RayCast`]) share one entry point:
//! given an opacity source, an origin and a radius, return the set of visible
//! cells. A negative radius is unbounded; the origin is always visible.
//! Cell coordinates wrap at the `i32` limits instead of panicking.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sightline_geom::Coord;

mod diamond;
mod map;
mod milazzo;
mod raycast;
mod scan;
mod shadow;

pub use diamond::DiamondWalls;
pub use map::{FnMap, FovMap};
pub use milazzo::Milazzo;
pub use raycast::RayCast;
pub use shadow::ShadowCast;

/// Visible absolute coordinates. Membership is the only meaning; order is arbitrary.
pub type VisibleSet = hashbrown::HashSet<Coord>;

/// Farthest column the octant scanners visit when the radius is unbounded.
/// Maps that block light beyond their edges stop the scan long before this.
pub const UNBOUNDED_REACH: i32 = 4096;

pub trait FovAlgorithm {
    const NAME: &'static str;

    fn compute<M: FovMap + ?Sized>(map: &M, origin: Coord, radius: i32) -> VisibleSet;
}

/// Runtime choice of scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    ShadowCast,
    DiamondWalls,
    Milazzo,
    RayCast,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::ShadowCast,
        Algorithm::DiamondWalls,
        Algorithm::Milazzo,
        Algorithm::RayCast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::ShadowCast => ShadowCast::NAME,
            Algorithm::DiamondWalls => DiamondWalls::NAME,
            Algorithm::Milazzo => Milazzo::NAME,
            Algorithm::RayCast => RayCast::NAME,
        }
    }

    pub fn compute<M: FovMap + ?Sized>(self, map: &M, origin: Coord, radius: i32) -> VisibleSet {
        let visible = match self {
            Algorithm::ShadowCast => ShadowCast::compute(map, origin, radius),
            Algorithm::DiamondWalls => DiamondWalls::compute(map, origin, radius),
            Algorithm::Milazzo => Milazzo::compute(map, origin, radius),
            Algorithm::RayCast => RayCast::compute(map, origin, radius),
        };
        log::trace!(
            target: "fov",
            "{} from {} r={} -> {} visible",
            self.name(),
            origin,
            radius,
            visible.len()
        );
        visible
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        write!(f, "unknown algorithm '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Computes independent observers in parallel. Output order matches `observers`.
pub fn compute_many<M>(algorithm: Algorithm, map: &M, observers: &[(Coord, i32)]) -> Vec<VisibleSet>
where
    M: FovMap + Sync + ?Sized,
{
    log::debug!(
        target: "fov",
        "{} batch of {} observers on {} threads",
        algorithm,
        observers.len(),
        rayon::current_num_threads()
    );
    observers
        .par_iter()
        .map(|&(origin, radius)| algorithm.compute(map, origin, radius))
        .collect()
}

#[cfg(test)]
mod tests;
