//! `sightline.toml` settings and their merge with command-line flags.

use std::error::Error;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sightline_fov::Algorithm;
use sightline_geom::Coord;
use sightline_map::Legend;
use sightline_map::caves::CaveParams;

pub const DEFAULT_CONFIG_PATH: &str = "sightline.toml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Map file to load when no `--map` / `--generate` flag is given.
    #[serde(default)]
    pub map: Option<PathBuf>,
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Negative means unbounded.
    #[serde(default = "default_radius")]
    pub radius: i32,
    #[serde(default)]
    pub at: Option<[i32; 2]>,
    #[serde(default)]
    pub legend: Legend,
    #[serde(default)]
    pub caves: CaveParams,
}

fn default_radius() -> i32 {
    12
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map: None,
            algorithm: Algorithm::default(),
            radius: default_radius(),
            at: None,
            legend: Legend::default(),
            caves: CaveParams::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {}", path.display(), e))?;
        let cfg = Self::from_toml_str(&text)
            .map_err(|e| format!("parsing {}: {}", path.display(), e))?;
        log::debug!("loaded config from {:?}", path);
        Ok(cfg)
    }

    /// An explicit path must exist; the default path is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match explicit {
            Some(p) => Self::load(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG_PATH);
                if p.is_file() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Command-line values that override the config file when present.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub map: Option<PathBuf>,
    pub generate: bool,
    pub seed: Option<i32>,
    pub algorithm: Option<Algorithm>,
    pub radius: Option<i32>,
    pub at: Option<Coord>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapSource {
    File(PathBuf),
    Caves(CaveParams),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub source: MapSource,
    pub algorithm: Algorithm,
    pub radius: i32,
    /// `None` falls back to the map's marked origin, then its centre.
    pub at: Option<Coord>,
    pub legend: Legend,
}

impl Settings {
    pub fn resolve(cfg: AppConfig, cli: Overrides) -> Self {
        let mut caves = cfg.caves;
        if let Some(seed) = cli.seed {
            caves.seed = seed;
        }
        let source = if cli.generate {
            MapSource::Caves(caves)
        } else {
            match cli.map.or(cfg.map) {
                Some(path) => MapSource::File(path),
                None => MapSource::Caves(caves),
            }
        };
        Self {
            source,
            algorithm: cli.algorithm.unwrap_or(cfg.algorithm),
            radius: cli.radius.unwrap_or(cfg.radius),
            at: cli.at.or(cfg.at.map(|[x, y]| Coord::new(x, y))),
            legend: cfg.legend,
        }
    }
}

/// Parses `X,Y` (spaces allowed around either number).
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {:?}: {}", s, e))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {:?}: {}", s, e))?;
    Ok(Coord::new(x, y))
}
