//! Tile grids for the field-of-view scanners: storage, text formats, cave generation.
#![forbid(unsafe_code)]

use std::fs;
use std::path::Path;

use sightline_fov::{FovMap, VisibleSet};
use sightline_geom::Coord;

pub mod caves;
mod error;
mod legend;

pub use error::MapError;
pub use legend::{Legend, MapFile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

impl Tile {
    #[inline]
    pub fn blocks_light(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Row-major tile grid with origin at the top-left. Everything outside the
/// grid behaves as wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    marked_origin: Option<Coord>,
}

impl GridMap {
    /// All-floor grid. Negative extents are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            tiles: vec![Tile::Floor; (width as usize) * (height as usize)],
            marked_origin: None,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        (c.y as usize) * (self.width as usize) + c.x as usize
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Option<Tile> {
        self.contains(c).then(|| self.tiles[self.idx(c)])
    }

    /// Returns false when `c` is outside the grid.
    pub fn set(&mut self, c: Coord, tile: Tile) -> bool {
        if !self.contains(c) {
            return false;
        }
        let i = self.idx(c);
        self.tiles[i] = tile;
        true
    }

    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.get(c).is_none_or(Tile::blocks_light)
    }

    /// Observer position recorded by the map source (`@` in text maps).
    pub fn marked_origin(&self) -> Option<Coord> {
        self.marked_origin
    }

    pub fn set_marked_origin(&mut self, origin: Option<Coord>) {
        self.marked_origin = origin;
    }

    pub fn floor_tiles(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
            .filter(move |&c| !self.is_wall(c))
    }

    /// Parses one row per line. Blank trailing lines are ignored.
    pub fn from_ascii(text: &str, legend: &Legend) -> Result<Self, MapError> {
        let rows: Vec<&str> = text.lines().collect();
        let end = rows
            .iter()
            .rposition(|r| !r.trim().is_empty())
            .map_or(0, |i| i + 1);
        Self::from_rows(&rows[..end], legend)
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S], legend: &Legend) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut map = GridMap::new(width as i32, rows.len() as i32);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let c = Coord::new(col as i32, row as i32);
                let tile = if glyph == legend.wall {
                    Tile::Wall
                } else if glyph == legend.floor {
                    Tile::Floor
                } else if glyph == legend.origin {
                    if let Some(first) = map.marked_origin {
                        return Err(MapError::MultipleOrigins { first, second: c });
                    }
                    map.marked_origin = Some(c);
                    Tile::Floor
                } else {
                    return Err(MapError::UnknownGlyph { row, col, glyph });
                };
                map.set(c, tile);
            }
        }
        Ok(map)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, MapError> {
        let file: MapFile = toml::from_str(text)?;
        Self::from_rows(&file.rows, &file.legend)
    }

    /// Loads `.toml` map documents, or plain text maps with the default legend.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let map = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text)?,
            _ => Self::from_ascii(&text, &Legend::default())?,
        };
        log::debug!(
            "loaded {}x{} map from {:?} (origin {:?})",
            map.width,
            map.height,
            path,
            map.marked_origin
        );
        Ok(map)
    }

    pub fn to_ascii(&self, legend: &Legend) -> String {
        self.render(|c| {
            if Some(c) == self.marked_origin {
                legend.origin
            } else {
                self.glyph(c, legend)
            }
        })
    }

    /// Draws the visible part of the map around `origin`; hidden tiles use `legend.hidden`.
    pub fn render_visibility(&self, visible: &VisibleSet, origin: Coord, legend: &Legend) -> String {
        self.render(|c| {
            if c == origin {
                legend.origin
            } else if visible.contains(&c) {
                self.glyph(c, legend)
            } else {
                legend.hidden
            }
        })
    }

    fn glyph(&self, c: Coord, legend: &Legend) -> char {
        if self.is_wall(c) { legend.wall } else { legend.floor }
    }

    fn render(&self, mut glyph_at: impl FnMut(Coord) -> char) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(glyph_at(Coord::new(x, y)));
            }
            out.push('\n');
        }
        out
    }
}

impl FovMap for GridMap {
    #[inline]
    fn blocks_light(&self, x: i32, y: i32) -> bool {
        self.is_wall(Coord::new(x, y))
    }

    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.contains(Coord::new(x, y))
    }
}
