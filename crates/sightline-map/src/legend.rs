use serde::Deserialize;

/// Glyphs used to read and draw maps.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Legend {
    #[serde(default = "default_wall")]
    pub wall: char,
    #[serde(default = "default_floor")]
    pub floor: char,
    /// Floor tile that also marks the observer.
    #[serde(default = "default_origin")]
    pub origin: char,
    /// Drawn for tiles outside the field of view.
    #[serde(default = "default_hidden")]
    pub hidden: char,
}

fn default_wall() -> char {
    '#'
}
fn default_floor() -> char {
    '.'
}
fn default_origin() -> char {
    '@'
}
fn default_hidden() -> char {
    ' '
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            wall: default_wall(),
            floor: default_floor(),
            origin: default_origin(),
            hidden: default_hidden(),
        }
    }
}

/// TOML map document:
///
/// ```toml
/// rows = [
///   "#####",
///   "#.@.#",
///   "#####",
/// ]
/// [legend]
/// wall = "#"
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct MapFile {
    #[serde(default)]
    pub legend: Legend,
    pub rows: Vec<String>,
}
