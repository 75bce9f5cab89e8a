use sightline_geom::Coord;

#[derive(Debug)]
pub enum MapError {
    Empty,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownGlyph {
        row: usize,
        col: usize,
        glyph: char,
    },
    MultipleOrigins {
        first: Coord,
        second: Coord,
    },
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Empty => write!(f, "map has no rows"),
            MapError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} tiles, expected {}",
                row, found, expected
            ),
            MapError::UnknownGlyph { row, col, glyph } => {
                write!(f, "unknown glyph {:?} at row {}, column {}", glyph, row, col)
            }
            MapError::MultipleOrigins { first, second } => {
                write!(f, "more than one origin marker: {} and {}", first, second)
            }
            MapError::Io(e) => write!(f, "map io: {}", e),
            MapError::Parse(e) => write!(f, "map toml: {}", e),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            MapError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::Io(e)
    }
}

impl From<toml::de::Error> for MapError {
    fn from(e: toml::de::Error) -> Self {
        MapError::Parse(e)
    }
}
