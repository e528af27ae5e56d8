use std::fmt;

/// A single character position of the rendered maze grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Impassable wall, `#`.
    #[default]
    Wall,
    /// Cell interior or carved corridor, a space.
    Open,
    /// Entrance marker, `s`.
    Start,
    /// Exit marker, `e`.
    Exit,
}

impl Tile {
    pub fn as_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => ' ',
            Tile::Start => 's',
            Tile::Exit => 'e',
        }
    }

    /// Whether the tile can be walked through. Markers sit on open cells.
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl From<Tile> for char {
    fn from(tile: Tile) -> Self {
        tile.as_char()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
