use std::fmt;

use super::tile::Tile;

/// Row-major character matrix addressed by `(x, y)`, i.e. (column, row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Tile]>,
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32, tile: Tile) -> Self {
        let data = vec![tile; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_boundary(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    pub fn is_in_bounds(&self, coord: (u32, u32)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u32, y: u32) -> usize {
        if !self.is_in_bounds((x, y)) {
            panic!(
                "Grid coordinate ({}, {}) is out of bounds for a {}x{} grid",
                x, y, self.width, self.height
            );
        }
        // Overflow-safe on 64-bit targets since width and height are u32
        y as usize * self.width as usize + x as usize
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.data.chunks(self.width as usize)
    }

    /// Copies the grid out as a matrix of characters, indexed `[row][column]`.
    pub fn to_chars(&self) -> Vec<Vec<char>> {
        self.rows()
            .map(|row| row.iter().copied().map(char::from).collect())
            .collect()
    }
}

impl std::ops::Index<(u32, u32)> for Grid {
    type Output = Tile;

    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u32, u32)> for Grid {
    fn index_mut(&mut self, index: (u32, u32)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

impl fmt::Display for Grid {
    /// One line per row, no trailing newline after the last row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 3, Tile::Wall);
        grid[(4, 2)] = Tile::Exit;
        assert_eq!(grid[(4, 2)], Tile::Exit);
        assert_eq!(grid.rows().nth(2).map(|row| row[4]), Some(Tile::Exit));
    }

    #[test]
    fn test_boundary() {
        let grid = Grid::new(5, 3, Tile::Wall);
        assert!(grid.is_boundary(0, 1));
        assert!(grid.is_boundary(4, 1));
        assert!(grid.is_boundary(2, 0));
        assert!(grid.is_boundary(2, 2));
        assert!(!grid.is_boundary(1, 1));
        assert!(!grid.is_boundary(3, 1));
    }

    #[test]
    fn test_to_chars_and_display() {
        let mut grid = Grid::new(3, 2, Tile::Wall);
        grid[(1, 0)] = Tile::Open;
        grid[(2, 1)] = Tile::Start;
        assert_eq!(grid.to_chars(), vec![vec!['#', ' ', '#'], vec!['#', '#', 's']]);
        assert_eq!(grid.to_string(), "# #\n##s");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(3, 3, Tile::Wall);
        let _tile = grid[(3, 0)];
    }
}
