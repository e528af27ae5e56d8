pub mod grid;
pub mod tile;

use grid::Grid;
use tile::Tile;

/// Orientation of a wall site.
///
/// - `Horizontal`: the wall lies on an even grid row and separates the cell above from the cell below.
/// - `Vertical`: the wall lies on an odd grid row (even column) and separates the cell to the left
///   from the cell to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A removable interior wall position `(x, y)` of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallSite {
    pub x: u32,
    pub y: u32,
}

impl WallSite {
    pub fn new(x: u32, y: u32) -> Self {
        WallSite { x, y }
    }

    pub fn orientation(&self) -> Orientation {
        if self.y % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Indices of the two cells this wall separates, for a maze `width` cells wide.
    /// The first index is always the smaller one (above or left).
    pub fn endpoints(&self, width: u16) -> (usize, usize) {
        match self.orientation() {
            Orientation::Horizontal => horizontal_wall_endpoints(self.x, self.y, width),
            Orientation::Vertical => vertical_wall_endpoints(self.x, self.y, width),
        }
    }
}

/// Cell indices `(above, below)` separated by the horizontal wall at grid position `(x, y)`.
///
/// # Panics
/// If `(x, y)` is not an interior horizontal wall site (`y` even and non-zero, `x` odd).
pub fn horizontal_wall_endpoints(x: u32, y: u32, width: u16) -> (usize, usize) {
    assert!(
        y >= 2 && y % 2 == 0 && x % 2 == 1,
        "({}, {}) is not a horizontal wall site",
        x,
        y
    );
    let width = width as usize;
    let above = ((y as usize - 1) / 2) * width + x as usize / 2;
    (above, above + width)
}

/// Cell indices `(left, right)` separated by the vertical wall at grid position `(x, y)`.
///
/// # Panics
/// If `(x, y)` is not an interior vertical wall site (`y` odd, `x` even and non-zero).
pub fn vertical_wall_endpoints(x: u32, y: u32, width: u16) -> (usize, usize) {
    assert!(
        y % 2 == 1 && x >= 2 && x % 2 == 0,
        "({}, {}) is not a vertical wall site",
        x,
        y
    );
    let left = ((y as usize - 1) / 2) * width as usize + x as usize / 2 - 1;
    (left, left + 1)
}

pub struct Maze {
    grid: Grid,
    width: u16,
    height: u16,
}

impl Maze {
    /// Creates a new maze with the given width and height in cells.
    /// Every wall site starts as a wall and every cell interior starts open.
    pub fn new(width: u16, height: u16) -> Self {
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let grid_height = height as u32 * 2 + 1;
        let grid_width = width as u32 * 2 + 1;
        let mut maze = Maze {
            grid: Grid::new(grid_width, grid_height, Tile::Wall),
            width,
            height,
        };
        (0..height).for_each(|y| {
            (0..width).for_each(|x| {
                maze[(x, y)] = Tile::Open;
            });
        });
        maze
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of cells, i.e. elements of the disjoint-set forest.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The rendered character matrix, `(2*height+1)` rows of `(2*width+1)` characters.
    pub fn to_chars(&self) -> Vec<Vec<char>> {
        self.grid.to_chars()
    }

    /// Checks if the given cell coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Row-major index of the cell at `(x, y)`.
    pub fn cell_index(&self, coord: (u16, u16)) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Entrance cell, top-left.
    pub fn start(&self) -> (u16, u16) {
        (0, 0)
    }

    /// Exit cell, bottom-right.
    pub fn exit(&self) -> (u16, u16) {
        (self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    /// All interior wall sites, in row-major grid order. Border walls are never included.
    ///
    /// There are `(width-1)*height` vertical and `width*(height-1)` horizontal sites.
    pub fn removable_walls(&self) -> Vec<WallSite> {
        let (grid_width, grid_height) = (self.grid.width(), self.grid.height());
        (0..grid_height)
            .flat_map(|y| (0..grid_width).map(move |x| (x, y)))
            .filter(|&(x, y)| !self.grid.is_boundary(x, y))
            // Even row -> horizontal wall on odd columns, odd row -> vertical wall on even columns
            .filter(|&(x, y)| (x + y) % 2 == 1)
            .map(|(x, y)| WallSite::new(x, y))
            .collect()
    }

    /// Checks whether the wall site is still standing.
    pub fn is_wall(&self, site: WallSite) -> bool {
        !self.grid[(site.x, site.y)].is_passable()
    }

    /// Carves a corridor through the wall site.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the site was already open
    ///
    /// # Panics
    /// If `site` is on the border or not a wall site at all.
    pub fn remove_wall(&mut self, site: WallSite) -> bool {
        if self.grid.is_boundary(site.x, site.y) || (site.x + site.y) % 2 == 0 {
            panic!("({}, {}) is not a removable wall site", site.x, site.y);
        }
        if self.is_wall(site) {
            self.grid[(site.x, site.y)] = Tile::Open;
            true
        } else {
            false
        }
    }

    /// Wall site between two orthogonally adjacent cells, if they are adjacent.
    pub fn wall_between(&self, a: (u16, u16), b: (u16, u16)) -> Option<WallSite> {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return None;
        }
        let (ax, ay) = (a.0 as u32 * 2 + 1, a.1 as u32 * 2 + 1);
        let (bx, by) = (b.0 as u32 * 2 + 1, b.1 as u32 * 2 + 1);
        if ax.abs_diff(bx) + ay.abs_diff(by) != 2 {
            return None;
        }
        Some(WallSite::new((ax + bx) / 2, (ay + by) / 2))
    }

    /// Stamps the entrance and exit markers. The exit is stamped last, so it wins on a 1x1 maze.
    pub fn mark_endpoints(&mut self) {
        let start = self.start();
        let exit = self.exit();
        self[start] = Tile::Start;
        self[exit] = Tile::Exit;
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = Tile;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        let grid_index = (index.0 as u32 * 2 + 1, index.1 as u32 * 2 + 1);
        &self.grid[grid_index]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Maze {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let grid_index = (index.0 as u32 * 2 + 1, index.1 as u32 * 2 + 1);
        &mut self.grid[grid_index]
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.grid, f)
    }
}

/// Get the neighbors of a cell that can be reached without crossing a wall.
pub fn get_open_neighbors(
    coord: (u16, u16),
    maze: &Maze,
) -> impl Iterator<Item = (u16, u16)> + '_ {
    let neighbors: Vec<(u16, u16)> = if maze.is_in_bounds(coord) {
        let (x, y) = coord;
        vec![
            // NOTE: wrapping x - 1 to u16::MAX and saturating x + 1 at u16::MAX both land
            // outside the maze (the largest cell index is u16::MAX - 1), so the bounds
            // check filters them out.
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
        ]
    } else {
        vec![]
    };

    neighbors
        .into_iter()
        .filter(move |&n| maze.wall_between(coord, n).is_some_and(|site| !maze.is_wall(site)))
}
