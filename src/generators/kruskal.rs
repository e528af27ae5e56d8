use crate::{
    error::MazeError,
    generators::{disjoint_set::DisjointSet, get_rng},
    maze::{Maze, WallSite},
};
use rand::{Rng, seq::SliceRandom};

/// Generates a perfect maze of `width × height` cells with randomized Kruskal.
///
/// `seed` makes the result reproducible. Without one the generator is seeded from the OS.
pub fn create(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    let mut rng = get_rng(seed);
    create_with_rng(width, height, &mut rng)
}

/// Generates a perfect maze of `width × height` cells, shuffling the wall sites with `rng`.
///
/// The returned grid has `2*height+1` rows and `2*width+1` columns, an entrance `s` in the
/// top-left cell and an exit `e` in the bottom-right cell. On a 1x1 maze both markers fall on
/// the same cell and the exit wins.
pub fn create_with_rng<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    let mut maze = Maze::new(width, height);
    let mut sets = DisjointSet::new(maze.cell_count());

    let mut walls = maze.removable_walls();
    tracing::debug!(
        "[kruskal] Generating {}x{} maze with {} wall sites",
        width,
        height,
        walls.len()
    );
    walls.shuffle(rng);

    span(&mut maze, &mut sets, walls)?;

    tracing::debug!(
        "[kruskal] Spanning tree complete, {} walls carved",
        maze.cell_count() - 1
    );
    maze.mark_endpoints();
    Ok(maze)
}

/// Drains `walls` in order, carving every wall whose two cells are still in different sets,
/// until all cells of `maze` form a single set.
fn span(
    maze: &mut Maze,
    sets: &mut DisjointSet,
    walls: impl IntoIterator<Item = WallSite>,
) -> Result<(), MazeError> {
    let width = maze.width();
    let mut remaining_sets = maze.cell_count();
    let mut walls = walls.into_iter();

    while remaining_sets > 1 {
        let Some(site) = walls.next() else {
            tracing::error!(
                "[kruskal] Ran out of walls with {} disjoint sets left",
                remaining_sets
            );
            return Err(MazeError::Unspanned { remaining_sets });
        };

        let (a, b) = site.endpoints(width);
        // Opening a wall between cells of the same set would close a cycle
        if sets.find(a) != sets.find(b) {
            maze.remove_wall(site);
            sets.union(a, b);
            remaining_sets -= 1;
            tracing::trace!("[kruskal] Carved {:?} joining cells {} and {}", site, a, b);
        }
    }
    Ok(())
}
