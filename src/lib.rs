//! Perfect maze generation.
//!
//! A maze of `width × height` cells is carved out of a `(2*height+1) × (2*width+1)`
//! character grid by running randomized Kruskal over the cell adjacency graph.
//! The result is a spanning tree: every cell is reachable and there is exactly
//! one path between any two cells.

pub mod error;
pub mod generators;
pub mod maze;

pub use error::MazeError;
pub use generators::{
    disjoint_set::DisjointSet,
    kruskal::{create, create_with_rng},
};
pub use maze::{
    Maze, Orientation, WallSite, get_open_neighbors, grid::Grid, horizontal_wall_endpoints,
    tile::Tile, vertical_wall_endpoints,
};
