/// Errors reported by maze generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Both dimensions must be at least one cell.
    #[error("invalid maze dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimensions { width: u16, height: u16 },
    /// The shuffled wall list was drained while the cells still formed several components.
    #[error("ran out of walls with {remaining_sets} disjoint sets left")]
    Unspanned { remaining_sets: usize },
}
