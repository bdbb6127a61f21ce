use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during face construction
#[derive(Error, Debug)]
pub enum Error {
    #[error("surface carries no exact boundary-representation payload")]
    MissingBrep,

    #[error("outer loop has {0} distinct vertices after cleanup, need at least 3")]
    DegenerateLoop(usize),

    #[error("inner loop {index} has {count} distinct vertices after cleanup, need at least 3")]
    DegenerateInnerLoop { index: usize, count: usize },

    #[error("loop normal is degenerate (zero enclosed area)")]
    DegenerateNormal,

    #[error("triangulation failed: {0}")]
    Triangulation(String),
}
