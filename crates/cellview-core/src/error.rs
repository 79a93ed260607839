use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Image shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column {0} is not numeric")]
    NonNumericColumn(String),

    #[error("Column {column} has {found} rows, expected {expected}")]
    RaggedTable {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Table has no rows")]
    EmptyTable,

    #[error("Expected 3 TIFF images in {}, found {found}", dir.display())]
    WellImageCount { dir: PathBuf, found: usize },

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Failed to list {}: {}", .0.path().display(), .0.error())]
    Glob(#[from] glob::GlobError),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, CellviewError>;
