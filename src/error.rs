// src/error.rs

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("polygon needs at least 3 distinct, non-collinear vertices (got {vertices})")]
    DegeneratePolygon { vertices: usize },
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("invalid point: {0}")]
    InvalidPoint(String),
    #[error("scan step must be greater than zero")]
    NonPositiveStep,
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("{0}")]
    Usage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
