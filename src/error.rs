use thiserror::Error;

/// Top-level error type for the anageo kernel.
#[derive(Debug, Error)]
pub enum AnageoError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by matrix algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The determinant is exactly zero, so no inverse exists.
    #[error("this {dimension}x{dimension} matrix is singular and can't be inverted")]
    Singular { dimension: usize },
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`AnageoError`].
pub type Result<T> = std::result::Result<T, AnageoError>;
