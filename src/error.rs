use thiserror::Error;

/// Top-level error type for the geosample kernel.
#[derive(Debug, Error)]
pub enum GeosampleError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Errors raised when constructing shapes.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{shape} radius must be finite and non-negative, got {value}")]
    InvalidRadius { shape: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised when reading configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown cap type: '{0}'")]
    UnknownCapType(String),
}

/// Errors raised by sampling operations.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("resolution {parameter} must be positive, got {value}")]
    InvalidResolution { parameter: &'static str, value: usize },
}

/// Convenience type alias for results using [`GeosampleError`].
pub type Result<T> = std::result::Result<T, GeosampleError>;
