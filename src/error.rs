/// Errors produced by grid operations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GridError {
    /// A coordinate pair outside `0..width` × `0..height`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// World position with a NaN or infinite component.
    #[error("world position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f32, y: f32 },

    /// Negative width or height.
    #[error("invalid grid dimensions {width}x{height}: both must be >= 0")]
    InvalidDimensions { width: i32, height: i32 },

    /// Cell size that is zero, negative, NaN or infinite.
    #[error("invalid cell size {0}: must be finite and > 0")]
    InvalidCellSize(f32),
}

/// Errors produced while loading `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
