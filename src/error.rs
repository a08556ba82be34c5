//! Error types for the life engine and its driver.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("grid {width}x{height} exceeds the limit of {max} cells")]
    TooLarge { width: u32, height: u32, max: usize },

    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("pattern `{pattern}` does not fit a {width}x{height} grid")]
    PatternDoesNotFit {
        pattern: &'static str,
        width: u32,
        height: u32,
    },

    #[error("cell neighbours are already connected")]
    AlreadyConnected,

    #[error("seed density {0} is outside [0, 1]")]
    InvalidDensity(f32),

    #[error("generation interval must be at least 1ms")]
    ZeroInterval,

    #[error("failed to write frame: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
