use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid render target size {width}x{height}, both dimensions must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("image size {width}x{height} does not fit the PNG encoder")]
    ImageTooLarge { width: usize, height: usize },

    #[error("--width and --height are required when writing to a file")]
    MissingDimensions,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
