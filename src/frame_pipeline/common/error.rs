use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Malformed input: buffer of {len} bytes is not a whole number of {word_bytes}-byte words")]
    MalformedInput { len: usize, word_bytes: usize },

    #[error("Dimension mismatch: {samples} samples do not fill a {width}x{height} grid")]
    DimensionMismatch {
        samples: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid sensor mode: {0}")]
    InvalidMode(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
