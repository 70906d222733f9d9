//! Raster assembly

use crate::frame_pipeline::common::error::{ConversionError, Result};
use crate::frame_pipeline::decode::types::ImageGrid;

/// Reshapes a flat sample sequence into a row-major grid.
///
/// The first `width` samples become row 0, the next `width` row 1, and so on.
/// The sample count must equal `width * height` exactly; a mismatch reliably
/// means the caller's width/height do not match the sensor mode that produced
/// the dump, and a truncated or padded image would hide that, so it is a hard
/// [`ConversionError::DimensionMismatch`].
pub fn assemble_grid(samples: Vec<u16>, width: usize, height: usize) -> Result<ImageGrid> {
    if width == 0 || height == 0 {
        return Err(ConversionError::InvalidDimensions(width, height));
    }
    let expected = width
        .checked_mul(height)
        .ok_or(ConversionError::InvalidDimensions(width, height))?;
    if samples.len() != expected {
        return Err(ConversionError::DimensionMismatch {
            samples: samples.len(),
            width,
            height,
        });
    }

    Ok(ImageGrid {
        width,
        height,
        data: samples,
    })
}
