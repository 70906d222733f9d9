use std::io::Write;

use tracing::debug;

use crate::frame_pipeline::common::error::{ConversionError, Result};
use crate::frame_pipeline::decode::types::ImageGrid;
use crate::frame_pipeline::tiff::types::ConversionConfig;
use crate::frame_pipeline::tiff::writer::TiffWriter;

/// Writes decoded frames as uncompressed 16-bit grayscale TIFF.
pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(
        &self,
        image: &ImageGrid,
        output: &mut dyn Write,
        _config: &ConversionConfig,
    ) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);

        let width = u32::try_from(image.width).map_err(|_| {
            ConversionError::EncodeError(format!("image width {} exceeds TIFF limits", image.width))
        })?;
        let height = u32::try_from(image.height).map_err(|_| {
            ConversionError::EncodeError(format!(
                "image height {} exceeds TIFF limits",
                image.height
            ))
        })?;

        let mut buffer = Vec::new();

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        encoder
            .write_image::<tiff::encoder::colortype::Gray16>(width, height, &image.data)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn written_tiff_decodes_back_to_the_same_pixels() {
        let image = ImageGrid {
            width: 2,
            height: 2,
            data: vec![0x0000, 0x2800, 0x3000, 0xFFC0],
        };

        let mut encoded = Vec::new();
        StandardTiffWriter
            .write_tiff(&image, &mut encoded, &ConversionConfig::default())
            .unwrap();

        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(&encoded)).unwrap();
        assert_eq!(decoder.dimensions().unwrap(), (2, 2));
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U16(pixels) => assert_eq!(pixels, image.data),
            _ => panic!("expected 16-bit pixel data"),
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn dimensions_beyond_u32_are_an_encode_error() {
        let image = ImageGrid {
            width: u32::MAX as usize + 1,
            height: 1,
            data: Vec::new(),
        };

        let mut encoded = Vec::new();
        let err = StandardTiffWriter
            .write_tiff(&image, &mut encoded, &ConversionConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConversionError::EncodeError(_)));
    }
}
