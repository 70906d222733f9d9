use std::io::Write;

use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::decode::types::ImageGrid;
use crate::frame_pipeline::tiff::types::ConversionConfig;

pub trait TiffWriter {
    fn write_tiff(
        &self,
        image: &ImageGrid,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
