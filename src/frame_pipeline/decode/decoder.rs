use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::decode::types::ImageGrid;

pub trait FrameDecoder {
    fn decode_frame(&self, data: &[u8]) -> Result<ImageGrid>;
}
