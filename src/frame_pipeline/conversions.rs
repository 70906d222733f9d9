//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning raw frame dumps into
//! image files, one at a time or per directory.

mod raw_to_tiff;


pub use raw_to_tiff::{BatchReport, RawToTiffPipeline};
