use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{error, info, instrument};

use crate::frame_pipeline::{
    common::error::{ConversionError, Result},
    decode::{FrameDecoder, PackedFrameDecoder},
    tiff::{ConversionConfig, StandardTiffWriter, TiffWriter},
};

/// Outcome of a batch directory conversion.
///
/// Failures do not abort the batch; each file converts independently and ends
/// up in exactly one of the two lists, ordered by input path.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ConversionError)>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct RawToTiffPipeline<D: FrameDecoder, W: TiffWriter> {
    decoder: D,
    writer: W,
    config: ConversionConfig,
}

impl RawToTiffPipeline<PackedFrameDecoder, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Result<Self> {
        Ok(Self {
            decoder: PackedFrameDecoder::new(config.mode)?,
            writer: StandardTiffWriter,
            config,
        })
    }

    /// Replaces the configuration and rebuilds the decoder, so the decoder
    /// and the config always describe the same mode.
    pub fn set_config(&mut self, config: ConversionConfig) -> Result<()> {
        self.decoder = PackedFrameDecoder::new(config.mode)?;
        self.config = config;
        Ok(())
    }
}

impl<D: FrameDecoder, W: TiffWriter> RawToTiffPipeline<D, W> {
    pub fn with_custom(decoder: D, writer: W, config: ConversionConfig) -> Self {
        Self {
            decoder,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let (width, height) = (self.config.mode.width, self.config.mode.height);
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting raw frame to TIFF conversion");

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = self.config.mode.width,
                height = self.config.mode.height
            )
            .entered();
            self.validate_dimensions()?;
        }

        let grid = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.decoder.decode_frame(input_data)?
        };

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_tiff(&grid, output, &self.config)?;
        }

        info!(
            width = grid.width,
            height = grid.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    /// Converts every raw dump in `input_dir` to a TIFF next to it, or under
    /// `output_dir` when given.
    ///
    /// Files are selected by the configured raw extension (case-insensitive)
    /// and processed in parallel; each frame is independent. A file that
    /// fails is reported and skipped, never aborting the rest of the batch.
    #[instrument(skip(self, input_dir, output_dir))]
    pub fn convert_dir<P: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Option<&Path>,
    ) -> Result<BatchReport>
    where
        D: Sync,
        W: Sync,
    {
        let input_dir = input_dir.as_ref();
        let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)
            .map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_dir.display(), e))
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.config.raw_extension))
            })
            .collect();
        // Deterministic report order, independent of scheduling.
        inputs.sort();

        info!(
            dir = %input_dir.display(),
            count = inputs.len(),
            "Starting batch conversion"
        );

        let results: Vec<(PathBuf, Result<()>)> = inputs
            .into_par_iter()
            .map(|input| {
                let output = match output_dir {
                    Some(dir) => dir
                        .join(input.file_name().unwrap_or_default())
                        .with_extension("tiff"),
                    None => input.with_extension("tiff"),
                };
                let result = self.convert_file(&input, &output);
                (input, result)
            })
            .collect();

        let mut report = BatchReport::default();
        for (path, result) in results {
            match result {
                Ok(()) => report.converted.push(path),
                Err(e) => {
                    error!(file = %path.display(), "Conversion failed: {}", e);
                    report.failed.push((path, e));
                }
            }
        }

        info!(
            converted = report.converted.len(),
            failed = report.failed.len(),
            "Batch conversion complete"
        );
        Ok(report)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
