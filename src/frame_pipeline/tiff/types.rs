//! Conversion configuration types

use crate::frame_pipeline::decode::SensorMode;

/// Configuration for raw frame to TIFF conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Sensor readout mode describing the dump format and raster shape
    pub mode: SensorMode,
    /// Whether to validate raster dimensions before decoding
    pub validate_dimensions: bool,
    /// File extension (without dot) that batch conversion looks for,
    /// matched case-insensitively
    pub raw_extension: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mode: SensorMode::default(),
            validate_dimensions: true,
            raw_extension: "raw".to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    mode: Option<SensorMode>,
    validate_dimensions: Option<bool>,
    raw_extension: Option<String>,
}

impl ConversionConfigBuilder {
    pub fn mode(mut self, mode: SensorMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn raw_extension(mut self, extension: impl Into<String>) -> Self {
        self.raw_extension = Some(extension.into());
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            mode: self.mode.unwrap_or(default.mode),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            raw_extension: self.raw_extension.unwrap_or(default.raw_extension),
        }
    }
}
