//! Render configuration
//!
//! Settings that used to be process-wide flags live here and travel with
//! the surface, so every draw call sees the same explicit values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default 7-bit I2C address of SH1106/SSD1306 modules (0x3D with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Bars per data burst unless configured otherwise
pub const DEFAULT_BATCH_LIMIT: u8 = 26;

/// Largest supported burst, bounded by the transaction buffer
pub const MAX_BATCH_LIMIT: usize = 64;

/// Surface and text rendering settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// 7-bit I2C address of the controller
    pub address: u8,
    /// Added to every column address (2 for 1.3" SH1106 panels)
    pub column_offset: u8,
    /// Maximum bars in one data burst
    pub batch_limit: u8,
    /// Draw glyphs one column wider and thicker
    pub bold: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            column_offset: 0,
            batch_limit: DEFAULT_BATCH_LIMIT,
            bold: false,
        }
    }
}

impl RenderConfig {
    /// Settings for 1.3" SH1106 modules, whose 128 visible columns start at RAM column 2
    pub fn sh1106_1in3() -> Self {
        Self {
            column_offset: 2,
            ..Self::default()
        }
    }

    /// Same settings with bold text switched on or off
    pub fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    /// Same settings with a different burst size
    pub fn with_batch_limit(self, batch_limit: u8) -> Self {
        Self {
            batch_limit,
            ..self
        }
    }

    /// Effective burst size, clamped to `1..=MAX_BATCH_LIMIT`
    pub fn batch_limit(&self) -> usize {
        usize::from(self.batch_limit).clamp(1, MAX_BATCH_LIMIT)
    }
}

/// Errors from storing or loading a configuration
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Buffer too small for the encoded configuration
    Serialize,
    /// Stored bytes are not a valid configuration
    Deserialize,
}

#[cfg(feature = "serde")]
impl RenderConfig {
    /// Encode as postcard binary, e.g. for a flash record
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode from postcard binary
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}
