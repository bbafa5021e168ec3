use base64::{engine::general_purpose::STANDARD, Engine as _};
use qrcode::render::svg;
use qrcode::QrCode;
use tracing::warn;

use crate::config::ReceiptConfig;
use crate::error::{PixError, Result};

/// Turns a PIX payload into an image that can be embedded in a document.
pub trait QrEncoder {
    /// Encode `text` as an image data URI.
    ///
    /// Failures carry no detail and must not be retried for the same text.
    fn encode(&self, text: &str) -> Result<String>;
}

/// Renders QR codes as SVG, returned as `data:image/svg+xml;base64,...`.
#[derive(Debug, Clone)]
pub struct SvgQrEncoder {
    pub size: u32,
    pub quiet_zone: bool,
}

impl Default for SvgQrEncoder {
    fn default() -> Self {
        Self::from_config(&ReceiptConfig::default())
    }
}

impl SvgQrEncoder {
    #[must_use]
    pub fn from_config(config: &ReceiptConfig) -> Self {
        Self {
            size: config.qr_size,
            quiet_zone: config.quiet_zone,
        }
    }
}

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, text: &str) -> Result<String> {
        let code = QrCode::new(text.as_bytes()).map_err(|e| {
            warn!(error = %e, len = text.len(), "QR encoding failed");
            PixError::QrGeneration
        })?;

        let image = code
            .render::<svg::Color<'_>>()
            .min_dimensions(self.size, self.size)
            .quiet_zone(self.quiet_zone)
            .build();

        Ok(format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(image.as_bytes())
        ))
    }
}
