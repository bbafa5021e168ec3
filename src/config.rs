use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::KeyType;
use crate::error::{PixError, Result};

pub const CONFIG_FILE: &str = "pixkey.toml";

static COUNTRY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{1,3}$").expect("country code regex"));

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PixConfig {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub receipt: ReceiptConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    #[serde(default = "default_country_code")]
    pub country_code: String,
    #[serde(default)]
    pub default_type: KeyType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Minimum edge of each QR image, in pixels.
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,
    #[serde(default = "default_true")]
    pub quiet_zone: bool,
}

fn default_true() -> bool {
    true
}

fn default_country_code() -> String {
    "+55".to_string()
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_qr_size() -> u32 {
    150
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            default_type: KeyType::default(),
        }
    }
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            qr_size: default_qr_size(),
            quiet_zone: default_true(),
        }
    }
}

impl PixConfig {
    /// Load `pixkey.toml` from the working directory, falling back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: PixConfig =
            toml::from_str(content).map_err(|e| PixError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !COUNTRY_CODE_RE.is_match(&self.field.country_code) {
            return Err(PixError::Config(format!(
                "country_code must be '+' followed by 1-3 digits, got '{}'",
                self.field.country_code
            )));
        }
        if self.receipt.qr_size == 0 {
            return Err(PixError::Config("qr_size must be greater than zero".to_string()));
        }
        Ok(())
    }
}
