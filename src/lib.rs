pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod utils;

use serde::Serialize;

pub use config::PixConfig;
pub use domain::{KeyType, KeyTypeConfig, Payee};
pub use engine::{apply_mask, KeyField};
pub use error::{PixError, Result as PixResult};
pub use output::{QrEncoder, ReceiptGenerator, SvgQrEncoder};

use engine::{Select, TextInput};

/// Outcome of running a value through a key field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCheck {
    pub kind: KeyType,
    pub label: &'static str,
    pub display: String,
    pub valid: bool,
    pub canonical: String,
    pub raw: String,
}

/// Type `value` into a fresh field of type `type_id` using default configuration.
///
/// # Example
/// ```
/// let check = pixkey::check("CELULAR", "11987654321")?;
/// assert!(check.valid);
/// assert_eq!(check.display, "(11) 98765-4321");
/// assert_eq!(check.canonical, "+5511987654321");
/// # Ok::<(), pixkey::PixError>(())
/// ```
pub fn check(type_id: &str, value: &str) -> PixResult<KeyCheck> {
    check_with_config(type_id, value, &PixConfig::default())
}

/// Same as [`check`] with an explicit configuration.
pub fn check_with_config(type_id: &str, value: &str, config: &PixConfig) -> PixResult<KeyCheck> {
    let mut field = KeyField::new(
        Some(Select::new(type_id)),
        Some(TextInput::default()),
        &config.field,
    );
    field.init()?;
    field.change_type(type_id)?;
    field.attach_validator();
    let valid = field.edit(value)?;

    Ok(KeyCheck {
        kind: field.selected(),
        label: field.config().label,
        display: field.display().to_string(),
        valid,
        canonical: field.canonical()?,
        raw: field.raw()?,
    })
}
