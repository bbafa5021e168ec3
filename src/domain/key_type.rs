use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PixError;

/// Character marking a digit slot inside a mask pattern.
pub const MASK_SLOT: char = '0';

/// Kind of PIX key a user can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyType {
    /// Taxpayer ID of a person (11 digits).
    #[default]
    Cpf,
    /// Taxpayer ID of a company (14 digits).
    Cnpj,
    Celular,
    Email,
    /// Opaque token issued by the bank.
    Aleatoria,
}

impl KeyType {
    pub const ALL: [KeyType; 5] = [
        KeyType::Cpf,
        KeyType::Cnpj,
        KeyType::Celular,
        KeyType::Email,
        KeyType::Aleatoria,
    ];

    /// Identifier used by type selectors and config files.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            KeyType::Cpf => "CPF",
            KeyType::Cnpj => "CNPJ",
            KeyType::Celular => "CELULAR",
            KeyType::Email => "EMAIL",
            KeyType::Aleatoria => "ALEATORIA",
        }
    }

    /// Whether the canonical form keeps only the digits of the value.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, KeyType::Cpf | KeyType::Cnpj | KeyType::Celular)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for KeyType {
    type Err = PixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        KeyType::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PixError::UnknownKeyType(wanted.to_string()))
    }
}

/// Static presentation settings of a key type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyTypeConfig {
    pub kind: KeyType,
    /// `None` for free-form types.
    pub mask: Option<&'static str>,
    pub placeholder: &'static str,
    pub help: Option<&'static str>,
    pub label: &'static str,
}

impl KeyTypeConfig {
    /// Number of digit slots in the mask, zero when the type is free-form.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.mask
            .map_or(0, |mask| mask.chars().filter(|&c| c == MASK_SLOT).count())
    }
}
