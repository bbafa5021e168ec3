use crate::domain::KeyType;
use crate::utils::digits_only;

/// Transmissible form of a key as expected by the payload encoder.
///
/// Numeric keys lose their separators, mobile numbers get `country_code`
/// prepended, e-mails are lower-cased and random keys are only trimmed.
#[must_use]
pub fn canonical_form(kind: KeyType, text: &str, country_code: &str) -> String {
    match kind {
        KeyType::Cpf | KeyType::Cnpj => digits_only(text),
        KeyType::Celular => format!("{country_code}{}", digits_only(text)),
        KeyType::Email => text.trim().to_lowercase(),
        KeyType::Aleatoria => text.trim().to_string(),
    }
}
