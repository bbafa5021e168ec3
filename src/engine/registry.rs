use crate::domain::{KeyType, KeyTypeConfig};

static KEY_TYPES: [KeyTypeConfig; 5] = [
    KeyTypeConfig {
        kind: KeyType::Cpf,
        mask: Some("000.000.000-00"),
        placeholder: "000.000.000-00",
        help: None,
        label: "CPF",
    },
    KeyTypeConfig {
        kind: KeyType::Cnpj,
        mask: Some("00.000.000/0000-00"),
        placeholder: "00.000.000/0000-00",
        help: None,
        label: "CNPJ",
    },
    KeyTypeConfig {
        kind: KeyType::Celular,
        mask: Some("(00) 00000-0000"),
        placeholder: "(00) 00000-0000",
        help: Some("+55"),
        label: "Celular",
    },
    KeyTypeConfig {
        kind: KeyType::Email,
        mask: None,
        placeholder: "email@exemplo.com",
        help: None,
        label: "E-mail",
    },
    KeyTypeConfig {
        kind: KeyType::Aleatoria,
        mask: None,
        placeholder: "Chave aleatória",
        help: None,
        label: "Aleatória",
    },
];

/// Configuration of a key type.
#[must_use]
pub fn config_for(kind: KeyType) -> &'static KeyTypeConfig {
    match kind {
        KeyType::Cpf => &KEY_TYPES[0],
        KeyType::Cnpj => &KEY_TYPES[1],
        KeyType::Celular => &KEY_TYPES[2],
        KeyType::Email => &KEY_TYPES[3],
        KeyType::Aleatoria => &KEY_TYPES[4],
    }
}

/// Resolve a selector id such as `"CNPJ"`. Returns `None` for unknown ids.
#[must_use]
pub fn lookup(type_id: &str) -> Option<&'static KeyTypeConfig> {
    type_id.parse::<KeyType>().ok().map(config_for)
}

/// All configurations in selector order.
pub fn all() -> impl Iterator<Item = &'static KeyTypeConfig> {
    KEY_TYPES.iter()
}
