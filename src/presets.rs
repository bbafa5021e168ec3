pub const DEFAULT_CONFIG: &str = r#"[field]
# Prepended to mobile keys in their canonical form
country_code = "+55"
# CPF, CNPJ, CELULAR, EMAIL or ALEATORIA
default_type = "CPF"

[receipt]
currency_symbol = "R$"
qr_size = 150
quiet_zone = true
"#;
