use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown key type '{0}'")]
    UnknownKeyType(String),

    #[error("Key field not initialized: missing {0} binding")]
    MissingBinding(&'static str),

    #[error("Key field is not initialized")]
    FieldInert,

    #[error("QR generation failed")]
    QrGeneration,

    #[error("PIX payload missing for payee '{0}'")]
    MissingPayload(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PixError>;
