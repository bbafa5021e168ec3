use serde::{Deserialize, Serialize};

/// One line of a receipt: who pays, how much, and the encoded PIX payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    pub referencia: String,
    /// Decimal amount using `.` as separator, e.g. `"12.50"`.
    pub valor: String,
    #[serde(default)]
    pub pix: String,
}

impl Payee {
    #[must_use]
    pub fn new(
        referencia: impl Into<String>,
        valor: impl Into<String>,
        pix: impl Into<String>,
    ) -> Self {
        Self {
            referencia: referencia.into(),
            valor: valor.into(),
            pix: pix.into(),
        }
    }
}
