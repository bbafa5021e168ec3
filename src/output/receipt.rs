use std::fmt::Write as _;
use std::path::Path;

use tracing::{debug, error};

use crate::config::ReceiptConfig;
use crate::domain::Payee;
use crate::error::{PixError, Result};
use crate::output::qr::QrEncoder;
use crate::utils::escape_html;

const RECEIPT_STYLE: &str = "ul { list-style: none; padding-left: 5px; } \
.card { display: flex; gap: 8px; margin-bottom: 12px; border: 1px solid #ddd; border-radius: 10px; } \
.qrcode { width: 150px; height: 150px; border-radius: 10px; } \
@media print { @page { size: 40mm auto; margin: 0; } body { width: 40mm; font-size: 10px; } h4 { font-size: 12px; text-align: center; } }";

/// Render an amount like `"12.50"` with a comma decimal separator.
#[must_use]
pub fn format_amount(valor: &str) -> String {
    valor.trim().replacen('.', ",", 1)
}

/// Builds the printable receipt: receiver details followed by one QR card per payee.
#[derive(Debug, Clone)]
pub struct ReceiptGenerator<E> {
    encoder: E,
    currency_symbol: String,
}

impl<E: QrEncoder> ReceiptGenerator<E> {
    pub fn new(encoder: E, config: &ReceiptConfig) -> Self {
        Self {
            encoder,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Render the receipt as HTML.
    ///
    /// Payees are encoded in order and the first failure aborts the whole receipt.
    pub fn generate_html(
        &self,
        key_type_label: &str,
        key: &str,
        payer_name: &str,
        payees: &[Payee],
    ) -> Result<String> {
        let key = escape_html(key);
        let mut cards = String::new();

        for payee in payees {
            if payee.pix.trim().is_empty() {
                error!(referencia = %payee.referencia, "PIX payload missing");
                return Err(PixError::MissingPayload(payee.referencia.clone()));
            }
            let qr = self.encoder.encode(&payee.pix).inspect_err(|e| {
                error!(referencia = %payee.referencia, error = %e, "receipt aborted");
            })?;
            let referencia = escape_html(&payee.referencia);

            let _ = write!(
                cards,
                r#"
    <div class="card">
      <img class="qrcode" src="{qr}" alt="{referencia}" />
      <ul>
        <li><b>Chave Pix:</b> {key}</li>
        <li><b>Referência:</b> {referencia}</li>
        <li><b>Valor:</b> {symbol} {valor}</li>
      </ul>
    </div>"#,
                symbol = escape_html(&self.currency_symbol),
                valor = escape_html(&format_amount(&payee.valor)),
            );
        }

        let nome = escape_html(payer_name);
        let tipo = escape_html(key_type_label);
        debug!(payees = payees.len(), "receipt rendered");

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <title>Recibo de {nome}</title>
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <style>{RECEIPT_STYLE}</style>
</head>
<body>
  <h4>Informações do Recebedor</h4>
  <ul>
    <li><b>Chave PIX:</b> {key}</li>
    <li><b>Nome:</b> {nome}</li>
    <li><b>Tipo de Chave:</b> {tipo}</li>
  </ul>
  <h4>QR Codes</h4>{cards}
</body>
</html>
"#
        ))
    }

    /// Render the receipt and write it to `path`. Nothing is written on failure.
    pub fn write_html(
        &self,
        path: &Path,
        key_type_label: &str,
        key: &str,
        payer_name: &str,
        payees: &[Payee],
    ) -> Result<()> {
        let html = self.generate_html(key_type_label, key, payer_name, payees)?;
        std::fs::write(path, html)?;
        Ok(())
    }
}
