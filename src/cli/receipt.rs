use std::path::Path;

use anyhow::{bail, Context, Result};

use pixkey::{check_with_config, Payee, PixConfig, ReceiptGenerator, SvgQrEncoder};

pub fn run_receipt(
    type_id: &str,
    key: &str,
    name: &str,
    payees_path: &Path,
    output: &Path,
) -> Result<()> {
    let config = PixConfig::load().context("Failed to load pixkey.toml")?;

    let check = check_with_config(type_id, key, &config)?;
    if !check.valid {
        bail!("Invalid {} key: {}", check.label, key.trim());
    }

    let content = std::fs::read_to_string(payees_path)
        .with_context(|| format!("Failed to read payees from {}", payees_path.display()))?;
    let payees: Vec<Payee> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid payee list in {}", payees_path.display()))?;
    if payees.is_empty() {
        bail!("No payees in {}", payees_path.display());
    }

    let generator = ReceiptGenerator::new(SvgQrEncoder::from_config(&config.receipt), &config.receipt);
    generator
        .write_html(output, check.label, &check.canonical, name, &payees)
        .with_context(|| format!("Failed to generate receipt {}", output.display()))?;

    println!(
        "\u{2713} Receipt with {} QR code(s) written to {}",
        payees.len(),
        output.display()
    );
    Ok(())
}
