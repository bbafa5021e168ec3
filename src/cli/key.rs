use anyhow::{Context, Result};
use colored::Colorize;

use pixkey::engine::registry;
use pixkey::{apply_mask, check_with_config, KeyType, PixConfig};

use crate::Format;

pub fn run_check(type_id: &str, value: &str, format: Format) -> Result<()> {
    let config = PixConfig::load().context("Failed to load pixkey.toml")?;
    let check = check_with_config(type_id, value, &config)?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&check)?),
        Format::Terminal => {
            let status = if check.valid {
                "\u{2713} valid".green().bold()
            } else {
                "\u{2717} invalid".red().bold()
            };
            println!("{} {}", check.label.bold(), status);
            println!("  display:   {}", check.display);
            println!("  canonical: {}", check.canonical);
        }
    }

    if !check.valid {
        std::process::exit(1);
    }
    Ok(())
}

pub fn run_mask(type_id: &str, value: &str) -> Result<()> {
    let kind: KeyType = type_id.parse()?;
    println!("{}", apply_mask(value, kind));
    Ok(())
}

pub fn run_types() -> Result<()> {
    println!("{:<10} {:<10} {:<20} Placeholder", "ID", "Label", "Mask");
    println!("{}", "-".repeat(62));
    for config in registry::all() {
        println!(
            "{:<10} {:<10} {:<20} {}",
            config.kind.id(),
            config.label,
            config.mask.unwrap_or("-"),
            config.placeholder
        );
    }
    Ok(())
}
