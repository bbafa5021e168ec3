mod cli;
mod presets;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pixkey",
    about = "PIX key masking, validation and receipts",
    version
)]
enum Cli {
    /// Mask, validate and normalize a key
    Check(CheckArgs),
    /// Print the display form of a key
    Mask(MaskArgs),
    /// List supported key types
    Types,
    /// Generate an HTML receipt with one QR code per payee
    Receipt(ReceiptArgs),
    Init(InitArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Format {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser)]
struct CheckArgs {
    #[arg(long = "type", short = 't', help = "Key type: CPF, CNPJ, CELULAR, EMAIL, ALEATORIA")]
    key_type: String,

    value: String,

    #[arg(long, short, value_enum, default_value = "terminal")]
    format: Format,
}

#[derive(Parser)]
struct MaskArgs {
    #[arg(long = "type", short = 't', help = "Key type: CPF, CNPJ, CELULAR, EMAIL, ALEATORIA")]
    key_type: String,

    value: String,
}

#[derive(Parser)]
struct ReceiptArgs {
    #[arg(long = "type", short = 't', help = "Type of the receiver key")]
    key_type: String,

    #[arg(long, short, help = "Receiver key, masked or not")]
    key: String,

    #[arg(long, short, help = "Receiver name printed on the receipt")]
    name: String,

    #[arg(long, short, help = "JSON file with [{referencia, valor, pix}, ...]")]
    payees: PathBuf,

    #[arg(long, short, default_value = "recibo.html")]
    output: PathBuf,
}

#[derive(Parser)]
struct InitArgs {
    #[arg(long, help = "Overwrite existing pixkey.toml if it already exists")]
    force: bool,
}

#[derive(Parser)]
struct CompletionsArgs {
    #[arg(help = "Target shell: bash, zsh, fish, elvish, powershell")]
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PIXKEY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse() {
        Cli::Check(args) => cli::key::run_check(&args.key_type, &args.value, args.format),
        Cli::Mask(args) => cli::key::run_mask(&args.key_type, &args.value),
        Cli::Types => cli::key::run_types(),
        Cli::Receipt(args) => cli::receipt::run_receipt(
            &args.key_type,
            &args.key,
            &args.name,
            &args.payees,
            &args.output,
        ),
        Cli::Init(args) => cli::init::run_init(args.force),
        Cli::Completions(args) => {
            generate(
                args.shell,
                &mut Cli::command(),
                "pixkey",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
