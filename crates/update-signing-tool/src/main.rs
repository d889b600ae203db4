//! `update-signing` — manage and use EdDSA update-signing secrets.

mod keygen;
mod public_key;
mod sign;
mod verify;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Sign software updates with an Ed25519 secret.
///
/// Secrets are stored as base64 text holding either a 32-byte seed or a
/// 96-byte legacy expanded key; both are accepted everywhere.
#[derive(Parser)]
#[command(name = "update-signing", version, about)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new signing secret.
    GenerateKey {
        /// Output path for the secret (defaults to the user config directory).
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the public key for a stored secret.
    PublicKey {
        /// Path to the base64 secret file.
        #[arg(long, env = "UPDATE_SIGNING_KEY_FILE")]
        key_file: PathBuf,
    },

    /// Sign an update archive.
    Sign {
        /// Path to the base64 secret file.
        #[arg(long, env = "UPDATE_SIGNING_KEY_FILE")]
        key_file: PathBuf,
        /// Archive to sign.
        file: PathBuf,
        /// Print the signature as JSON instead of feed attributes.
        #[arg(long)]
        json: bool,
    },

    /// Verify an update archive against a signature.
    Verify {
        /// Base64 public key of the signer.
        #[arg(long)]
        public_key: String,
        /// Archive to verify.
        file: PathBuf,
        /// Base64 signature.
        signature: String,
        /// Signed length in bytes (defaults to the archive's size).
        #[arg(long)]
        length: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    match cli.command {
        Command::GenerateKey { output } => keygen::run(output.as_deref()),
        Command::PublicKey { key_file } => public_key::run(&key_file),
        Command::Sign { key_file, file, json } => sign::run(&key_file, &file, json),
        Command::Verify {
            public_key,
            file,
            signature,
            length,
        } => verify::run(&public_key, &file, &signature, length),
    }
}
