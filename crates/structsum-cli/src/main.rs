//! structsum CLI - compute structural digests of JSON documents and scalars.

use clap::{ArgAction, Parser, Subcommand};
use structsum_core::HashAlgorithm;

mod commands;
mod errors;
mod output;

use commands::{demo, digest, scalar};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "structsum")]
#[command(about = "Order-independent structural digests over pluggable hash primitives")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digest a JSON document
    Digest {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Hash primitive: crc32, crc64, md5 or sha256
        #[arg(short, long, default_value = "md5")]
        algorithm: HashAlgorithm,
        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// Digest a single typed scalar
    Scalar {
        /// Scalar type
        #[arg(short, long, value_enum)]
        kind: scalar::ScalarKind,
        /// Raw value
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Hash primitive: crc32, crc64, md5 or sha256
        #[arg(short, long, default_value = "md5")]
        algorithm: HashAlgorithm,
        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// Print digests of built-in sample values
    Demo {
        /// Hash primitive: crc32, crc64, md5 or sha256
        #[arg(short, long, default_value = "md5")]
        algorithm: HashAlgorithm,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Digest {
            input,
            algorithm,
            format,
        } => digest::run(input, algorithm, format),
        Commands::Scalar {
            kind,
            value,
            algorithm,
            format,
        } => scalar::run(kind, value, algorithm, format),
        Commands::Demo { algorithm } => demo::run(algorithm),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
