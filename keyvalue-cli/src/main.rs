use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "keyvalue")]
#[command(about = "XML Signature KeyValue inspection and round-trip tool")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, global = true)]
    json: bool,

    /// Largest decoded integer accepted, in bytes
    #[arg(long, global = true, env = "KEYVALUE_MAX_VALUE_LEN")]
    max_value_len: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "KEYVALUE_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the key parameters in a KeyValue or KeyInfo document
    Inspect(commands::inspect::InspectArgs),
    /// Build KeyValue XML from JSON parameters
    Build(commands::build::BuildArgs),
    /// Parse, rebuild and compare every field
    Roundtrip(commands::roundtrip::RoundtripArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("keyvalue_cli=debug,xmldsig_keyvalue=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keyvalue_cli=warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load()?;
    let ctx = commands::Context {
        json_output: cli.json || config.output_format.as_deref() == Some("json"),
        codec: match cli.max_value_len {
            Some(max) => xmldsig_keyvalue::CodecConfig::with_max_value_len(max),
            None => config.codec,
        },
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Build(args) => commands::build::run(args, &ctx),
        Commands::Roundtrip(args) => commands::roundtrip::run(args, &ctx),
        Commands::Config { action } => commands::config::run(action, &ctx),
    }
}
