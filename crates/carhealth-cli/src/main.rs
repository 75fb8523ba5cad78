//! CLI for carhealth: simulated car health telemetry over HTTP.

mod commands;

use clap::{Parser, Subcommand};

use carhealth_core::DEFAULT_HISTORY_CAPACITY;
use carhealth_server::{DEFAULT_HOST, DEFAULT_PORT};
use commands::TimestampStyle;

#[derive(Parser)]
#[command(name = "carhealth")]
#[command(about = "carhealth: simulated car health telemetry over a small HTTP API")]
#[command(version = carhealth_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (GET /, /car/status, /car/history, /health)
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Bind address
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Number of readings kept for /car/history
        #[arg(long, env = "HISTORY_CAPACITY", default_value_t = DEFAULT_HISTORY_CAPACITY)]
        history: usize,

        /// Timestamp rendering: zulu (RFC 3339 with Z suffix) or naive (no suffix); both UTC
        #[arg(long, value_enum, default_value_t = TimestampStyle::Zulu)]
        timestamp: TimestampStyle,

        /// Answer status failures with 500 instead of 200 + {"error": ...}
        #[arg(long)]
        strict_errors: bool,

        /// Mirror the request origin and allow credentials instead of `*`
        #[arg(long)]
        cors_credentials: bool,
    },

    /// Print generated readings as a JSON array without starting a server
    Sample {
        /// Number of readings to generate
        #[arg(long, default_value = "1")]
        count: usize,

        /// Seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,

        /// Timestamp rendering: zulu or naive
        #[arg(long, value_enum, default_value_t = TimestampStyle::Zulu)]
        timestamp: TimestampStyle,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            host,
            history,
            timestamp,
            strict_errors,
            cors_credentials,
        } => {
            let config = carhealth_server::ServerConfig {
                host,
                port,
                strict_errors,
                cors_credentials,
            };
            commands::serve::run(config, history, timestamp.into())
        }
        Commands::Sample {
            count,
            seed,
            timestamp,
            pretty,
        } => commands::sample::run(count, seed, timestamp.into(), pretty),
    }
}
