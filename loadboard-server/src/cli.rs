use std::net::IpAddr;

use clap::{Parser, Subcommand};

use loadboard_types::{AccessPolicy, DEVELOPMENT_ORIGIN, PRODUCTION_ORIGIN};

#[derive(Parser)]
#[command(
    name = "loadboard",
    about = "LoadBoard AI API - upgrade requests and AI integrations",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, env = "LOADBOARD_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(short, long, env = "PORT", default_value = "4000")]
    pub port: u16,

    #[arg(
        long = "allowed-origin",
        env = "LOADBOARD_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = [PRODUCTION_ORIGIN, DEVELOPMENT_ORIGIN],
        help = "Origin allowed to make credentialed cross-origin calls (repeatable)"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOADBOARD_SEED", help = "Start with demo records")]
    pub seed: bool,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOADBOARD_LOG_JSON", help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Cli {
    /// The effective CORS policy for this invocation.
    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::with_origins(self.allowed_origins.iter().map(|o| o.trim()))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the API server (default if no command specified)")]
    Serve,

    #[command(about = "Validate the effective CORS policy and print the findings")]
    CheckCors {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}
