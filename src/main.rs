//! MongoDB container entrypoint.
//!
//! # Pipeline
//!
//! ```text
//!   flags / env ──▶ ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//!   config.toml ──▶ │ registry │──▶│ validate │──▶│  render  │──▶│  hosts   │──▶ exec mongod
//!                   └──────────┘   └──────────┘   └──────────┘   └──────────┘
//!                                        │              │              │
//!                                        ▼              ▼              ▼
//!                                     stderr + non-zero exit on any failure
//! ```
//!
//! On success the process image is replaced and this program never returns.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mongod_entrypoint::config::load_or_default;
use mongod_entrypoint::config::schema::{PORT, REPLICA_SET_NAME};
use mongod_entrypoint::observability::init_logging;
use mongod_entrypoint::params::MatchMode;
use mongod_entrypoint::{
    Entrypoint, EntrypointConfig, EntrypointError, ExecHandoff, Inputs, NetworkIdentity,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render mongod.conf and start mongod", long_about = None)]
struct Args {
    /// Replica set name
    #[arg(long, env = "MONGOD_REPLICA_SET_NAME")]
    replica_set_name: Option<String>,

    /// MongoDB port number
    #[arg(long, env = "MONGOD_PORT")]
    port: Option<String>,

    /// FQDN of the MongoDB instance
    #[arg(long, env = "MONGOD_FQDN", default_value = "")]
    fqdn: String,

    /// IP address of the container
    #[arg(long, env = "MONGOD_IP", default_value = "")]
    ip: String,

    /// Value for a parameter declared in the config file
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "MONGOD_ENTRYPOINT_CONFIG")]
    config: Option<PathBuf>,

    /// Require each value to match its pattern in full
    #[arg(long)]
    strict: bool,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    if name.is_empty() {
        return Err(format!("empty parameter name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = load_or_default(args.config.as_deref());
    let level = config
        .as_ref()
        .map(|c| c.observability.log_level.as_str())
        .unwrap_or("info");
    init_logging(level);

    tracing::info!("mongod-entrypoint v{} starting", env!("CARGO_PKG_VERSION"));

    match config.map_err(EntrypointError::from).and_then(|c| run(c, args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(stage = %err.stage(), exit_code = err.exit_code(), "Entrypoint failed");
            eprintln!("{}", failure_message(&err));
            ExitCode::from(err.exit_code())
        }
    }
}

/// The single line printed to stderr when the run fails.
fn failure_message(err: &EntrypointError) -> String {
    format!("mongod-entrypoint: {}", err)
}

fn run(mut config: EntrypointConfig, args: Args) -> Result<(), EntrypointError> {
    if args.strict {
        config.validation.mode = MatchMode::Full;
    }

    let mut inputs = Inputs::new(NetworkIdentity::new(args.ip, args.fqdn));
    if let Some(name) = args.replica_set_name {
        inputs = inputs.value(REPLICA_SET_NAME, name);
    }
    if let Some(port) = args.port {
        inputs = inputs.value(PORT, port);
    }
    for (name, value) in args.params {
        inputs = inputs.value(name, value);
    }

    tracing::info!(
        template = %config.paths.template.display(),
        output = %config.paths.config.display(),
        parameters = config.parameters.len(),
        "Configuration loaded"
    );

    Entrypoint::new(config, ExecHandoff).run(inputs)
}
