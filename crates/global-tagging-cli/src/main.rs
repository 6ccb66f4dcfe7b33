/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment
[OUTPUT]: Tag API results printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod commands;
mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use global_tagging::{
    AccountScope, ClientConfig, DEFAULT_SERVICE_NAME, ExternalConfig, GlobalTaggingClient,
    NoAuthAuthenticator, ServiceOptions, TagType,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "global-tagging", version, about = "IBM Cloud Global Tagging client")]
struct Cli {
    /// YAML file with service and credential settings
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[arg(long, value_name = "URL", global = true)]
    service_url: Option<String>,
    #[arg(long, global = true)]
    account_id: Option<String>,
    #[arg(long, global = true)]
    tag_type: Option<TagType>,
    #[arg(long, global = true)]
    impersonate_user: Option<String>,
    /// Print the request instead of sending it
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let file_config = match &args.config_path {
        Some(path) => {
            let config = CliConfig::from_file(path).context("load config")?;
            info!(config_path = %path.display(), "configuration loaded");
            config
        }
        None => CliConfig::default(),
    };

    let client = build_client(&args, &file_config).context("create client")?;
    debug!(
        service_url = client.service_url(),
        auth_type = client.authenticator().auth_type(),
        dry_run = args.dry_run,
        "client ready"
    );

    let scope = AccountScope {
        impersonate_user: args.impersonate_user,
        account_id: args.account_id.or(file_config.account_id),
        tag_type: args.tag_type.or(file_config.tag_type),
    };

    commands::run(&client, args.command, scope, args.dry_run).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// Flags win over the file, the file wins over the environment.
/// A dry run never sends anything, so it does not need credentials.
fn build_client(args: &Cli, file_config: &CliConfig) -> Result<GlobalTaggingClient> {
    let mut options = ServiceOptions::new();
    if let Some(url) = args.service_url.clone().or(file_config.service_url.clone()) {
        options = options.service_url(url);
    }
    if let Some(name) = file_config.service_name.clone() {
        options = options.service_name(name);
    }
    if let Some(secs) = file_config.timeout_secs {
        options = options.config(ClientConfig {
            timeout: Duration::from_secs(secs),
            ..ClientConfig::default()
        });
    }

    if args.dry_run {
        options = options.authenticator(Arc::new(NoAuthAuthenticator::new()));
        return Ok(GlobalTaggingClient::with_options(options)?);
    }

    let service_name = file_config
        .service_name
        .as_deref()
        .unwrap_or(DEFAULT_SERVICE_NAME);
    let environment = ExternalConfig::from_environment(service_name)?;
    let external = file_config.overlay(environment);
    Ok(GlobalTaggingClient::from_external(options, &external)?)
}
