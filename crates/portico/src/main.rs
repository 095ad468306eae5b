mod cli; // Console output and mount target

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{error, info};

use core_logging::LoggingPlugin;
use portico_core::config::AppConfig;
use portico_core::kernel::constants::{APP_NAME, APP_VERSION};
use portico_core::title::LogTitleSink;
use portico_core::{Bootstrapper, Collaborators, KernelError};

/// Portico: bootstrap and inspect the admin shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Simple liveness check
    #[arg(long)]
    ping: bool,

    /// Configuration file (.json, .yaml, .yml or .toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Store namespace; derived from the app version and --env when omitted
    #[arg(long)]
    namespace: Option<String>,

    /// Deployment environment used in the default namespace
    #[arg(long, default_value = "prod")]
    env: String,

    /// Log level or filter directives; overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Print the bootstrap plan without running it
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every route of the aggregated table
    Routes,
    /// Print the navigation menu
    Menu,
    /// Print the permanently affixed tabs
    Tabs,
    /// Print the constants registry
    Constants,
    /// Navigate to a path and print the resolved route and title
    Navigate {
        /// Path to navigate to, e.g. /word-generator
        path: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    if args.dry_run {
        cli::print_plan(&Bootstrapper::plan());
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error ({}): {}", e.class(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<(), KernelError> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path).await?,
        None => AppConfig::default(),
    };

    let mut logging = LoggingPlugin::new(config.logging.clone());
    if let Some(level) = &args.log_level {
        logging = logging.with_level(level.clone());
    }
    logging.init()?;
    info!("{} v{} starting", APP_NAME, APP_VERSION);

    let namespace = args
        .namespace
        .clone()
        .unwrap_or_else(|| config.namespace(&args.env));

    let title_sink = Arc::new(LogTitleSink::new());
    let mut collaborators = Collaborators::defaults(&config);
    collaborators.title_sink = title_sink.clone();
    collaborators.mount_target = Arc::new(cli::ConsoleMountTarget);

    let bootstrapper = Bootstrapper::new(config, collaborators);
    let constants = bootstrapper.constants().clone();
    let mut booted = bootstrapper.bootstrap(&namespace).await?;
    let deferred = booted.settle().await;

    match args.command {
        None => cli::print_report(booted.report(), &deferred),
        Some(Commands::Routes) => cli::print_routes(booted.router().table()),
        Some(Commands::Menu) => {
            cli::print_menu(&booted.router().table().menu(), booted.translator())
        }
        Some(Commands::Tabs) => cli::print_tabs(booted.router().table(), booted.translator()),
        Some(Commands::Constants) => cli::print_constants(&constants),
        Some(Commands::Navigate { path }) => {
            let route = booted.router().navigate(&path).await?;
            cli::print_route(&route);
        }
    }

    if let Some(title) = title_sink.current() {
        println!("Title: {}", title);
    }

    booted.stores().persist().await?;
    info!("Shutting down {}", APP_NAME);
    Ok(())
}
