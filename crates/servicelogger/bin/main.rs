use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::{ListArgs, PostArgs, SearchArgs};

const LOG_ENV: &str = "SERVICELOGGER_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "servicelogger",
    version,
    about = "Find and use service logs to send to troublesome clusters"
)]
struct Cli {
    /// Config file to use instead of the default config.yaml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the service logs of a cluster
    List(ListArgs),
    /// Post an internal-only service log to a cluster
    Post(PostArgs),
    /// Browse the template catalog
    Search(SearchArgs),
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Command::List(args) => args.run(&cmd::config::load(cli.config.as_deref())?),
        Command::Post(args) => args.run(&cmd::config::load(cli.config.as_deref())?),
        Command::Search(args) => args.run(),
    }
}
