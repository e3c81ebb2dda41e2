use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recur_core::format_to_dollar;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod bills_cmd;
mod config;
mod state;

use bills_cmd::BillsCommand;

#[derive(Parser, Debug)]
#[command(
    name = "recur",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RECUR_BUILD_SHA"), ")"),
    about = "Recurring bills: what's paid, what's due soon, what's coming"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recurring bill listing and summaries
    Bills {
        #[command(subcommand)]
        command: BillsCommand,
    },

    /// Format an amount as US dollars (e.g. 1234.5 -> $1,234.50)
    Format {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Manage ~/.recur/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,

    /// Print the effective config
    Show,
}

fn init_tracing() {
    // stderr keeps stdout clean for --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recur=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Bills { command } => {
            let cfg = config::load_config()?;
            bills_cmd::run(command, &cfg).await?;
        }

        Command::Format { amount } => {
            println!("{}", format_to_dollar(amount));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("# {}\n{}", state::config_path()?.display(), s);
            }
        },
    }

    Ok(())
}
