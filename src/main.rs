use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxdash::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API relay and static file server
    Serve,
    /// Fetch news and rates from a relay and render the dashboard
    Board {
        /// Base URL of a running relay
        #[arg(long, default_value = "http://localhost:3000")]
        relay_url: String,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert; anything non-numeric yields the placeholder
        #[arg(long)]
        amount: String,

        /// Source currency code
        #[arg(long, default_value = "USD")]
        from: String,

        /// Target currency code
        #[arg(long, default_value = "BRL")]
        to: String,

        /// Swap the from/to selection before converting
        #[arg(long)]
        swap: bool,

        /// Base URL of a running relay
        #[arg(long, default_value = "http://localhost:3000")]
        relay_url: String,
    },
}

impl From<Commands> for fxdash::AppCommand {
    fn from(cmd: Commands) -> fxdash::AppCommand {
        match cmd {
            Commands::Serve => fxdash::AppCommand::Serve,
            Commands::Board { relay_url } => fxdash::AppCommand::Board { relay_url },
            Commands::Convert {
                amount,
                from,
                to,
                swap,
                relay_url,
            } => fxdash::AppCommand::Convert {
                relay_url,
                amount,
                from,
                to,
                swap,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(cmd) => fxdash::run_command(cmd.into()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
