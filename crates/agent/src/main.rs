#![forbid(unsafe_code)]

mod cli;
mod shutdown;
mod startup;

use anyhow::Result;

use cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            println!("alerttriage-agent {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        Some(Command::Retention { topic }) => {
            startup::run_retention(&cli, topic.as_deref()).await
        }

        // No subcommand = run the consumer daemon
        None => startup::run(&cli).await,
    }
}
