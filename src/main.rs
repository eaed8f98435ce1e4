use clap::Parser;
use ticketfinder::cli::diagnostic::CliError;
use ticketfinder::cli::{self, Cli};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    cli::run(args).await.map_err(CliError::from)?;
    Ok(())
}
