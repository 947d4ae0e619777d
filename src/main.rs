use clap::Parser;
use keyvault_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Ui(args) => cli::ui::run(args).await,
    }
}
