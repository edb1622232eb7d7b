use anyhow::Result;
use clap::Parser;
use manual_qa::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("manual_qa=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run().await
}
