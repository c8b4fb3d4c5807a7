use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use chatrelay::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer locally with an echo client instead of calling the API
    #[arg(long, global = true)]
    mock: bool,

    /// Model identifier (defaults to GROQ_MODEL or llama-3.1-70b-versatile)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Endpoint base URL (defaults to GROQ_BASE_URL or the Groq OpenAI-compatible API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        model: cli.model,
        base_url: cli.base_url,
    });

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
