use clap::Parser;

mod bootstrap;
mod cli;
mod export;
mod progress;
mod writer;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("botmock-luis error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let source = cli
        .input
        .clone()
        .map_or(export::Source::Botmock, export::Source::File);

    let path = export::run(&source, &config, cli.quiet).await?;
    if !cli.quiet {
        println!("{}", path.display());
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("BOTMOCK_LUIS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
