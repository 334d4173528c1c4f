use clap::Parser;
use colored::*;
use repo_stats::app::{self, RunOutcome};
use repo_stats::cli::Cli;
use repo_stats::prompt::Console;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Diagnostics go to stderr so they never interleave with the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match runtime.block_on(app::run(&cli, &mut console)) {
        Ok(RunOutcome::Completed { aggregation, .. }) => {
            debug!(
                repositories = aggregation.summary.total_repositories,
                stars = aggregation.summary.total_stars,
                "Run completed"
            );
        }
        Ok(outcome) => debug!(?outcome, "Run ended early"),
        // Console failures are reported like every other stage failure
        Err(e) => println!("{}", format!("Error: {}", e).red()),
    }

    Ok(())
}
