use colored::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::aggregator::aggregate;
use crate::chart::{ChartOutput, ChartRenderer, SvgChartRenderer, TerminalChartRenderer};
use crate::cli::{ChartFormat, Cli};
use crate::error::{RepoStatsError, Result};
use crate::export::{export_file_name, save_csv};
use crate::github::GitHubClient;
use crate::models::Aggregation;
use crate::parser::{parse, ParseOutcome};
use crate::prompt::{console_err, Console};
use crate::report::write_report;

/// How a single run ended
#[derive(Debug)]
pub enum RunOutcome {
    Completed {
        aggregation: Aggregation,
        export: Option<PathBuf>,
        charts: Option<ChartOutput>,
    },
    NoPublicRepositories,
    NoneParsed,
    /// A terminal stage failure, already reported on the console
    Failed(RepoStatsError),
}

/// One query: fetch, parse, aggregate, report, then optional export and charts.
/// Stage failures are written to the console and returned as `Failed`; only
/// console I/O errors come back as `Err`.
pub async fn run<R: BufRead, W: Write>(cli: &Cli, console: &mut Console<R, W>) -> Result<RunOutcome> {
    let username = match cli.username.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => match console.read_username() {
            Ok(name) => name,
            Err(RepoStatsError::EmptyUsername) => {
                let message = "Error: Username can't be empty".to_string();
                return report_failure(console, message, RepoStatsError::EmptyUsername);
            }
            Err(e) => return Err(e),
        },
    };
    writeln!(console.output(), "You entered: {}", username).map_err(console_err)?;

    let client = match GitHubClient::new(&cli.api_url) {
        Ok(client) => client,
        Err(e) => return report_failure(console, format!("Error: {}", e), e),
    };

    let body = match client.fetch_repositories(&username).await {
        Ok(body) => body,
        Err(e) => {
            let message = match &e {
                RepoStatsError::HttpFailure { code } => format!("Error: API failed with code {}", code),
                RepoStatsError::TransportFailure(detail) => format!("Error: Failed to fetch data-{}", detail),
                other => format!("Error: {}", other),
            };
            return report_failure(console, message, e);
        }
    };

    let records = match parse(&body) {
        Ok(ParseOutcome::NoPublicRepositories) => {
            writeln!(console.output(), "No public repositories found for user: {}", username)
                .map_err(console_err)?;
            return Ok(RunOutcome::NoPublicRepositories);
        }
        Ok(ParseOutcome::NoneParsed) => {
            writeln!(console.output(), "No repositories parsed for user: {}", username)
                .map_err(console_err)?;
            return Ok(RunOutcome::NoneParsed);
        }
        Ok(ParseOutcome::Repositories(records)) => records,
        Err(e) => {
            let message = format!("Error: Failed to parse JSON - {}", e.detail());
            return report_failure(console, message, e);
        }
    };

    info!("Aggregating {} repositories for {}", records.len(), username);
    let aggregation = aggregate(records);
    write_report(console.output(), &aggregation).map_err(console_err)?;

    let export = if answer(cli.export, cli.non_interactive, || {
        console.confirm("\nSave data to csv? (y/n):")
    })? {
        match save_csv(&cli.output_dir, &username, &aggregation.repositories) {
            Ok(path) => {
                writeln!(console.output(), "Results saved to {}", export_file_name(&username))
                    .map_err(console_err)?;
                Some(path)
            }
            Err(e) => {
                debug!("CSV export failed: {}", e);
                writeln!(console.output(), "{}", format!("Error saving csv:{}", e.detail()).red())
                    .map_err(console_err)?;
                None
            }
        }
    } else {
        None
    };

    let charts = if answer(cli.charts, cli.non_interactive, || {
        console.confirm_ignore_case("Would you like to see the chart statistics? (y/n)")
    })? {
        let renderer: Box<dyn ChartRenderer> = match cli.chart_format {
            ChartFormat::Svg => Box::new(SvgChartRenderer::new(cli.output_dir.clone())),
            ChartFormat::Terminal => Box::new(TerminalChartRenderer::new()),
        };

        match renderer.render(&username, &aggregation.repositories, &aggregation.languages) {
            Ok(output) => {
                show_charts(console, &output)?;
                Some(output)
            }
            Err(e) => {
                debug!("Chart rendering failed: {}", e);
                writeln!(console.output(), "{}", format!("Error: {}", e).red()).map_err(console_err)?;
                None
            }
        }
    } else {
        None
    };

    Ok(RunOutcome::Completed {
        aggregation,
        export,
        charts,
    })
}

/// A flag answers yes, `--non-interactive` answers no, otherwise ask
fn answer(flag: bool, non_interactive: bool, ask: impl FnOnce() -> Result<bool>) -> Result<bool> {
    if flag {
        return Ok(true);
    }
    if non_interactive {
        return Ok(false);
    }
    ask()
}

fn show_charts<R: BufRead, W: Write>(console: &mut Console<R, W>, output: &ChartOutput) -> Result<()> {
    match output {
        ChartOutput::Files(paths) => {
            for path in paths {
                writeln!(console.output(), "Chart saved to {}", path.display()).map_err(console_err)?;
            }
        }
        ChartOutput::Text(text) => {
            write!(console.output(), "{}", text).map_err(console_err)?;
        }
    }
    Ok(())
}

fn report_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: String,
    err: RepoStatsError,
) -> Result<RunOutcome> {
    debug!("Run stopped: {}", err);
    writeln!(console.output(), "{}", message.red()).map_err(console_err)?;
    Ok(RunOutcome::Failed(err))
}
