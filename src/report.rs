use std::io::{self, Write};

use crate::models::Aggregation;

/// Write the console report: repositories, statistics and language breakdown
pub fn write_report<W: Write>(out: &mut W, aggregation: &Aggregation) -> io::Result<()> {
    writeln!(out, "Repositories:")?;
    for repo in &aggregation.repositories {
        writeln!(out, "{}", repo)?;
    }

    let summary = &aggregation.summary;
    writeln!(out, "\nStatistics")?;
    writeln!(out, "Total Repositories: {}", summary.total_repositories)?;
    writeln!(out, "Total Stars: {}", summary.total_stars)?;
    writeln!(out, "Average Stars: {}", format_average(summary.average_stars))?;

    writeln!(out, "\nLanguages Used:")?;
    for share in aggregation.languages.shares() {
        writeln!(
            out,
            "{}: {} ({:.2}%)",
            share.language, share.count, share.percentage
        )?;
    }

    Ok(())
}

/// Shortest round-trip form, always with a fractional part (`5.0`, `8.333333333333334`)
pub fn format_average(value: f64) -> String {
    format!("{:?}", value)
}
