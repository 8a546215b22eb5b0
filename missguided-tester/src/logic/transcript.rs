//! Ad-hoc search transcripts driven through the same two-phase flow the page uses.

use anyhow::Result;
use colored::Colorize;
use missguided_core::{Clock, SearchError, Session};
use std::io::Write;
use std::time::Duration;

/// Run every query through `session`, sleeping `delay` between begin and
/// completion when set, and print what the map "found".
pub async fn run_transcript<C: Clock>(
    out: &mut dyn Write,
    session: &mut Session<C>,
    queries: &[String],
    delay: Option<Duration>,
) -> Result<()> {
    writeln!(out, "{}", "🧭 Search Transcript".bright_yellow().bold())?;
    writeln!(out, "{}", "-".repeat(30).yellow())?;

    for raw in queries {
        let pending = match session.begin_search(raw) {
            Ok(pending) => pending,
            Err(SearchError::BlankQuery) => {
                writeln!(out, "⏭️  skipped blank query {raw:?}")?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(delay) = delay {
            writeln!(out, "🔎 Searching for {}...", pending.query().raw().bold())?;
            out.flush()?;
            tokio::time::sleep(delay).await;
        }

        let result = session.complete_search(pending)?;
        writeln!(
            out,
            "📍 {} → {} {} at {} ({}, {:?})",
            result.searched_text.to_uppercase().bold(),
            result.country_emoji,
            result.actual_label.green(),
            result.coordinates.display(),
            result.distance_label.red(),
            result.resolution
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Recent searches:")?;
    for record in session.history() {
        writeln!(
            out,
            "  {} → {} [{}]",
            record.searched_text,
            record.actual_label,
            record.timestamp_label()
        )?;
    }
    writeln!(out, "Lost travelers: {}", session.total_searches())?;
    writeln!(out, "Accuracy rate: {}%", session.accuracy_rate_percent())?;
    Ok(())
}
