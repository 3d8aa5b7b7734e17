use std::process::ExitCode;
use tracing::error;

use handicrafts_scraper::observability::logging;
use handicrafts_scraper::{ExportConfig, Orchestrator, RunSummary};

fn run() -> anyhow::Result<RunSummary> {
    let orchestrator = Orchestrator::new(ExportConfig::default());
    Ok(orchestrator.run()?)
}

/// One-line failure report. `ScraperError` messages already embed their cause,
/// so only the outermost message is printed.
fn failure_message(e: &anyhow::Error) -> String {
    format!("❌ Error running scraper: {}", e)
}

fn main() -> ExitCode {
    // Initialize logging; the guard flushes the log file on exit
    let _guard = logging::init_logging();

    println!("🏺 Egyptian Handicrafts Marketplace Data Scraper");
    println!("{}", "=".repeat(50));

    match run() {
        Ok(summary) => {
            println!("\n{}", summary);
            println!("✅ Successfully scraped {} locations!", summary.total_locations);
            println!("\nFiles generated:");
            for path in &summary.output_files {
                println!("   {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handicrafts_scraper::ScraperError;
    use std::io;

    #[test]
    fn test_failure_message_reports_cause_once() {
        let cause = io::Error::new(io::ErrorKind::Other, "Is a directory");
        let e = anyhow::Error::from(ScraperError::from(cause));
        let message = failure_message(&e);
        assert_eq!(message, "❌ Error running scraper: I/O error: Is a directory");
        assert_eq!(message.matches("Is a directory").count(), 1);
    }
}
