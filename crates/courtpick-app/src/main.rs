// courtpick entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, stdout carries the report)
// 2. Load config
// 3. Load and standardize the eligible player pool
// 4. Solve on the blocking pool under the configured timeout
// 5. Print the report

use courtpick_app::{pipeline, report};
use courtpick_core::config::{self, OutputFormat};

use anyhow::Context;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("courtpick starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, {} categories, roster cap {}, {} rival teams",
        config.league.name,
        config.league.categories.len(),
        config.league.roster.max_roster,
        config.league.teams.len()
    );

    let solution = match pipeline::run(&config).await {
        Ok(solution) => solution,
        Err(e) => {
            error!("selection failed: {}", e);
            return Err(e).context("roster selection failed");
        }
    };

    let rendered = match config.strategy.output.format {
        OutputFormat::Table => report::render_table(&solution),
        OutputFormat::Json => {
            report::render_json(&solution).context("failed to serialize solution")?
        }
    };
    println!("{rendered}");

    info!("courtpick finished");
    Ok(())
}

/// Initialize tracing to log to a file so stdout holds only the report.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("courtpick.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("courtpick=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
