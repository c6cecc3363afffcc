use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use projection_engine::calculation::summarize_projection;
use projection_engine::config::ConfigLoader;

use crate::cli::ReportArgs;

pub fn run(args: ReportArgs) -> Result<()> {
    let loader = ConfigLoader::load(&args.config)
        .with_context(|| format!("failed to load plan from {}", args.config.display()))?;
    let config = loader.config();

    let now = args.now.unwrap_or_else(|| Local::now().naive_local());
    info!(plan = %config.name(), %now, "Evaluating projection");

    let mut summary = summarize_projection(now, config);
    if args.no_audit {
        summary.audit_trace.steps.clear();
    }

    let json =
        serde_json::to_string_pretty(&summary).context("failed to serialize projection summary")?;
    println!("{json}");
    Ok(())
}
