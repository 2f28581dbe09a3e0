use std::path::Path;

use anyhow::Context;
use manggad_core::entities::NewThesis;
use manggad_core::responses::SeedResponse;
use manggad_db::repos::seed::SeedReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::commands::shared::labels::canonicalize;
use crate::context::AppContext;
use crate::output::output;

/// Handle `manggad seed`.
pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = read_rows(&args.file)?;
    let report = ctx.service().seed_theses(rows).await;
    output(&to_response(&report)?, flags.format)
}

fn read_rows(path: &Path) -> anyhow::Result<Vec<NewThesis>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut rows: Vec<NewThesis> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of theses", path.display()))?;
    rows.iter_mut().for_each(canonicalize);
    Ok(rows)
}

fn to_response(report: &SeedReport) -> anyhow::Result<SeedResponse> {
    Ok(SeedResponse {
        inserted: u32::try_from(report.inserted.len())?,
        skipped: u32::try_from(report.skipped.len())?,
        errors: report
            .skipped
            .iter()
            .map(|skip| format!("#{} '{}': {}", skip.index, skip.title, skip.reason))
            .collect(),
    })
}
