use manggad_core::responses::ThesisListResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `manggad list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut theses = ctx.service().list_theses().await?;
    let total = u32::try_from(theses.len())?;
    theses.truncate(effective_limit(flags.limit, ctx.default_limit()));
    output(&ThesisListResponse { theses, total }, flags.format)
}
