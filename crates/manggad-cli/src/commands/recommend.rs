use manggad_core::responses::RecommendResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `manggad recommend`.
pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let recommendation_count = ctx.executor.recommend(id).await?;
    output(
        &RecommendResponse {
            id: id.to_string(),
            recommendation_count,
        },
        flags.format,
    )
}
