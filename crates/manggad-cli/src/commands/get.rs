use manggad_search::ThesisStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `manggad get`.
pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let thesis = ctx.service().get(id).await?;
    output(&thesis, flags.format)
}
