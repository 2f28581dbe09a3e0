use manggad_core::entities::NewThesis;
use manggad_core::text::TextList;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared::labels::resolve_pair;
use crate::context::AppContext;
use crate::output::output;

/// Handle `manggad submit`.
pub async fn handle(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let thesis = ctx.service().create_thesis(payload(args)?).await?;
    tracing::info!(id = %thesis.id, "thesis submitted");
    output(&thesis, flags.format)
}

fn payload(args: &SubmitArgs) -> anyhow::Result<NewThesis> {
    let (department, program) = resolve_pair(&args.department, &args.program)?;
    let list = |value: Option<&str>| TextList::Delimited(value.unwrap_or_default().to_string());

    Ok(NewThesis {
        title: args.title.clone(),
        abstract_text: args.abstract_text.clone(),
        keywords: list(args.keywords.as_deref()).into_keywords(),
        authors: list(args.authors.as_deref()).into_authors(),
        department: department.label().to_string(),
        program: program.label().to_string(),
        year_of_submission: args.year,
        degree_awarded: args.degree_awarded,
        cover_image_url: args.cover_image_url.clone(),
    })
}
