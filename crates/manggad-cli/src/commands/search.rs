use manggad_core::responses::SearchResultsResponse;
use manggad_search::{FacetValue, FilterSelection, build_descriptor};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `manggad search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let descriptor = build_descriptor(&selection_from_args(args))?;

    let cancel = CancellationToken::new();
    let outcome = {
        let _watch = cancel_on_ctrl_c(&cancel);
        ctx.executor.execute(&descriptor, Some(&cancel)).await
    };
    let mut results = outcome?;

    let total_results = u32::try_from(results.len())?;
    results.truncate(effective_limit(flags.limit, ctx.default_limit()));

    let response = SearchResultsResponse {
        query: args.text.clone().unwrap_or_default(),
        year: descriptor.year_filter,
        departments: descriptor
            .department_filter
            .iter()
            .map(|d| d.label().to_string())
            .collect(),
        programs: descriptor
            .program_filter
            .iter()
            .map(|p| p.label().to_string())
            .collect(),
        results,
        total_results,
    };
    output(&response, flags.format)
}

fn selection_from_args(args: &SearchArgs) -> FilterSelection {
    let mut selection = FilterSelection::new(args.text.clone().unwrap_or_default());
    selection.year = args.year;
    let departments = args.departments.iter().cloned().map(FacetValue::Department);
    let programs = args.programs.iter().cloned().map(FacetValue::Program);
    departments
        .chain(programs)
        .fold(selection, FilterSelection::with_facet)
}

/// Cancel `token` on Ctrl-C. Dropping the guard cancels it too, which also
/// ends the watcher task.
fn cancel_on_ctrl_c(token: &CancellationToken) -> DropGuard {
    let watcher = token.clone();
    tokio::spawn(async move {
        tokio::select! {
            () = watcher.cancelled() => {}
            signal = tokio::signal::ctrl_c() => {
                if signal.is_ok() {
                    tracing::debug!("interrupt received, cancelling search");
                    watcher.cancel();
                }
            }
        }
    });
    token.clone().drop_guard()
}
