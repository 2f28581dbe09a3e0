use manggad_core::enums::{Department, Program};
use manggad_core::responses::{FacetEntry, FacetsResponse};

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `manggad facets`. Needs no database.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&facets(), flags.format)
}

fn facets() -> FacetsResponse {
    FacetsResponse {
        departments: Department::ALL
            .into_iter()
            .map(|d| FacetEntry {
                code: d.as_str().to_string(),
                label: d.label().to_string(),
            })
            .collect(),
        programs: Program::ALL
            .into_iter()
            .map(|p| FacetEntry {
                code: p.as_str().to_string(),
                label: p.label().to_string(),
            })
            .collect(),
    }
}
