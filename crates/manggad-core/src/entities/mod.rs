//! Entity structs for Manggad domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod thesis;

pub use thesis::{NewThesis, ThesisRecord};
