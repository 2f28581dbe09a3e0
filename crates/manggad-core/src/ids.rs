//! ID prefix constants.
//!
//! Generated IDs have the shape `{prefix}-{8 hex chars}`, e.g. `ths-a3f8b2c1`.

pub const PREFIX_THESIS: &str = "ths";

/// Every prefix the database may be asked to generate.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_THESIS];
