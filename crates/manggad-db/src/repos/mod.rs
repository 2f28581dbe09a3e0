//! Repository modules implementing storage operations.
//!
//! Each module adds methods to `ManggadService` via `impl ManggadService` blocks.

pub mod seed;
pub mod thesis;
