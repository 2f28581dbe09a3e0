//! # manggad-search
//!
//! Thesis search for Manggad.
//!
//! A search runs in two steps:
//! - [`filter::build_descriptor`] turns a user's [`filter::FilterSelection`]
//!   into a validated [`filter::QueryDescriptor`] without touching storage.
//! - [`executor::SearchExecutor`] evaluates the descriptor against a
//!   [`store::ThesisStore`] and returns matches in store order.
//!
//! Stores: [`store::MemoryStore`] for tests and demos, and the libSQL-backed
//! `ManggadService` from manggad-db.

pub mod error;
pub mod executor;
pub mod filter;
pub mod matching;
pub mod sample;
pub mod store;

pub use error::SearchError;
pub use executor::SearchExecutor;
pub use filter::{FacetValue, FilterSelection, QueryDescriptor, build_descriptor};
pub use store::{MemoryStore, ThesisStore};
