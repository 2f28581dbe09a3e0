//! # manggad-core
//!
//! Core types shared by every Manggad crate:
//! - The `ThesisRecord` entity and its creation payload
//! - Department and program vocabularies used as search facets
//! - Normalization of string-or-list text fields (keywords, authors)
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod text;
