//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching the shapes queries return
//! - a `Deserialize` create DTO for inserts

pub mod comment;
pub mod project;
