//! Request handlers, one module per resource.

pub mod comment;
pub mod project;
