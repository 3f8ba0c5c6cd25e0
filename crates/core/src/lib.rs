//! Shared domain primitives for the portfolio service.
//!
//! Holds the types every other crate agrees on: primary-key aliases, the
//! resource kinds exposed over HTTP and the domain error enum. No I/O lives
//! here.

pub mod entity;
pub mod error;
pub mod types;
