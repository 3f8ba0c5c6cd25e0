//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. User input is always bound as a
//! statement parameter, never formatted into SQL text.

pub mod comment_repo;
pub mod project_repo;

pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
