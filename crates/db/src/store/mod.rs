//! Store-access interface used by the HTTP layer.
//!
//! Handlers depend on [`PortfolioStore`] rather than on a pool, so the same
//! router can be served by PostgreSQL ([`PgStore`]) or, in tests, by the
//! in-memory [`MemoryStore`].

mod memory;
mod pg;

use async_trait::async_trait;
use portfolio_core::types::DbId;

use crate::error::StoreResult;
use crate::models::comment::{Comment, CreateComment};
use crate::models::project::{CascadeDelete, CreateProject, Project, ProjectSummary};

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Every store operation the API performs.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// All projects, summary columns only.
    async fn list_projects(&self) -> StoreResult<Vec<ProjectSummary>>;

    /// Projects whose tag list contains `tag`.
    async fn list_projects_by_tag(&self, tag: &str) -> StoreResult<Vec<ProjectSummary>>;

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project>;

    /// Atomically remove a project and all of its comments.
    async fn delete_project_with_comments(&self, id: DbId) -> StoreResult<CascadeDelete>;

    async fn list_comments_by_project(&self, project_id: DbId) -> StoreResult<Vec<Comment>>;

    async fn create_comment(&self, input: &CreateComment) -> StoreResult<Comment>;

    /// Returns `true` if a comment was removed.
    async fn delete_comment(&self, id: DbId) -> StoreResult<bool>;

    /// Cheap reachability probe used by the health endpoint and at startup.
    async fn ping(&self) -> StoreResult<()>;
}
