use async_trait::async_trait;
use portfolio_core::types::DbId;

use crate::error::StoreResult;
use crate::models::comment::{Comment, CreateComment};
use crate::models::project::{CascadeDelete, CreateProject, Project, ProjectSummary};
use crate::repositories::{CommentRepo, ProjectRepo};
use crate::store::PortfolioStore;
use crate::DbPool;

/// [`PortfolioStore`] backed by a PostgreSQL pool.
///
/// Each call checks a connection out of the pool for its own duration only.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgStore {
    async fn list_projects(&self) -> StoreResult<Vec<ProjectSummary>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn list_projects_by_tag(&self, tag: &str) -> StoreResult<Vec<ProjectSummary>> {
        Ok(ProjectRepo::list_by_tag(&self.pool, tag).await?)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn delete_project_with_comments(&self, id: DbId) -> StoreResult<CascadeDelete> {
        Ok(ProjectRepo::delete_with_comments(&self.pool, id).await?)
    }

    async fn list_comments_by_project(&self, project_id: DbId) -> StoreResult<Vec<Comment>> {
        Ok(CommentRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn create_comment(&self, input: &CreateComment) -> StoreResult<Comment> {
        Ok(CommentRepo::create(&self.pool, input).await?)
    }

    async fn delete_comment(&self, id: DbId) -> StoreResult<bool> {
        Ok(CommentRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
