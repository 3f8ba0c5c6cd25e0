//! In-memory [`PortfolioStore`] for tests and local experiments.
//!
//! Mirrors the PostgreSQL schema's observable behaviour: sequential ids
//! starting at 1, the `comments.project_id` foreign key, and an all-or-nothing
//! cascading delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use portfolio_core::entity::Entity;
use portfolio_core::types::DbId;
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::models::comment::{Comment, CreateComment};
use crate::models::project::{CascadeDelete, CreateProject, Project, ProjectSummary};
use crate::store::PortfolioStore;

#[derive(Default)]
struct Tables {
    projects: BTreeMap<DbId, Project>,
    comments: BTreeMap<DbId, Comment>,
    last_project_id: DbId,
    last_comment_id: DbId,
    fail_next: Option<String>,
    fail_cascade_midway: Option<String>,
}

impl Tables {
    fn take_failure(&mut self) -> StoreResult<()> {
        match self.fail_next.take() {
            Some(reason) => Err(StoreError::Unavailable(reason)),
            None => Ok(()),
        }
    }
}

/// A [`PortfolioStore`] holding both tables in process memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next operation fail before touching any data.
    pub async fn fail_next(&self, reason: impl Into<String>) {
        self.tables.lock().await.fail_next = Some(reason.into());
    }

    /// Make the next cascading delete fail after its comment delete and
    /// before its project delete.
    pub async fn fail_cascade_midway(&self, reason: impl Into<String>) {
        self.tables.lock().await.fail_cascade_midway = Some(reason.into());
    }

    /// Number of comments currently stored, across all projects.
    pub async fn comment_count(&self) -> usize {
        self.tables.lock().await.comments.len()
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn list_projects(&self) -> StoreResult<Vec<ProjectSummary>> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;
        Ok(tables.projects.values().map(ProjectSummary::from).collect())
    }

    async fn list_projects_by_tag(&self, tag: &str) -> StoreResult<Vec<ProjectSummary>> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;
        Ok(tables
            .projects
            .values()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .map(ProjectSummary::from)
            .collect())
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;
        Ok(tables.projects.get(&id).cloned())
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;

        tables.last_project_id += 1;
        let project = Project {
            id: tables.last_project_id,
            title: input.title.clone(),
            date: input.date,
            description: input.description.clone(),
            tags: input.tags.clone(),
            links: input.links.clone(),
            subjects: input.subjects.clone(),
            images: input.images.clone(),
            documents: input.documents.clone(),
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn delete_project_with_comments(&self, id: DbId) -> StoreResult<CascadeDelete> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;

        // Stage the comment delete; it only replaces the live table once the
        // whole operation has succeeded.
        let mut comments = tables.comments.clone();
        let before = comments.len();
        comments.retain(|_, c| c.project_id != id);
        let comments_deleted = (before - comments.len()) as u64;

        if let Some(reason) = tables.fail_cascade_midway.take() {
            tracing::warn!(project_id = id, "Rolling back project delete");
            return Err(StoreError::Unavailable(reason));
        }

        let project_deleted = tables.projects.remove(&id).is_some();
        tables.comments = comments;

        Ok(CascadeDelete {
            comments_deleted,
            project_deleted,
        })
    }

    async fn list_comments_by_project(&self, project_id: DbId) -> StoreResult<Vec<Comment>> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_comment(&self, input: &CreateComment) -> StoreResult<Comment> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;

        if !tables.projects.contains_key(&input.project_id) {
            return Err(StoreError::Constraint(format!(
                "{}.project_id = {} has no matching row in {}",
                Entity::Comment.table(),
                input.project_id,
                Entity::Project.table(),
            )));
        }

        tables.last_comment_id += 1;
        let comment = Comment {
            id: tables.last_comment_id,
            project_id: input.project_id,
            text: input.text.clone(),
            name: input.name.clone(),
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.lock().await;
        tables.take_failure()?;
        Ok(tables.comments.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.tables.lock().await.take_failure()
    }
}
