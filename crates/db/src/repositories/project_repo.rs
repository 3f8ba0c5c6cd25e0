//! Repository for the `projects` table.

use portfolio_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::project::{CascadeDelete, CreateProject, Project, ProjectSummary};

/// Full column list, returned by single-row reads and inserts.
const COLUMNS: &str = "id, title, date, description, tags, links, subjects, images, documents";

/// Fixed column subset returned by listing queries.
const SUMMARY_COLUMNS: &str = "id, title, date, description, tags";

/// How far the cascading delete got before it finished or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CascadeStage {
    Started,
    CommentsDeleted,
    ProjectDeleted,
    Committed,
}

/// Provides create, read and delete operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (date, title, links, subjects, images, documents, description, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.date)
            .bind(&input.title)
            .bind(&input.links)
            .bind(&input.subjects)
            .bind(&input.images)
            .bind(&input.documents)
            .bind(&input.description)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, ProjectSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// List projects whose `tags` array contains `tag` (exact element match).
    pub async fn list_by_tag(pool: &PgPool, tag: &str) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM projects WHERE $1 = ANY(tags) ORDER BY id");
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(tag)
            .fetch_all(pool)
            .await
    }

    /// Delete a project together with every comment that references it.
    ///
    /// Both deletes run in one transaction on a single pooled connection:
    /// either the comments and the project are gone, or nothing changed.
    /// A missing project is not an error; it is reported through
    /// [`CascadeDelete::project_deleted`] after the (possibly empty) comment
    /// delete has been committed.
    pub async fn delete_with_comments(
        pool: &PgPool,
        id: DbId,
    ) -> Result<CascadeDelete, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut stage = CascadeStage::Started;

        let outcome = match Self::cascade(&mut tx, id, &mut stage).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(
                    project_id = id,
                    ?stage,
                    error = %err,
                    "Rolling back project delete"
                );
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(project_id = id, error = %rollback_err, "Rollback failed");
                }
                return Err(err);
            }
        };

        tx.commit().await?;
        stage = CascadeStage::Committed;
        tracing::debug!(
            project_id = id,
            ?stage,
            comments_deleted = outcome.comments_deleted,
            project_deleted = outcome.project_deleted,
            "Project delete committed"
        );
        Ok(outcome)
    }

    async fn cascade(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        stage: &mut CascadeStage,
    ) -> Result<CascadeDelete, sqlx::Error> {
        let comments_deleted = sqlx::query("DELETE FROM comments WHERE project_id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();
        *stage = CascadeStage::CommentsDeleted;

        let projects_deleted = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();
        *stage = CascadeStage::ProjectDeleted;

        Ok(CascadeDelete {
            comments_deleted,
            project_deleted: projects_deleted > 0,
        })
    }
}
