//! Project entity model and DTOs.

use chrono::NaiveDate;
use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A full row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub links: Option<Value>,
    pub subjects: Option<Value>,
    pub images: Option<Value>,
    pub documents: Option<Value>,
}

/// The fixed column subset returned by listing queries.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            date: project.date,
            description: project.description.clone(),
            tags: project.tags.clone(),
        }
    }
}

/// DTO for creating a new project.
///
/// `links`, `subjects`, `images` and `documents` are stored verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub date: NaiveDate,
    pub title: String,
    pub links: Option<Value>,
    pub subjects: Option<Value>,
    pub images: Option<Value>,
    pub documents: Option<Value>,
    pub description: Option<String>,
    /// Defaults to no tags if omitted.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result of the transactional project delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeDelete {
    /// Comments removed alongside the project (may be zero).
    pub comments_deleted: u64,
    /// Whether the project row itself existed and was removed.
    pub project_deleted: bool,
}
