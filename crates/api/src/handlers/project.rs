//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::entity::Entity;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::project::{CreateProject, Project, ProjectSummary};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectSummary>>> {
    let projects = state.store.list_projects().await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// GET /projects/class/{tag}
///
/// Projects whose tag list contains `tag`. An unknown tag yields `[]`.
pub async fn list_by_class(
    State(state): State<AppState>,
    AppPath(tag): AppPath<String>,
) -> AppResult<Json<Vec<ProjectSummary>>> {
    let projects = state.store.list_projects_by_tag(&tag).await?;
    tracing::debug!(%tag, count = projects.len(), "Listed projects by class");
    Ok(Json(projects))
}

/// GET /projects/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .find_project(id)
        .await?
        .ok_or(AppError::Core(CoreError::project_not_found(id)))?;
    Ok(Json(project))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.store.create_project(&input).await?;
    tracing::info!(id = project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /projects/{id}
///
/// Removes the project and all of its comments atomically. A 404 only means
/// the project row was absent; any stray comments for that id are still
/// cleared.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = state.store.delete_project_with_comments(id).await?;

    if !outcome.project_deleted {
        return Err(AppError::Core(CoreError::project_not_found(id)));
    }

    tracing::info!(
        id,
        comments_deleted = outcome.comments_deleted,
        "Project deleted"
    );
    Ok(Json(MessageResponse::new(Entity::Project.deleted_message())))
}
