//! Handlers for the `/comments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::entity::Entity;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::comment::{Comment, CreateComment};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /comments/{project_id}
pub async fn list_by_project(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = state.store.list_comments_by_project(project_id).await?;
    tracing::debug!(project_id, count = comments.len(), "Listed comments");
    Ok(Json(comments))
}

/// POST /comments
///
/// The project is not looked up first; an unknown `project_id` surfaces as
/// a store error from the foreign key.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let comment = state.store.create_comment(&input).await?;
    tracing::info!(
        id = comment.id,
        project_id = comment.project_id,
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_comment(id).await? {
        return Err(AppError::Core(CoreError::comment_not_found(id)));
    }

    tracing::info!(id, "Comment deleted");
    Ok(Json(MessageResponse::new(Entity::Comment.deleted_message())))
}
