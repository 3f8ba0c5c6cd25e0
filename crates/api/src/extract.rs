//! Extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json` and `Path` extractors answer malformed input with
//! plain-text bodies; these wrappers keep every error response in the
//! `{ "error", "code" }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body, rejected with a 400 [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters, rejected with a 400 [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
