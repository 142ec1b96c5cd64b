use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` body whose rejections render as an [`ApiError`] (400, JSON body).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
