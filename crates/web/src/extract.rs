//! Request extractors whose rejections are reported as [`WebError`] JSON
//! bodies instead of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::WebError;

/// JSON body extractor. Malformed, mistyped or incomplete bodies become
/// `400 Bad Request`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor. Unparseable ids become `400 Bad Request`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(WebError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(WebError))]
pub struct ApiQuery<T>(pub T);
