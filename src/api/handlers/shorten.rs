//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shorten_url": "http://localhost:8080/4c92" }
/// ```
///
/// # Errors
///
/// - 400 if the body is malformed or `url` is empty
/// - 409 if the URL has already been shortened
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let code = state.shortener.create(&payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            shorten_url: state.short_url(&code),
        }),
    ))
}
