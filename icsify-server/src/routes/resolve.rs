//! Time resolution endpoint

use axum::{Json, Router, routing::post};
use icsify_core::{ResolvedInterval, resolve_str};
use serde::Deserialize;

use crate::routes::{AppError, parse_body};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/resolve", post(resolve_time))
}

#[derive(Deserialize)]
pub struct ResolveRequest {
    pub date: String,
    pub time: String,
}

/// POST /resolve - Resolve a date and time expression to start/end
async fn resolve_time(body: String) -> Result<Json<ResolvedInterval>, AppError> {
    let request: ResolveRequest = parse_body(&body)?;
    Ok(Json(resolve_str(&request.date, &request.time)?))
}
