//! Comic Routes
//!
//! - GET /api/v1/comics/random - Draw a random comic from the archive
//! - GET /api/v1/comics/:date - Comic for a specific day (YYYY-MM-DD)

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ComicResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::content::ThreadRandom;

/// GET /api/v1/comics/random
pub async fn random_comic(State(state): State<Arc<AppState>>) -> ApiResult<Json<ComicResponse>> {
    let today = state.today();
    let date = state.archive.random_date(&mut ThreadRandom::new(), today)?;
    let comic = state.archive.comic_for(date, today)?;

    tracing::debug!(date = %comic.date, "Serving random comic");
    Ok(Json(comic.into()))
}

/// GET /api/v1/comics/:date
pub async fn comic_by_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> ApiResult<Json<ComicResponse>> {
    let comic = state.archive.comic_for_str(&date, state.today())?;
    Ok(Json(comic.into()))
}
