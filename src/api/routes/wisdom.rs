//! Wisdom Routes
//!
//! - GET /api/v1/wisdom - All quotes
//! - GET /api/v1/wisdom/random - One quote, drawn uniformly

use axum::Json;

use crate::api::dto::{WisdomListResponse, WisdomResponse};
use crate::api::error::ApiResult;
use crate::content::{random_wisdom, ThreadRandom, WISDOM};

/// GET /api/v1/wisdom
pub async fn list_wisdom() -> Json<WisdomListResponse> {
    Json(WisdomListResponse {
        quotes: WISDOM.to_vec(),
        total: WISDOM.len(),
    })
}

/// GET /api/v1/wisdom/random
pub async fn random_quote() -> ApiResult<Json<WisdomResponse>> {
    let quote = random_wisdom(&mut ThreadRandom::new())?;
    Ok(Json(WisdomResponse {
        quote: quote.to_string(),
    }))
}
