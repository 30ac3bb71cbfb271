//! Meme Routes
//!
//! - GET /api/v1/memes - List the gallery
//! - GET /api/v1/memes/:id - Get a single meme

use axum::{extract::Path, Json};

use crate::api::dto::MemeListResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::content::{find_meme, Meme, MEMES};

/// GET /api/v1/memes
pub async fn list_memes() -> Json<MemeListResponse> {
    Json(MemeListResponse {
        memes: MEMES.to_vec(),
        total: MEMES.len(),
    })
}

/// GET /api/v1/memes/:id
///
/// Malformed ids are reported as `ApiError::Validation`.
pub async fn get_meme(Path(raw): Path<String>) -> ApiResult<Json<Meme>> {
    let id = parse_meme_id(&raw)?;
    Ok(Json(*find_meme(id)?))
}

fn parse_meme_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::Validation(format!("Meme id must be a non-negative integer, got '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meme_id() {
        assert_eq!(parse_meme_id("7").unwrap(), 7);
        assert_eq!(parse_meme_id("99999999999").unwrap(), 99_999_999_999);
        assert!(matches!(parse_meme_id("abc"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_meme_id("-1"), Err(ApiError::Validation(_))));
    }
}
