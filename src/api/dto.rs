//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::{Comic, Meme};

/// Meme list response
#[derive(Debug, Serialize)]
pub struct MemeListResponse {
    pub memes: Vec<Meme>,
    pub total: usize,
}

/// A comic with its display strings
#[derive(Debug, Serialize, Deserialize)]
pub struct ComicResponse {
    pub date: NaiveDate,
    pub image_url: String,
    pub title: String,
    /// Date badge text, e.g. "Monday, June 19, 1978"
    pub long_date: String,
}

impl From<Comic> for ComicResponse {
    fn from(comic: Comic) -> Self {
        let long_date = comic.long_date();
        Self {
            date: comic.date,
            image_url: comic.image_url,
            title: comic.title,
            long_date,
        }
    }
}

/// Single quote response
#[derive(Debug, Serialize, Deserialize)]
pub struct WisdomResponse {
    pub quote: String,
}

/// All quotes
#[derive(Debug, Serialize)]
pub struct WisdomListResponse {
    pub quotes: Vec<&'static str>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Whether the page bundle directory exists
    pub static_dir: String,
    /// Days currently in the comic archive
    pub archive_days: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
