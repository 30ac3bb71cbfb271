//! # Garfield Vibes
//!
//! A Y2K/vaporwave tribute page: a meme gallery with a lightbox, a random
//! comic fetcher, a wisdom quote and a light/dark theme toggle.
//!
//! ## Modules
//!
//! - [`content`]: memes, comics, wisdom and the per-section state
//! - [`theme`]: the light/dark flag and its persisted preference
//! - [`api`]: static host and JSON content API with Axum (`server` feature)
//! - [`config`]: TOML and environment configuration (`server` feature)
//!
//! The page itself lives in `vibes-ui/` and depends on this crate with
//! default features turned off.
//!
//! ## Quick Start
//!
//! ```rust
//! use garfield_vibes::content::{ComicArchive, Gallery, SequenceSource, WisdomBoard};
//! use garfield_vibes::theme::Theme;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut rng = SequenceSource::new(vec![0.0, 0.5]);
//!
//! let date = ComicArchive::default().random_date(&mut rng, today).unwrap();
//! assert_eq!(date.to_string(), "1978-06-19");
//!
//! let mut wisdom = WisdomBoard::new();
//! println!("{}", wisdom.refresh(&mut rng).unwrap());
//!
//! let mut gallery = Gallery::new();
//! gallery.open(1).unwrap();
//! gallery.close();
//!
//! assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
//! ```

pub mod content;
pub mod theme;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;

// Re-export top-level types for convenience
pub use content::{
    Comic, ComicArchive, ComicViewer, ContentError, ContentResult, Gallery, Meme, RandomSource,
    WisdomBoard,
};

pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController};

#[cfg(feature = "server")]
pub use theme::FilePreferenceStore;

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
