//! UI Components
//!
//! One component per page section.

pub mod comic_viewer;
pub mod footer;
pub mod header;
pub mod hero;
pub mod loading;
pub mod meme_gallery;

pub use comic_viewer::ComicViewer;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use meme_gallery::MemeGallery;
