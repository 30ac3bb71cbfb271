//! Site content model
//!
//! Everything the page displays and every piece of state a section owns:
//!
//! - [`catalog`]: fixed memes, wisdom quotes, nav anchors and fun facts
//! - [`comic`]: random comic archive and the comic section state
//! - [`gallery`]: meme gallery lightbox state
//! - [`wisdom`]: footer quote state
//! - [`random`]: the random source seam used by all draws
//!
//! The module is free of I/O and compiles for `wasm32`.

pub mod catalog;
pub mod comic;
pub mod error;
pub mod gallery;
pub mod random;
pub mod wisdom;

pub use catalog::{
    card_accent, find_meme, FunFact, Meme, NavLink, CARD_ACCENTS, FUN_FACTS, MEMES, NAV_LINKS,
    WISDOM,
};
pub use comic::{
    first_strip_date, format_long_date, Comic, ComicArchive, ComicDisplay, ComicViewer,
    PlaceholderImage,
};
pub use error::{ContentError, ContentResult, COMIC_FAILURE_MESSAGE};
pub use gallery::Gallery;
pub use random::{pick, pick_index, RandomSource, SequenceSource};
pub use wisdom::{random_wisdom, WisdomBoard, WISDOM_PLACEHOLDER};

#[cfg(feature = "server")]
pub use random::ThreadRandom;
