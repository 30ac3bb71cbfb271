//! Browser State
//!
//! Browser-backed pieces of the content model: the theme context and the
//! random source.

pub mod random;
pub mod theme;

pub use random::BrowserRandom;
pub use theme::{provide_theme, use_theme, ThemeContext};
