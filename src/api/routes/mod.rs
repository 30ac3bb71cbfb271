//! API Routes
//!
//! Route handlers organized by functionality.

pub mod comics;
pub mod health;
pub mod memes;
pub mod wisdom;
