//! Meme gallery with lightbox
//!
//! The gallery only tracks which meme, if any, is open in the lightbox.
//! Closing always returns to the state the gallery had before opening.

use super::catalog::{find_meme, Meme, MEMES};
use super::error::ContentResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    memes: &'static [Meme],
    selected: Option<u32>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            memes: &MEMES,
            selected: None,
        }
    }

    /// Memes in display order
    pub fn memes(&self) -> &'static [Meme] {
        self.memes
    }

    /// Open the lightbox on a meme
    pub fn open(&mut self, id: u32) -> ContentResult<&'static Meme> {
        let meme = find_meme(id.into())?;
        self.selected = Some(meme.id);
        Ok(meme)
    }

    /// Close the lightbox. No-op when nothing is open.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Meme currently shown in the lightbox
    pub fn selected(&self) -> Option<&'static Meme> {
        self.selected.and_then(|id| find_meme(id.into()).ok())
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::error::ContentError;

    #[test]
    fn test_open_then_close_restores_state() {
        for meme in MEMES.iter() {
            let mut gallery = Gallery::new();
            let before = gallery;

            gallery.open(meme.id).unwrap();
            assert!(gallery.is_open());
            gallery.close();

            assert_eq!(gallery, before);
        }
    }

    #[test]
    fn test_lightbox_shows_same_meme() {
        let mut gallery = Gallery::new();
        let opened = gallery.open(5).unwrap();

        assert_eq!(gallery.selected(), Some(opened));
        assert_eq!(opened.title, "Odie Who?");
    }

    #[test]
    fn test_open_unknown_keeps_state() {
        let mut gallery = Gallery::new();
        gallery.open(2).unwrap();
        let before = gallery;

        assert_eq!(gallery.open(0), Err(ContentError::MemeNotFound(0)));
        assert_eq!(gallery, before);
    }

    #[test]
    fn test_close_when_closed() {
        let mut gallery = Gallery::new();
        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(gallery.memes().len(), 12);
    }
}
