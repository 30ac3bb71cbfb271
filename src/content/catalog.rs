//! Fixed site content
//!
//! The meme collection, wisdom quotes, navigation anchors and fun facts.
//! Nothing here changes after startup.

use serde::Serialize;

use super::error::{ContentError, ContentResult};

/// A single gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meme {
    pub id: u32,
    /// Image path relative to the site root
    pub url: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

impl Meme {
    const fn new(id: u32, url: &'static str, title: &'static str, caption: &'static str) -> Self {
        Self {
            id,
            url,
            title,
            caption,
        }
    }
}

pub static MEMES: [Meme; 12] = [
    Meme::new(1, "/memes/meme1.png", "Monday Blues", "I hate Mondays... but I love lasagna more"),
    Meme::new(2, "/memes/meme2.jpg", "Lasagna Dreams", "When the lasagna hits different at 3am"),
    Meme::new(3, "/memes/meme3.jpg", "Nap Time", "Sleep is just death being shy"),
    Meme::new(4, "/memes/meme4.jpg", "Diet? Never Heard of Her", "Calories don't count if no one sees you eat"),
    Meme::new(5, "/memes/meme5.jpg", "Odie Who?", "That's a weird way to spell 'annoying'"),
    Meme::new(6, "/memes/meme6.jpg", "Jon's Cooking", "I've seen things... terrible things"),
    Meme::new(7, "/memes/meme7.jpg", "Existential Dread", "Life is meaningless but lasagna gives it purpose"),
    Meme::new(8, "/memes/meme8.jpg", "Maximum Loaf", "I'm not fat, I'm fluffy and full of dreams"),
    Meme::new(9, "/memes/meme9.jpg", "Morning Person", "Don't talk to me until I've had my 5th nap"),
    Meme::new(10, "/memes/meme10.jpg", "Weekend Mood", "Finally, inner peace (and outer pizza)"),
    Meme::new(11, "/memes/meme11.jpg", "Self Care", "Treating myself? I AM the treat"),
    Meme::new(12, "/memes/meme12.jpg", "Productivity King", "I did nothing today and it was everything I hoped"),
];

/// Decorations cycled over gallery cards by position
pub const CARD_ACCENTS: [&str; 5] = ["✨", "💖", "🧡", "💜", "🌟"];

pub static WISDOM: [&str; 10] = [
    "I hate Mondays.",
    "Diet is 'die' with a 't'.",
    "Love me, feed me, never leave me.",
    "I'm not overweight. I'm undertall.",
    "Big, fat, hairy deal.",
    "Sleep is beautiful. Never wake up.",
    "I never met a lasagna I didn't like.",
    "Exercise? I thought you said extra fries!",
    "The only thing active about me is my imagination.",
    "If you want to appear smarter, hang around someone stupider.",
];

/// In-page navigation anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { name: "Memes", href: "#memes" },
    NavLink { name: "Comics", href: "#comics" },
    NavLink { name: "About", href: "#about" },
];

/// Statistic shown under the comic viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunFact {
    pub emoji: &'static str,
    pub stat: &'static str,
    pub label: &'static str,
}

pub const FUN_FACTS: [FunFact; 3] = [
    FunFact { emoji: "📅", stat: "17,000+", label: "Comics Published" },
    FunFact { emoji: "🌍", stat: "2,500+", label: "Newspapers Worldwide" },
    FunFact { emoji: "🎂", stat: "1978", label: "Year Created" },
];

/// Look up a meme by identifier. Any number is accepted; unknown ids yield
/// `MemeNotFound`.
pub fn find_meme(id: u64) -> ContentResult<&'static Meme> {
    MEMES
        .iter()
        .find(|m| u64::from(m.id) == id)
        .ok_or(ContentError::MemeNotFound(id))
}

/// Accent emoji for the card at `index`
pub fn card_accent(index: usize) -> &'static str {
    CARD_ACCENTS[index % CARD_ACCENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_meme_ids_are_unique_and_sequential() {
        let ids: HashSet<u32> = MEMES.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MEMES.len());

        for (i, meme) in MEMES.iter().enumerate() {
            assert_eq!(meme.id as usize, i + 1);
            assert!(meme.url.starts_with("/memes/meme"));
        }
    }

    #[test]
    fn test_find_meme() {
        assert_eq!(find_meme(3).unwrap().title, "Nap Time");
        assert_eq!(find_meme(99), Err(ContentError::MemeNotFound(99)));
        assert_eq!(
            find_meme(99_999_999_999),
            Err(ContentError::MemeNotFound(99_999_999_999))
        );
    }

    #[test]
    fn test_card_accent_cycles() {
        assert_eq!(card_accent(0), "✨");
        assert_eq!(card_accent(4), "🌟");
        assert_eq!(card_accent(5), "✨");
        assert_eq!(card_accent(11), "💖");
    }

    #[test]
    fn test_wisdom_has_no_duplicates() {
        let unique: HashSet<&str> = WISDOM.iter().copied().collect();
        assert_eq!(unique.len(), WISDOM.len());
    }
}
