//! Random comic archive
//!
//! A comic is fully determined by its publication date: the placeholder
//! image seed and the title are both derived from it. Drawing a random comic
//! means drawing a day uniformly from the archive range, first strip to
//! today, both ends inclusive.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{ContentError, ContentResult, COMIC_FAILURE_MESSAGE};
use super::random::{pick_index, RandomSource};

/// Date the first strip ran
pub fn first_strip_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1978, 6, 19).unwrap_or_default()
}

/// Long form used in titles and the date badge, e.g. "Monday, June 19, 1978"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// A comic strip ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    pub date: NaiveDate,
    pub image_url: String,
    pub title: String,
}

impl Comic {
    /// Date badge text
    pub fn long_date(&self) -> String {
        format_long_date(self.date)
    }
}

/// Placeholder image service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderImage {
    #[serde(default = "default_image_base")]
    pub base_url: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_image_base() -> String {
    "https://picsum.photos".to_string()
}

fn default_width() -> u32 {
    900
}

fn default_height() -> u32 {
    300
}

impl Default for PlaceholderImage {
    fn default() -> Self {
        Self {
            base_url: default_image_base(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl PlaceholderImage {
    /// Image reference for a given day
    pub fn url_for(&self, date: NaiveDate) -> String {
        format!(
            "{}/seed/comic{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            date.format("%Y-%m-%d"),
            self.width,
            self.height
        )
    }
}

/// The range of publishable days and how to render them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicArchive {
    #[serde(default = "first_strip_date")]
    pub first_strip: NaiveDate,
    #[serde(flatten)]
    pub image: PlaceholderImage,
}

impl Default for ComicArchive {
    fn default() -> Self {
        Self {
            first_strip: first_strip_date(),
            image: PlaceholderImage::default(),
        }
    }
}

impl ComicArchive {
    /// Inclusive `(first, last)` bounds as of `today`
    pub fn range(&self, today: NaiveDate) -> ContentResult<(NaiveDate, NaiveDate)> {
        if today < self.first_strip {
            return Err(ContentError::ClockBeforeArchive {
                today,
                first: self.first_strip,
            });
        }
        Ok((self.first_strip, today))
    }

    /// Number of days in the archive as of `today`
    pub fn day_count(&self, today: NaiveDate) -> ContentResult<usize> {
        let (first, last) = self.range(today)?;
        Ok((last - first).num_days() as usize + 1)
    }

    /// Draw one day uniformly from the archive
    pub fn random_date<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
    ) -> ContentResult<NaiveDate> {
        let days = self.day_count(today)?;
        let offset = pick_index(rng, days)?;
        Ok(self.first_strip + Duration::days(offset as i64))
    }

    /// Build the comic for a specific day, rejecting days outside the archive
    pub fn comic_for(&self, date: NaiveDate, today: NaiveDate) -> ContentResult<Comic> {
        let (first, last) = self.range(today)?;
        if date < first || date > last {
            return Err(ContentError::DateOutOfRange { date, first, last });
        }
        Ok(self.render(date))
    }

    /// Parse a `YYYY-MM-DD` string and build its comic
    pub fn comic_for_str(&self, date: &str, today: NaiveDate) -> ContentResult<Comic> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ContentError::InvalidDate(date.to_string()))?;
        self.comic_for(parsed, today)
    }

    /// Draw a random comic.
    ///
    /// The draw is synchronous; the async signature lets the page treat it
    /// like any other fetch.
    pub async fn fetch_random<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
    ) -> ContentResult<Comic> {
        let date = self.random_date(rng, today)?;
        tracing::debug!(%date, "Drew random comic");
        Ok(self.render(date))
    }

    fn render(&self, date: NaiveDate) -> Comic {
        Comic {
            date,
            image_url: self.image.url_for(date),
            title: format!("Garfield - {}", format_long_date(date)),
        }
    }
}

/// What the comic section should show right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComicDisplay<'a> {
    Loading,
    Failed(&'a str),
    Showing(&'a Comic),
    Empty,
}

/// State of the comic section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComicViewer {
    comic: Option<Comic>,
    loading: bool,
    error: Option<String>,
}

impl ComicViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state; clears any previous error
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Leave the loading state with the outcome of a fetch
    pub fn finish(&mut self, result: ContentResult<Comic>) {
        match result {
            Ok(comic) => {
                self.comic = Some(comic);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Comic fetch failed");
                self.error = Some(COMIC_FAILURE_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn comic(&self) -> Option<&Comic> {
        self.comic.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn display(&self) -> ComicDisplay<'_> {
        if self.loading {
            ComicDisplay::Loading
        } else if let Some(err) = &self.error {
            ComicDisplay::Failed(err)
        } else if let Some(comic) = &self.comic {
            ComicDisplay::Showing(comic)
        } else {
            ComicDisplay::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::random::SequenceSource;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_random_date_within_bounds() {
        let archive = ComicArchive::default();
        let today = date(2024, 3, 15);
        let mut rng = SequenceSource::new(vec![0.0, 0.999_999_999, 0.5, 0.123, 0.876]);

        for _ in 0..5 {
            let d = archive.random_date(&mut rng, today).unwrap();
            assert!(d >= date(1978, 6, 19) && d <= today, "out of range: {}", d);
        }
    }

    #[test]
    fn test_random_date_hits_both_ends() {
        let archive = ComicArchive::default();
        let today = date(2024, 3, 15);
        let mut rng = SequenceSource::new(vec![0.0, 0.999_999_999_9]);

        assert_eq!(archive.random_date(&mut rng, today).unwrap(), date(1978, 6, 19));
        assert_eq!(archive.random_date(&mut rng, today).unwrap(), today);
    }

    #[test]
    fn test_random_date_uniform_over_days() {
        let archive = ComicArchive::default();
        let today = date(1978, 6, 28); // ten-day archive
        assert_eq!(archive.day_count(today).unwrap(), 10);

        let mut rng = SequenceSource::stepping(10);
        let drawn: HashSet<NaiveDate> = (0..10)
            .map(|_| archive.random_date(&mut rng, today).unwrap())
            .collect();

        assert_eq!(drawn.len(), 10);
    }

    #[test]
    fn test_single_day_archive() {
        let archive = ComicArchive::default();
        let today = date(1978, 6, 19);
        let mut rng = SequenceSource::new(vec![0.7]);

        assert_eq!(archive.random_date(&mut rng, today).unwrap(), today);
    }

    #[test]
    fn test_clock_before_archive() {
        let archive = ComicArchive::default();
        let mut rng = SequenceSource::new(vec![0.5]);

        let err = archive.random_date(&mut rng, date(1970, 1, 1)).unwrap_err();
        assert!(matches!(err, ContentError::ClockBeforeArchive { .. }));
    }

    #[test]
    fn test_comic_rendering() {
        let archive = ComicArchive::default();
        let comic = archive.comic_for(date(1978, 6, 19), date(2024, 1, 1)).unwrap();

        assert_eq!(
            comic.image_url,
            "https://picsum.photos/seed/comic1978-06-19/900/300"
        );
        assert_eq!(comic.title, "Garfield - Monday, June 19, 1978");
        assert_eq!(comic.long_date(), "Monday, June 19, 1978");
    }

    #[test]
    fn test_image_url_is_deterministic() {
        let image = PlaceholderImage {
            base_url: "http://localhost:9000/".to_string(),
            width: 300,
            height: 100,
        };
        let d = date(2001, 9, 3);

        assert_eq!(image.url_for(d), image.url_for(d));
        assert_eq!(image.url_for(d), "http://localhost:9000/seed/comic2001-09-03/300/100");
    }

    #[test]
    fn test_comic_for_rejects_out_of_range() {
        let archive = ComicArchive::default();
        let today = date(2020, 1, 1);

        assert!(matches!(
            archive.comic_for(date(1978, 6, 18), today),
            Err(ContentError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            archive.comic_for(date(2020, 1, 2), today),
            Err(ContentError::DateOutOfRange { .. })
        ));
        assert!(archive.comic_for(today, today).is_ok());
    }

    #[test]
    fn test_comic_for_str() {
        let archive = ComicArchive::default();
        let today = date(2020, 1, 1);

        assert_eq!(
            archive.comic_for_str("1999-12-31", today).unwrap().date,
            date(1999, 12, 31)
        );
        assert_eq!(
            archive.comic_for_str("last tuesday", today),
            Err(ContentError::InvalidDate("last tuesday".to_string()))
        );
    }

    #[test]
    fn test_viewer_lifecycle() {
        let archive = ComicArchive::default();
        let mut viewer = ComicViewer::new();
        assert_eq!(viewer.display(), ComicDisplay::Empty);

        viewer.begin();
        assert_eq!(viewer.display(), ComicDisplay::Loading);

        let comic = archive.comic_for(date(1990, 5, 5), date(2020, 1, 1)).unwrap();
        viewer.finish(Ok(comic.clone()));
        assert!(!viewer.is_loading());
        assert_eq!(viewer.display(), ComicDisplay::Showing(&comic));
    }

    #[test]
    fn test_viewer_failure_and_recovery() {
        let mut viewer = ComicViewer::new();

        viewer.begin();
        viewer.finish(Err(ContentError::EmptyPool));
        assert_eq!(viewer.error(), Some(COMIC_FAILURE_MESSAGE));
        assert_eq!(viewer.display(), ComicDisplay::Failed(COMIC_FAILURE_MESSAGE));

        // Starting again clears the error
        viewer.begin();
        assert_eq!(viewer.error(), None);
        assert_eq!(viewer.display(), ComicDisplay::Loading);
    }

    #[cfg(feature = "server")]
    #[tokio::test]
    async fn test_fetch_random() {
        let archive = ComicArchive::default();
        let today = date(2024, 3, 15);
        let mut rng = SequenceSource::new(vec![0.0]);

        let comic = archive.fetch_random(&mut rng, today).await.unwrap();
        assert_eq!(comic.date, date(1978, 6, 19));
    }
}
