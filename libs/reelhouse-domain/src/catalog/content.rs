//! Playable catalog entries
//!
//! A `Content` is either a movie or a series. The variant-specific payload
//! lives in `Format`, and `play` dispatches on it to build the announcement
//! shown to the viewer.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::catalog::error::{CatalogError, Result};
use crate::catalog::ids::ContentId;

/// Ratings accepted by the catalog
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// The kind of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Movie,
    Series,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Movie => "Movie",
            ContentKind::Series => "Series",
        }
    }

    /// Compare against a kind label, ignoring ASCII case only
    pub fn matches(&self, label: &str) -> bool {
        self.label().eq_ignore_ascii_case(label)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        [ContentKind::Movie, ContentKind::Series]
            .into_iter()
            .find(|kind| kind.matches(s))
            .ok_or_else(|| CatalogError::unknown_kind(s))
    }
}

/// Variant-specific payload of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Format {
    Movie { duration_minutes: u32 },
    Series { episodes: u32 },
}

impl Format {
    pub fn kind(&self) -> ContentKind {
        match self {
            Format::Movie { .. } => ContentKind::Movie,
            Format::Series { .. } => ContentKind::Series,
        }
    }
}

/// Announcement produced when a title starts playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Playback {
    Movie { title: String, minutes: u32 },
    Series { title: String, episodes: u32 },
}

impl Playback {
    pub fn title(&self) -> &str {
        match self {
            Playback::Movie { title, .. } | Playback::Series { title, .. } => title,
        }
    }
}

impl fmt::Display for Playback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Playback::Movie { title, minutes } => {
                write!(f, "▶ Playing Movie: {} [{} mins]", title, minutes)
            }
            Playback::Series { title, episodes } => {
                write!(f, "▶ Playing Series: {} [Episodes: {}]", title, episodes)
            }
        }
    }
}

/// A playable catalog entry
///
/// Identity (`id`, `title`, `format`) is fixed at creation. The rating is
/// the only mutable field; it is kept in a `Cell` because entries are shared
/// through `Rc` between the catalog, watchlists and histories.
///
/// Not deserializable, so every instance goes through the rating check:
///
/// ```compile_fail
/// fn from_json<T: serde::de::DeserializeOwned>() {}
/// from_json::<reelhouse_domain::catalog::Content>();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    id: ContentId,
    title: String,
    rating: Cell<u8>,
    format: Format,
}

impl Content {
    /// Create a movie
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyTitle` if `title` is blank
    /// - `CatalogError::InvalidRating` if `rating` is outside 1..=5
    pub fn movie(
        id: ContentId,
        title: impl Into<String>,
        duration_minutes: u32,
        rating: u8,
    ) -> Result<Self> {
        Self::new(id, title, Format::Movie { duration_minutes }, rating)
    }

    /// Create a series
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyTitle` if `title` is blank
    /// - `CatalogError::InvalidRating` if `rating` is outside 1..=5
    pub fn series(
        id: ContentId,
        title: impl Into<String>,
        episodes: u32,
        rating: u8,
    ) -> Result<Self> {
        Self::new(id, title, Format::Series { episodes }, rating)
    }

    fn new(id: ContentId, title: impl Into<String>, format: Format, rating: u8) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        if !RATING_RANGE.contains(&rating) {
            return Err(CatalogError::InvalidRating(rating));
        }

        Ok(Self {
            id,
            title,
            rating: Cell::new(rating),
            format,
        })
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> u8 {
        self.rating.get()
    }

    pub fn kind(&self) -> ContentKind {
        self.format.kind()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Change the rating
    ///
    /// Ratings outside 1..=5 are ignored and the current rating is kept.
    pub fn set_rating(&self, rating: u8) {
        if RATING_RANGE.contains(&rating) {
            self.rating.set(rating);
        }
    }

    /// Start playback and return the announcement for this entry
    pub fn play(&self) -> Playback {
        let title = self.title.clone();
        match self.format {
            Format::Movie { duration_minutes } => Playback::Movie {
                title,
                minutes: duration_minutes,
            },
            Format::Series { episodes } => Playback::Series { title, episodes },
        }
    }
}
