pub mod event;
pub mod media;
pub mod post;

pub use event::Event;
pub use media::Media;
pub use post::Post;

use std::fmt::Display;

/// The kinds of content this service stores, with the collection each kind
/// lives in declared in one place.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum ContentKind {
    Post,
    Event,
    Media,
}

impl ContentKind {
    pub const ALL: [Self; 3] = [Self::Post, Self::Event, Self::Media];

    #[must_use]
    pub fn collection_name(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Event => "event",
            Self::Media => "media",
        }
    }

    /// Stored fields holding native BSON datetimes. List responses render
    /// these as RFC 3339 text.
    #[must_use]
    pub fn datetime_fields(self) -> &'static [&'static str] {
        match self {
            Self::Post => &["published_at"],
            Self::Event => &["date"],
            Self::Media => &[],
        }
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection_name())
    }
}
