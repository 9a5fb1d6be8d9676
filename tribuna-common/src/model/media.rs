use bson::{Document, doc};
use serde::{Deserialize, Serialize};

/// A media gallery item.
#[derive(Clone, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct Media {
    pub title: String,
    /// "photo" or "video" by convention, but stored as a free string.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Media {
    #[must_use]
    pub fn into_document(self) -> Document {
        let mut document = doc! {
            "title": self.title,
            "type": self.kind,
            "url": self.url,
            "tags": self.tags,
        };
        if let Some(thumbnail) = self.thumbnail {
            document.insert("thumbnail", thumbnail);
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_round_trips_through_rename() {
        let media: Media = serde_json::from_value(serde_json::json!({
            "title": "t",
            "type": "photo",
            "url": "https://example.com/a.jpg",
        }))
        .unwrap();
        assert_eq!(media.kind, "photo");
        assert!(media.tags.is_empty());

        let document = media.into_document();
        assert_eq!(document.get_str("type").unwrap(), "photo");
        assert!(!document.contains_key("thumbnail"));
    }

    #[test]
    fn unexpected_type_values_are_not_rejected() {
        let media: Result<Media, _> = serde_json::from_value(serde_json::json!({
            "title": "t",
            "type": "audio",
            "url": "https://example.com/a.mp3",
        }));
        assert!(media.is_ok());
    }
}
