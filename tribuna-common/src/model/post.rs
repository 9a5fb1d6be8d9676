use bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A news post or article.
///
/// Deserialization is the validation path: required fields are non-optional,
/// everything else defaults. `published_at` stays `None` until the create
/// handler stamps it.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Post {
    pub title: String,
    pub summary: String,
    /// HTML or Markdown body.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub featured: bool,
}

impl Post {
    /// Fills `published_at` with the current time when none was provided.
    /// Explicitly dated posts keep their date.
    pub fn stamp_published_at_if_unset(&mut self) {
        if self.published_at.is_none() {
            self.published_at = Some(OffsetDateTime::now_utc());
        }
    }

    /// Store-native form. Optional fields that are unset are omitted rather
    /// than stored as nulls, and `published_at` becomes a native datetime.
    #[must_use]
    pub fn into_document(self) -> Document {
        let mut document = doc! {
            "title": self.title,
            "summary": self.summary,
            "content": self.content,
            "tags": self.tags,
            "featured": self.featured,
        };
        if let Some(cover_image) = self.cover_image {
            document.insert("cover_image", cover_image);
        }
        if let Some(author) = self.author {
            document.insert("author", author);
        }
        if let Some(published_at) = self.published_at {
            document.insert("published_at", Bson::DateTime(published_at.into()));
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn minimal_payload_fills_defaults() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "title": "t",
            "summary": "s",
            "content": "<p>c</p>",
        }))
        .unwrap();

        assert!(post.tags.is_empty());
        assert!(!post.featured);
        assert!(post.cover_image.is_none());
        assert!(post.author.is_none());
        assert!(post.published_at.is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result: Result<Post, _> = serde_json::from_value(serde_json::json!({
            "title": "t",
            "summary": "s",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn published_at_parses_rfc3339() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "title": "t",
            "summary": "s",
            "content": "c",
            "published_at": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        assert_eq!(post.published_at, Some(datetime!(2024-05-01 12:00 UTC)));
    }

    #[test]
    fn unset_published_at_is_stamped_near_now() {
        let mut post: Post = serde_json::from_value(serde_json::json!({
            "title": "t",
            "summary": "s",
            "content": "c",
        }))
        .unwrap();

        let before = OffsetDateTime::now_utc();
        post.stamp_published_at_if_unset();
        let after = OffsetDateTime::now_utc();

        let stamped = post.published_at.unwrap();
        assert!(stamped >= before);
        assert!(stamped <= after);
    }

    #[test]
    fn explicit_published_at_is_left_untouched_by_stamping() {
        let mut post: Post = serde_json::from_value(serde_json::json!({
            "title": "t",
            "summary": "s",
            "content": "c",
            "published_at": "2024-05-01T12:00:00Z",
        }))
        .unwrap();

        post.stamp_published_at_if_unset();
        assert_eq!(post.published_at, Some(datetime!(2024-05-01 12:00 UTC)));
    }

    #[test]
    fn document_form_omits_unset_optionals_and_keeps_native_datetime() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "title": "t",
            "summary": "s",
            "content": "c",
            "tags": ["a", "b"],
            "published_at": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        let document = post.into_document();

        assert!(!document.contains_key("cover_image"));
        assert!(!document.contains_key("author"));
        assert!(matches!(
            document.get("published_at"),
            Some(Bson::DateTime(_))
        ));
        assert_eq!(document.get_bool("featured").unwrap(), false);
    }
}
