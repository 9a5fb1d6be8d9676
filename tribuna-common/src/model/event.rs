use bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An event, rally, or meeting.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Event {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// City or venue.
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Event {
    #[must_use]
    pub fn into_document(self) -> Document {
        let mut document = doc! {
            "title": self.title,
            "location": self.location,
            "date": Bson::DateTime(self.date.into()),
        };
        if let Some(description) = self.description {
            document.insert("description", description);
        }
        if let Some(image) = self.image {
            document.insert("image", image);
        }
        if let Some(link) = self.link {
            document.insert("link", link);
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_required() {
        let result: Result<Event, _> = serde_json::from_value(serde_json::json!({
            "title": "t",
            "location": "Москва",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn document_form_stores_native_date() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "title": "t",
            "location": "Москва",
            "date": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        let document = event.into_document();

        assert!(matches!(document.get("date"), Some(Bson::DateTime(_))));
        assert!(!document.contains_key("description"));
        assert!(!document.contains_key("link"));
    }
}
