use bson::{Bson, Document};
use tribuna_common::model::ContentKind;

/// Prepares a stored document for transport: the store-assigned `_id`
/// becomes its hex string form and the kind's datetime fields become
/// RFC 3339 text. Absent fields and fields of unexpected shape pass through
/// untouched; this never fails.
pub fn normalize_document(mut document: Document, kind: ContentKind) -> Document {
    if let Ok(id) = document.get_object_id("_id") {
        document.insert("_id", id.to_hex());
    }

    for field in kind.datetime_fields() {
        let rendered = match document.get(field) {
            Some(Bson::DateTime(datetime)) => datetime.try_to_rfc3339_string().ok(),
            _ => None,
        };
        if let Some(rendered) = rendered {
            document.insert(*field, rendered);
        }
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn id_becomes_hex_string() {
        let id = ObjectId::new();
        let document = normalize_document(doc! { "_id": id }, ContentKind::Media);
        assert_eq!(document.get_str("_id").unwrap(), id.to_hex());
    }

    #[test]
    fn datetime_fields_become_rfc3339_text() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "t",
            "published_at": bson::DateTime::from_millis(1_714_560_000_000),
        };
        let document = normalize_document(document, ContentKind::Post);

        let published_at = document.get_str("published_at").unwrap();
        assert!(published_at.starts_with("2024-05-01T"));
    }

    #[test]
    fn absent_fields_pass_through_untouched() {
        let document = normalize_document(doc! { "title": "t" }, ContentKind::Post);
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("published_at"));
    }

    #[test]
    fn already_textual_datetime_is_left_alone() {
        let document = doc! { "date": "2024-05-01" };
        let document = normalize_document(document, ContentKind::Event);
        assert_eq!(document.get_str("date").unwrap(), "2024-05-01");
    }
}
