use bson::{Bson, Document, doc};
use mongodb::{Client, Collection, Database};
use thiserror::Error;
use tribuna_common::model::ContentKind;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The process started without database configuration. Every data
    /// operation fails with this same error for the process lifetime.
    #[error("Database not configured")]
    Unavailable,
    #[error("Connecting to the document store failed: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("Writing to collection \"{collection}\" failed: {source}")]
    Write {
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("Reading from collection \"{collection}\" failed: {source}")]
    Read {
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("Listing collection names failed: {0}")]
    ListCollections(#[source] mongodb::error::Error),
}

/// Handle to the document store.
///
/// Built once at startup and shared read-only. `unconfigured` is the explicit
/// sentinel for a process started without database settings; it is not an
/// error until a data operation is attempted.
#[derive(Clone)]
pub struct StoreClient {
    database: Option<Database>,
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl StoreClient {
    pub async fn connect(url: &str, database_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(StoreError::Connect)?;

        Ok(Self {
            database: Some(client.database(database_name)),
        })
    }

    #[must_use]
    pub fn unconfigured() -> Self {
        Self { database: None }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.database.is_some()
    }

    fn collection(&self, kind: ContentKind) -> Result<Collection<Document>> {
        let database = self.database.as_ref().ok_or(StoreError::Unavailable)?;
        Ok(database.collection(kind.collection_name()))
    }

    /// Inserts one document and returns the store-assigned id as a string.
    pub async fn insert(&self, kind: ContentKind, document: Document) -> Result<String> {
        let result = self
            .collection(kind)?
            .insert_one(document)
            .await
            .map_err(|source| StoreError::Write {
                collection: kind.collection_name(),
                source,
            })?;

        Ok(render_id(&result.inserted_id))
    }

    /// Returns up to `limit` documents matching `filter`, in store-native
    /// order. Callers must treat the order as unspecified.
    pub async fn find(
        &self,
        kind: ContentKind,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>> {
        let mut cursor = self
            .collection(kind)?
            .find(filter)
            .limit(limit)
            .await
            .map_err(|source| StoreError::Read {
                collection: kind.collection_name(),
                source,
            })?;

        let mut documents = Vec::new();
        while cursor.advance().await.map_err(|source| StoreError::Read {
            collection: kind.collection_name(),
            source,
        })? {
            let document = cursor
                .deserialize_current()
                .map_err(|source| StoreError::Read {
                    collection: kind.collection_name(),
                    source,
                })?;
            documents.push(document);
        }

        Ok(documents)
    }

    /// Whether the collection holds at least one document.
    pub async fn has_documents(&self, kind: ContentKind) -> Result<bool> {
        let count = self
            .collection(kind)?
            .count_documents(doc! {})
            .await
            .map_err(|source| StoreError::Read {
                collection: kind.collection_name(),
                source,
            })?;

        Ok(count > 0)
    }

    pub async fn collection_names(&self) -> Result<Vec<String>> {
        let database = self.database.as_ref().ok_or(StoreError::Unavailable)?;
        database
            .list_collection_names()
            .await
            .map_err(StoreError::ListCollections)
    }
}

/// Generated ids are ObjectIds in practice; anything else falls back to its
/// BSON display form.
fn render_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(id) => id.to_hex(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn object_ids_render_as_hex() {
        let id = ObjectId::new();
        let rendered = render_id(&Bson::ObjectId(id));
        assert_eq!(rendered, id.to_hex());
        assert_eq!(rendered.len(), 24);
    }

    #[test]
    fn non_object_ids_fall_back_to_display() {
        assert_eq!(render_id(&Bson::Int64(7)), "7");
    }

    #[tokio::test]
    async fn unconfigured_client_reports_unavailable_everywhere() {
        let client = StoreClient::unconfigured();
        assert!(!client.is_configured());

        assert!(matches!(
            client.insert(ContentKind::Post, doc! {}).await,
            Err(StoreError::Unavailable)
        ));
        assert!(matches!(
            client.find(ContentKind::Event, doc! {}, 10).await,
            Err(StoreError::Unavailable)
        ));
        assert!(matches!(
            client.has_documents(ContentKind::Media).await,
            Err(StoreError::Unavailable)
        ));
        assert!(matches!(
            client.collection_names().await,
            Err(StoreError::Unavailable)
        ));
    }
}
