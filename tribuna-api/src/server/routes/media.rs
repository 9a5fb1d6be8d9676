use crate::server::{
    Result, ServerError, ServerRouter,
    extract::{Json, Query},
    normalize::normalize_document,
    routes::CreatedResponse,
};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use bson::Document;
use serde::Deserialize;
use std::sync::Arc;
use tribuna_common::model::{ContentKind, Media};
use tribuna_db::client::StoreClient;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_media)
        .typed_post(create_media)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/media", rejection(ServerError))]
struct MediaPath();

#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
struct ListMediaQuery {
    #[serde(default = "default_limit")]
    limit: i64,
}

// The gallery grid shows 12 items per page.
fn default_limit() -> i64 {
    12
}

async fn list_media(
    MediaPath(): MediaPath,
    State(store): State<Arc<StoreClient>>,
    Query(query): Query<ListMediaQuery>,
) -> Result<Json<Vec<Document>>> {
    let documents = store
        .find(ContentKind::Media, Document::new(), query.limit)
        .await?;

    let documents = documents
        .into_iter()
        .map(|document| normalize_document(document, ContentKind::Media))
        .collect();

    Ok(Json(documents))
}

async fn create_media(
    MediaPath(): MediaPath,
    State(store): State<Arc<StoreClient>>,
    Json(media): Json<Media>,
) -> Result<Json<CreatedResponse>> {
    let id = store
        .insert(ContentKind::Media, media.into_document())
        .await?;

    Ok(Json(CreatedResponse { id }))
}
