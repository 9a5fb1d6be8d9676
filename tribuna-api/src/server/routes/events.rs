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
use tribuna_common::model::{ContentKind, Event};
use tribuna_db::client::StoreClient;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_events)
        .typed_post(create_event)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/events", rejection(ServerError))]
struct EventsPath();

#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
struct ListEventsQuery {
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    10
}

async fn list_events(
    EventsPath(): EventsPath,
    State(store): State<Arc<StoreClient>>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<Vec<Document>>> {
    let documents = store
        .find(ContentKind::Event, Document::new(), query.limit)
        .await?;

    let documents = documents
        .into_iter()
        .map(|document| normalize_document(document, ContentKind::Event))
        .collect();

    Ok(Json(documents))
}

async fn create_event(
    EventsPath(): EventsPath,
    State(store): State<Arc<StoreClient>>,
    Json(event): Json<Event>,
) -> Result<Json<CreatedResponse>> {
    let id = store
        .insert(ContentKind::Event, event.into_document())
        .await?;

    Ok(Json(CreatedResponse { id }))
}
