use crate::server::{
    Result, ServerError, ServerRouter,
    extract::{Json, Query},
    normalize::normalize_document,
    routes::CreatedResponse,
};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use bson::{Document, doc};
use serde::Deserialize;
use std::sync::Arc;
use tribuna_common::model::{ContentKind, Post};
use tribuna_db::client::StoreClient;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_posts)
        .typed_post(create_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts", rejection(ServerError))]
struct PostsPath();

#[derive(Clone, PartialEq, Debug, Deserialize)]
struct ListPostsQuery {
    featured: Option<bool>,
    tag: Option<String>,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl ListPostsQuery {
    /// Only provided constraints end up in the filter. Tag filtering is
    /// exact-match membership against the stored `tags` array; an empty tag
    /// adds no constraint.
    fn filter(&self) -> Document {
        let mut filter = Document::new();
        if let Some(featured) = self.featured {
            filter.insert("featured", featured);
        }
        if let Some(tag) = self.tag.as_deref().filter(|tag| !tag.is_empty()) {
            filter.insert("tags", doc! { "$in": [tag] });
        }
        filter
    }
}

async fn list_posts(
    PostsPath(): PostsPath,
    State(store): State<Arc<StoreClient>>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<Vec<Document>>> {
    let documents = store
        .find(ContentKind::Post, query.filter(), query.limit)
        .await?;

    let documents = documents
        .into_iter()
        .map(|document| normalize_document(document, ContentKind::Post))
        .collect();

    Ok(Json(documents))
}

async fn create_post(
    PostsPath(): PostsPath,
    State(store): State<Arc<StoreClient>>,
    Json(mut post): Json<Post>,
) -> Result<Json<CreatedResponse>> {
    post.stamp_published_at_if_unset();

    let id = store.insert(ContentKind::Post, post.into_document()).await?;

    Ok(Json(CreatedResponse { id }))
}
