use crate::server::{ServerError, ServerRouter, extract::Json};
use axum_extra::routing::{RouterExt, TypedPath};
use serde::{Deserialize, Serialize};

mod diagnostics;
mod events;
mod media;
mod posts;
mod seed;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(root)
        .merge(posts::routes())
        .merge(events::routes())
        .merge(media::routes())
        .merge(seed::routes())
        .merge(diagnostics::routes())
}

/// Reply to every successful create.
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/", rejection(ServerError))]
struct RootPath();

#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
}

async fn root(RootPath(): RootPath) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Backend running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
