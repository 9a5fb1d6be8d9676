use crate::server::{ServerError, ServerRouter, ServerState, extract::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use serde::{Deserialize, Serialize};
use tribuna_db::client::StoreError;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 80;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(diagnostics)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/test", rejection(ServerError))]
struct DiagnosticsPath();

#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
struct DiagnosticsReport {
    backend: &'static str,
    database: String,
    database_url: &'static str,
    database_name: &'static str,
    collections: Vec<String>,
}

fn presence(set: bool) -> &'static str {
    if set { "set" } else { "not set" }
}

/// Always replies with HTTP success. A failure while listing collections is
/// embedded as truncated text in the `database` field instead of
/// propagating.
async fn diagnostics(
    DiagnosticsPath(): DiagnosticsPath,
    State(state): State<ServerState>,
) -> Json<DiagnosticsReport> {
    let (database, collections) = if state.store.is_configured() {
        match state.store.collection_names().await {
            Ok(names) => ("connected".to_owned(), cap_collection_names(names)),
            Err(error) => {
                let message = match &error {
                    StoreError::ListCollections(source) => source.to_string(),
                    other => other.to_string(),
                };
                (
                    format!(
                        "connected with error: {}",
                        truncate_chars(&message, MAX_ERROR_CHARS)
                    ),
                    Vec::new(),
                )
            }
        }
    } else {
        ("not available".to_owned(), Vec::new())
    };

    Json(DiagnosticsReport {
        backend: "running",
        database,
        database_url: presence(state.config_status.database_url_set),
        database_name: presence(state.config_status.database_name_set),
        collections,
    })
}

/// The report lists at most the first ten collection names.
fn cap_collection_names(mut names: Vec<String>) -> Vec<String> {
    names.truncate(MAX_COLLECTIONS);
    names
}

/// Char-boundary-safe prefix of at most `max_chars` characters.
fn truncate_chars(message: &str, max_chars: usize) -> &str {
    match message.char_indices().nth(max_chars) {
        Some((index, _)) => &message[..index],
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_are_untouched() {
        assert_eq!(truncate_chars("boom", MAX_ERROR_CHARS), "boom");
    }

    #[test]
    fn long_messages_are_cut_to_eighty_chars() {
        let message = "x".repeat(200);
        assert_eq!(truncate_chars(&message, MAX_ERROR_CHARS).len(), 80);
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let message = "ё".repeat(200);
        let truncated = truncate_chars(&message, MAX_ERROR_CHARS);
        assert_eq!(truncated.chars().count(), 80);
        assert!(message.starts_with(truncated));
    }

    #[test]
    fn at_most_ten_collection_names_are_reported() {
        let names: Vec<String> = (0..12).map(|n| format!("collection_{n}")).collect();
        let capped = cap_collection_names(names.clone());
        assert_eq!(capped.len(), 10);
        assert_eq!(capped, names[..10]);
    }

    #[test]
    fn short_collection_lists_are_reported_in_full() {
        let names = vec!["post".to_owned(), "event".to_owned(), "media".to_owned()];
        assert_eq!(cap_collection_names(names.clone()), names);
    }

    #[test]
    fn presence_renders_both_states() {
        assert_eq!(presence(true), "set");
        assert_eq!(presence(false), "not set");
    }
}
