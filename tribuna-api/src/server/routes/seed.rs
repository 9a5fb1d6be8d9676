use crate::server::{Result, ServerError, ServerRouter, extract::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tribuna_common::model::{ContentKind, Event, Media, Post};
use tribuna_db::client::StoreClient;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_post(seed_demo_content)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/seed", rejection(ServerError))]
struct SeedPath();

#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
struct SeedReport {
    inserted: SeedCounts,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize)]
struct SeedCounts {
    posts: u64,
    events: u64,
    media: u64,
}

/// Populates each collection with fixed demo content, independently skipping
/// any collection that already holds a document. The emptiness check is
/// coarse by design of the contract: any existing document disables seeding
/// for that collection, and inserts are not rolled back on partial failure.
async fn seed_demo_content(
    SeedPath(): SeedPath,
    State(store): State<Arc<StoreClient>>,
) -> Result<Json<SeedReport>> {
    let mut counts = SeedCounts::default();

    if !store.has_documents(ContentKind::Post).await? {
        for mut post in demo_posts() {
            post.stamp_published_at_if_unset();
            store.insert(ContentKind::Post, post.into_document()).await?;
            counts.posts += 1;
        }
    }

    if !store.has_documents(ContentKind::Event).await? {
        for event in demo_events() {
            store
                .insert(ContentKind::Event, event.into_document())
                .await?;
            counts.events += 1;
        }
    }

    if !store.has_documents(ContentKind::Media).await? {
        for media in demo_media() {
            store
                .insert(ContentKind::Media, media.into_document())
                .await?;
            counts.media += 1;
        }
    }

    Ok(Json(SeedReport { inserted: counts }))
}

fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Новый курс: социальная справедливость и развитие".to_owned(),
            summary: "Ключевые инициативы для поддержки семей, образования и промышленности."
                .to_owned(),
            content: "<p>Мы предлагаем комплекс мер, направленных на повышение качества жизни граждан... </p>"
                .to_owned(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1529101091764-c3526daf38fe?q=80&w=1200&auto=format&fit=crop"
                    .to_owned(),
            ),
            tags: vec!["политика".to_owned(), "экономика".to_owned()],
            author: Some("Пресс-служба".to_owned()),
            published_at: None,
            featured: true,
        },
        Post {
            title: "Итоги региональных встреч".to_owned(),
            summary: "Встречи с активистами и жителями прошли в 12 городах.".to_owned(),
            content: "<p>Обсудили важные вопросы местной повестки, инфраструктуры и здравоохранения...</p>"
                .to_owned(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1543489816-c87b0f5f7dd2?q=80&w=1200&auto=format&fit=crop"
                    .to_owned(),
            ),
            tags: vec!["регионы".to_owned()],
            author: Some("Редакция".to_owned()),
            published_at: None,
            featured: false,
        },
        Post {
            title: "Молодёжные инициативы: идеи и решения".to_owned(),
            summary: "Предложения по развитию спорта, науки и творчества.".to_owned(),
            content: "<p>Молодёжь — драйвер перемен. Мы поддерживаем инициативы в образовании и культуре...</p>"
                .to_owned(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1503428593586-e225b39bddfe?q=80&w=1200&auto=format&fit=crop"
                    .to_owned(),
            ),
            tags: vec!["молодёжь".to_owned(), "культура".to_owned()],
            author: Some("Редакция".to_owned()),
            published_at: None,
            featured: false,
        },
    ]
}

fn demo_events() -> Vec<Event> {
    vec![
        Event {
            title: "Общественная приёмка дворовых территорий".to_owned(),
            description: Some("Совместно с жителями проверим качество благоустройства.".to_owned()),
            location: "Москва".to_owned(),
            date: OffsetDateTime::now_utc(),
            image: Some(
                "https://images.unsplash.com/photo-1520975922325-24c8f6d8b15a?q=80&w=1200&auto=format&fit=crop"
                    .to_owned(),
            ),
            link: None,
        },
        Event {
            title: "Круглый стол: поддержка семей".to_owned(),
            description: Some("Эксперты и общественники обсудят меры поддержки.".to_owned()),
            location: "Санкт-Петербург".to_owned(),
            date: OffsetDateTime::now_utc(),
            image: None,
            link: None,
        },
    ]
}

fn demo_media() -> Vec<Media> {
    vec![
        Media {
            title: "Фоторепортаж: встреча с жителями".to_owned(),
            kind: "photo".to_owned(),
            url: "https://images.unsplash.com/photo-1556761175-b413da4baf72?q=80&w=1600&auto=format&fit=crop"
                .to_owned(),
            thumbnail: Some(
                "https://images.unsplash.com/photo-1556761175-b413da4baf72?q=80&w=600&auto=format&fit=crop"
                    .to_owned(),
            ),
            tags: vec!["репортаж".to_owned()],
        },
        Media {
            title: "Интервью с экспертами".to_owned(),
            kind: "video".to_owned(),
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_owned(),
            thumbnail: Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_owned()),
            tags: vec!["интервью".to_owned()],
        },
    ]
}
