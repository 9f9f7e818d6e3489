//! Rearrange Backend
//!
//! Layered architecture:
//! - domain: Stored records and core abstractions
//! - repository: Data access abstractions and the SQLite implementation
//! - api: axum handlers
//! - auth: Token resolution and role checks

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;

use auth::SessionRegistry;
use config::ServerConfig;
use domain::{CollectionKind, NewRecord};
use repository::{init_db, CollectionRepository, RecordRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<RecordRepository>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub async fn open(config: &ServerConfig) -> anyhow::Result<Self> {
        let db = init_db(&config.db_path).await?;
        Ok(Self {
            repo: Arc::new(RecordRepository::new(db.connection())),
            sessions: Arc::new(config.sessions.clone()),
        })
    }
}

pub fn app(state: AppState) -> Router {
    api::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Demo content for empty collections
async fn seed_demo(repo: &RecordRepository) -> anyhow::Result<()> {
    let samples: [(CollectionKind, Vec<NewRecord>); 5] = [
        (
            CollectionKind::SimTypes,
            vec![NewRecord::new("Nano SIM"), NewRecord::new("Micro SIM"), NewRecord::new("eSIM")],
        ),
        (
            CollectionKind::StorageTypes,
            vec![NewRecord::new("Cold Room"), NewRecord::new("Dry Shelf"), NewRecord::new("Freezer")],
        ),
        (
            CollectionKind::Units,
            vec![
                NewRecord::new("Kilogram").with_attribute("shortName", "kg"),
                NewRecord::new("Litre").with_attribute("shortName", "l"),
                NewRecord::new("Piece").with_attribute("shortName", "pc"),
            ],
        ),
        (
            CollectionKind::VendorCategories,
            vec![NewRecord::new("Grocery"), NewRecord::new("Electronics"), NewRecord::new("Pharmacy")],
        ),
        (
            CollectionKind::FooterWidgets,
            vec![
                NewRecord::new("About").with_attribute("widgetType", "text"),
                NewRecord::new("Links").with_attribute("widgetType", "menu"),
                NewRecord::new("Contact").with_attribute("widgetType", "text"),
            ],
        ),
    ];

    for (collection, records) in samples {
        if !repo.list(collection).await?.is_empty() {
            continue;
        }
        for record in &records {
            repo.create(collection, record).await?;
        }
        tracing::info!(collection = collection.as_str(), "Seeded demo records");
    }
    Ok(())
}

/// Open storage, bind, and serve until the process stops
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::open(&config).await?;
    if config.seed_demo {
        seed_demo(&state.repo).await?;
    }

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("rearrange-server listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
