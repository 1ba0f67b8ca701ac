pub mod named_items;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use models::{activity_type, application_type, team};
use sea_orm::DatabaseConnection;
use service::named_item::{NamedItemService, NamedItemStore, SeaOrmNamedItemStore};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Services for every concrete named-item type, one table each.
pub struct NamedItemServices<A: NamedItemStore, P: NamedItemStore, T: NamedItemStore> {
    pub activity_types: Arc<NamedItemService<A>>,
    pub application_types: Arc<NamedItemService<P>>,
    pub teams: Arc<NamedItemService<T>>,
}

pub type SeaOrmServices = NamedItemServices<
    SeaOrmNamedItemStore<activity_type::Entity>,
    SeaOrmNamedItemStore<application_type::Entity>,
    SeaOrmNamedItemStore<team::Entity>,
>;

impl SeaOrmServices {
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            activity_types: Arc::new(NamedItemService::new(Arc::new(SeaOrmNamedItemStore::new(db.clone())))),
            application_types: Arc::new(NamedItemService::new(Arc::new(SeaOrmNamedItemStore::new(db.clone())))),
            teams: Arc::new(NamedItemService::new(Arc::new(SeaOrmNamedItemStore::new(db)))),
        }
    }
}

/// Mount each type's CRUD routes under its own prefix.
pub fn named_item_api<A, P, T>(services: NamedItemServices<A, P, T>) -> Router
where
    A: NamedItemStore + 'static,
    P: NamedItemStore + 'static,
    T: NamedItemStore + 'static,
{
    Router::new()
        .nest("/activity-types", named_items::router(services.activity_types))
        .nest("/application-types", named_items::router(services.application_types))
        .nest("/teams", named_items::router(services.teams))
}

/// Build the full application router: health, the resource API, CORS and access logs.
pub fn build_router(api: Router, cors: CorsLayer) -> Router {
    let trace = TraceLayer::new_for_http()
        // one INFO span per request with method and path
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        // status and latency
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(ServiceBuilder::new().layer(trace).layer(cors))
}
