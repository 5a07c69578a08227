//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::modules::health::{self, HealthState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{self, UserHandlerState};
use crate::application::UserService;

/// Shared state for every route. Handlers pick their slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub user_service: UserService,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_service: UserService::new(db.clone()),
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<AppState> for UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        UserHandlerState {
            user_service: s.user_service.clone(),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::create_user,
        users::get_user,
    ),
    components(schemas(
        users::UserCreate,
        users::ShowUser,
        health::HealthResponse,
        health::ComponentHealth,
    )),
    tags(
        (name = "Users", description = "User creation and lookup"),
        (name = "Health", description = "Service health"),
    ),
    info(title = "User Service API", version = "0.1.0")
)]
pub struct ApiDoc;

/// Build the HTTP router around an already-initialised connection pool.
pub fn create_api_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/user", post(users::create_user))
        .route("/user/{user_id}", get(users::get_user))
        .route("/health", get(health::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
