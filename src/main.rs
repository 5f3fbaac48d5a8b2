use anyhow::{Context, Result};
use axum::http::{header, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chirpy::routes::create_app;
use chirpy::shared::config::{Config, StorageBackend};
use chirpy::shared::database::{Database, MemoryDatabase};
use chirpy::shared::services::AppState;

// Import models for OpenAPI schema
use chirpy::domains::auth::models::*;
use chirpy::domains::chirp::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        chirpy::domains::auth::handlers::auth_handler::signup,
        chirpy::domains::auth::handlers::auth_handler::signin,
        chirpy::domains::auth::handlers::auth_handler::refresh,
        chirpy::domains::auth::handlers::auth_handler::revoke,
        chirpy::domains::auth::handlers::auth_handler::update_credentials,
        chirpy::domains::chirp::handlers::chirp_handler::create_chirp,
        chirpy::domains::chirp::handlers::chirp_handler::list_chirps,
        chirpy::domains::chirp::handlers::chirp_handler::get_chirp,
        chirpy::domains::chirp::handlers::chirp_handler::delete_chirp,
        chirpy::domains::admin::handlers::admin_handler::metrics,
        chirpy::domains::admin::handlers::admin_handler::reset,
        chirpy::domains::admin::handlers::admin_handler::healthz
    ),
    components(schemas(
        SignupRequest,
        SigninRequest,
        SigninResponse,
        RefreshResponse,
        UpdateCredentialsRequest,
        UserResponse,
        Chirp,
        CreateChirpRequest
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Registration, login and session token endpoints"),
        (name = "Chirps", description = "Chirp endpoints"),
        (name = "Admin", description = "Metrics, reset and health endpoints")
    ),
    info(
        title = "Chirpy API",
        description = "Microblogging API server",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일은 선택 사항
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chirpy=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let bind_addr = config.bind_addr.clone();

    // AppState 생성 (저장소 선택 후 모든 Service 초기화)
    let app_state = match config.storage.clone() {
        StorageBackend::Postgres { database_url } => {
            let db = Database::new(&database_url).await?;
            db.initialize().await?;
            AppState::from_database(config, &db)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, data is lost on restart");
            AppState::from_memory(config, MemoryDatabase::new())
        }
    };

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    // Router 생성
    let app = create_app(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    tracing::info!("Server running on http://{bind_addr}");
    tracing::info!("Swagger UI available at http://{bind_addr}/swagger-ui");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
