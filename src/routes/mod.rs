// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use crate::shared::services::AppState;
use crate::shared::middleware::count_fileserver_hits;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::chirp::routes::create_chirp_router;
use crate::domains::admin::routes::create_admin_router;
use crate::domains::admin::handlers::admin_handler::healthz;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
///
/// `/app` 정적 파일 서버는 hit 카운터 미들웨어를 거친다
pub fn create_router(app_state: &AppState) -> Router<AppState> {
    let fileserver = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(app_state.clone(), count_fileserver_hits))
        .service(ServeDir::new(&app_state.config.filepath_root));

    let api = create_auth_router()
        .route("/healthz", get(healthz))
        .nest("/chirps", create_chirp_router());

    Router::new()
        .nest("/api", api)
        .nest("/admin", create_admin_router())
        .nest_service("/app", fileserver)
}

/// 상태와 요청 로깅 레이어까지 적용된 애플리케이션
/// Application router with state and request tracing applied
pub fn create_app(app_state: AppState) -> Router {
    create_router(&app_state)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
