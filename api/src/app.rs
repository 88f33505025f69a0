//! Application factory: CORS, tracing, routes, and the `/api/v1` scope.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::middleware::cors::create_cors;
use crate::routes::{auth, content};
use crate::state::AppState;

pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .configure(auth::configure)
                .configure(content::configure)
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "nospoilers-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "NoSpoilers API v1",
        "endpoints": {
            "health": "/health",
            "auth": "/api/v1/auth/*",
            "content": "/api/v1/content/*"
        }
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "the requested resource was not found"
    }))
}
