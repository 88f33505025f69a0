use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use ns_api::app::create_app;
use ns_api::state::AppState;
use ns_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load();

    let filter = EnvFilter::new(config.logging.filter.clone());
    if config.logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!("starting NoSpoilers API server");

    let bind_address = config.server.bind_address();
    let app_state = web::Data::new(
        AppState::bootstrap(config).expect("composition root failed to wire up services"),
    );

    tracing::info!(%bind_address, "binding server");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
