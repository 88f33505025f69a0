//! CORS configuration for cross-origin requests.
//!
//! Allows mobile applications (iOS, Android, HarmonyOS) and web clients to
//! reach the API. Environment-aware: permissive in development, restricted
//! to configured origins and known mobile schemes in production.
//!
//! # Environment Variables
//! - `NOSPOILERS_ENV`: set to `production` for production settings
//! - `ALLOWED_ORIGINS`: comma-separated list of allowed origins (production only)
//! - `WEB_DOMAIN`: web app domain to allow alongside mobile schemes (production only)
//! - `CORS_MAX_AGE`: max age for preflight cache in seconds (default 3600)

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

pub fn create_cors() -> Cors {
    let environment = env::var("NOSPOILERS_ENV").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::CACHE_CONTROL,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static("x-app-version"),
            header::HeaderName::from_static("x-platform"),
            header::HeaderName::from_static("x-device-id"),
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-rate-limit-limit"),
            header::HeaderName::from_static("x-rate-limit-remaining"),
        ])
        .max_age(max_age)
        .supports_credentials()
}

fn create_production_cors(max_age: usize) -> Cors {
    tracing::info!("configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-app-version"),
            header::HeaderName::from_static("x-platform"),
            header::HeaderName::from_static("x-device-id"),
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-rate-limit-limit"),
            header::HeaderName::from_static("x-rate-limit-remaining"),
        ])
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin, "adding allowed origin");
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors = cors.allowed_origin("capacitor://localhost");
    cors = cors.allowed_origin("ionic://localhost");
    cors = cors.allowed_origin("http://localhost");
    cors = cors.allowed_origin("https://localhost");
    cors = cors.allowed_origin("arkui://localhost");
    cors = cors.allowed_origin("harmony://localhost");

    if let Ok(web_domain) = env::var("WEB_DOMAIN") {
        cors = cors.allowed_origin(&format!("https://{web_domain}"));
        cors = cors.allowed_origin(&format!("https://www.{web_domain}"));
    }

    cors
}
