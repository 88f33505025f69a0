//! Shared utilities and common types for the NoSpoilers server
//!
//! This crate provides common functionality used across `core`, `infra`, and
//! `api`:
//! - Configuration types (transport policy, TTL policy, server/logging config)
//! - The HTTP error envelope shared by every route
//! - Validation/normalization utilities (phone, email, username, display name)
//! - The `Clock`/`IdProvider` contracts for the injected time/ID provider

pub mod config;
pub mod errors;
pub mod time;
pub mod types;
pub mod utils;

pub use config::{AppConfig, AuthTransportConfig, LoggingConfig, PolicyConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use time::{Clock, IdProvider};
pub use types::{Platform, ThemePreference};
pub use utils::{display_name, email, phone, username};
