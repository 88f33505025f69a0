//! # NoSpoilers Core
//!
//! Domain entities, the `DomainError` taxonomy, repository interfaces, and
//! the two business services — `auth` and `content` — that form the
//! foundation of the NoSpoilers backend (spec §2).

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use domain::entities;
pub use domain::value_objects;

pub use errors::{DomainError, DomainResult};

pub use services::auth::{AuthService, AuthServiceConfig};
pub use services::content::ContentService;
