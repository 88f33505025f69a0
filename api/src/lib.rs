//! HTTP surface for the authentication/identity and content/progress
//! services (spec §6): Actix-web routes, request DTOs, JWT + CORS
//! middleware, and the composition root that wires `ns_infra`'s
//! implementations into both `ns_core` services.

pub mod app;
pub mod dto;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod state;
