//! HTTP handlers.

pub mod auth_handler;
pub mod environment_handler;
pub mod health_handler;
pub mod status_handler;

pub use auth_handler::auth_routes;
pub use environment_handler::environment_routes;
pub use health_handler::health_routes;
pub use status_handler::status_routes;
