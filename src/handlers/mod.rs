//! Handler module organization for the fakedetect backend API.
//!
//! This module re-exports the detection and health handlers and provides the
//! route configuration shared by the main binary and the integration tests.

pub mod detect;
pub mod health;

use actix_web::web;

pub use self::{detect::*, health::*};

/// Registers all API endpoints.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/detect", web::post().to(detect::post_detect)),
    );
}
