//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Read view
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{id}", web::get().to(posts::get_post))
            // Session routes
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me)),
            ),
    );
}
