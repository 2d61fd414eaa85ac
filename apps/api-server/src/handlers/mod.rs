//! HTTP handlers and route configuration.

mod calendar;
mod dashboard;
mod generate;
mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post store and its projections. Literal segments register
            // before `{id}` so `/search` and `/scheduled` are not read as ids.
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("", web::get().to(posts::list_posts))
                    .route("/search", web::get().to(posts::search_posts))
                    .route("/scheduled", web::get().to(posts::list_scheduled))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::patch().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post))
                    .route("/{id}/duplicate", web::post().to(posts::duplicate_post))
                    .route("/{id}/edits", web::post().to(posts::append_edit)),
            )
            // Calendar projections
            .service(
                web::scope("/calendar")
                    .route("/{year}/{month}", web::get().to(calendar::month_view))
                    .route(
                        "/{year}/{month}/timeline",
                        web::get().to(calendar::timeline_view),
                    ),
            )
            .route("/dashboard/summary", web::get().to(dashboard::summary))
            // AI generation proxies
            .service(
                web::scope("/generate")
                    .route("/post", web::post().to(generate::generate_post))
                    .route("/post/refine", web::post().to(generate::refine_post))
                    .route("/lead-magnet", web::post().to(generate::generate_lead_magnet))
                    .route(
                        "/lead-magnet/refine",
                        web::post().to(generate::refine_lead_magnet),
                    )
                    .route("/ideas", web::post().to(generate::suggest_ideas)),
            ),
    );
}
