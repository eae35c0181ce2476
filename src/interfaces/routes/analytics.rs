use actix_web::web;

use crate::handlers::analytics;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/stats")
            .route(web::get().to(analytics::get_stats))
    );

    cfg.service(
        web::resource("/analytics/profile-view")
            .route(web::post().to(analytics::record_profile_view))
    );
}
