use actix_web::web;

use crate::handlers::messages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(messages::create_contact_message))
    );

    cfg.service(
        web::scope("/messages")
            .service(
                web::resource("")
                    .route(web::get().to(messages::list_messages))
            )
            .service(
                web::resource("/{message_id}")
                    .route(web::delete().to(messages::delete_message))
            )
            .service(
                web::resource("/{message_id}/read")
                    .route(web::put().to(messages::mark_message_read))
            )
    );
}
