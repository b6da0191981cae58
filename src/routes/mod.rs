pub mod api_routes;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::service::chat_service::ChatService;

use self::api_routes::chat_handler;

pub fn router(chat_service: ChatService) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        // The browser client is served from its own origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(chat_service)
}
