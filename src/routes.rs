// src/routes.rs

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};

use crate::{
    common::error::AppError,
    config::AppState,
    docs, handlers,
    middleware::cors::cors_middleware,
};

// Corpos JSON de até 50 MB (metadata de mensagens pode trazer mídia)
const BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

async fn route_not_found() -> AppError {
    AppError::NotFound("Rota")
}

pub fn app_router(app_state: AppState) -> Router {
    let user_routes = Router::new().route(
        "/",
        get(handlers::users::list_users).post(handlers::users::create_user),
    );

    let lead_routes = Router::new()
        .route(
            "/",
            get(handlers::leads::list_leads).post(handlers::leads::create_lead),
        )
        .route(
            "/{id}",
            get(handlers::leads::get_lead).delete(handlers::leads::delete_lead),
        )
        .route("/{id}/status", patch(handlers::leads::update_lead_status))
        .route("/{id}/activities", get(handlers::leads::list_lead_activities))
        .route("/{id}/messages", get(handlers::leads::list_lead_messages))
        .route("/{id}/surveys", get(handlers::leads::list_lead_surveys));

    let settings_routes = Router::new()
        .route("/openai-key-status", get(handlers::settings::openai_key_status))
        .route("/gemini-key-status", get(handlers::settings::gemini_key_status))
        .route(
            "/gemini",
            get(handlers::settings::get_gemini_settings).put(handlers::settings::update_gemini_settings),
        );

    let whatsapp_routes = Router::new()
        .route("/status", get(handlers::whatsapp::whatsapp_status))
        .route("/qr", get(handlers::whatsapp::whatsapp_qr));

    let api_routes = Router::new()
        .route("/status", get(handlers::status::api_status))
        .route("/openapi.json", get(docs::openapi_json))
        .route("/auth/login", post(handlers::auth::login))
        .route("/activities", post(handlers::activities::create_activity))
        .route("/activities/{id}/complete", post(handlers::activities::complete_activity))
        .route("/messages", post(handlers::messages::create_message))
        .route("/messages/{id}/read", post(handlers::messages::mark_message_read))
        .route("/surveys", post(handlers::surveys::create_survey))
        .route("/surveys/{id}/complete", post(handlers::surveys::complete_survey))
        .route("/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/dashboard/stats/refresh", post(handlers::dashboard::refresh_stats))
        .nest("/users", user_routes)
        .nest("/leads", lead_routes)
        .nest("/settings", settings_routes)
        .nest("/direct/whatsapp", whatsapp_routes);

    Router::new()
        .route("/health", get(handlers::status::health))
        .route("/ws", get(handlers::realtime::ws_handler))
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state)
}
