// src/handlers/realtime.rs

use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::Response,
};

use crate::{config::AppState, services::realtime::serve_socket};

// GET /ws
pub async fn ws_handler(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> Response {
    let auth = app_state.auth_service.clone();
    let hub = app_state.notifications.clone();
    ws.on_upgrade(move |socket| serve_socket(socket, auth, hub))
}
