// tests/api_routes.rs
//
// Rotas que respondem sem banco de dados.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use common::{get, json_request, lazy_app, send};

#[tokio::test]
async fn health_and_status_always_answer_ok() {
    let (status, body) = send(lazy_app(&[]), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(lazy_app(&[]), get("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().expect("timestamp ausente");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn openai_key_status_reflects_configuration() {
    let (status, body) = send(lazy_app(&[]), get("/api/settings/openai-key-status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "hasKey": false}));

    let app = lazy_app(&[("OPENAI_API_KEY", "sk-proj-123")]);
    let (_, body) = send(app, get("/api/settings/openai-key-status")).await;
    assert_eq!(body, json!({"success": true, "hasKey": true}));
}

#[tokio::test]
async fn gemini_key_status_classifies_client_keys() {
    let (_, body) = send(lazy_app(&[]), get("/api/settings/gemini-key-status")).await;
    assert_eq!(body, json!({"hasValidKey": false, "isTemporaryKey": false}));

    let client_key = "AIzaSyA-1234567890abcdefghijklmnopqrs";
    let app = lazy_app(&[("GEMINI_API_KEY", client_key)]);
    let (_, body) = send(app, get("/api/settings/gemini-key-status")).await;
    assert_eq!(body, json!({"hasValidKey": true, "isTemporaryKey": true}));

    let server_key = "x".repeat(64);
    let app = lazy_app(&[("GEMINI_API_KEY", server_key.as_str())]);
    let (_, body) = send(app, get("/api/settings/gemini-key-status")).await;
    assert_eq!(body, json!({"hasValidKey": true, "isTemporaryKey": false}));
}

#[tokio::test]
async fn whatsapp_stub_reports_ready_and_serves_a_png_qr() {
    let (status, body) = send(lazy_app(&[]), get("/api/direct/whatsapp/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"initialized": true, "ready": true, "authenticated": true}));

    let (status, body) = send(lazy_app(&[]), get("/api/direct/whatsapp/qr")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["qrCode"].as_str().unwrap().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn unknown_routes_use_the_error_envelope() {
    for uri in ["/nao-existe", "/api/nao-existe"] {
        let (status, body) = send(lazy_app(&[]), get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["status"], 404);
        assert!(body["error"]["message"].is_string());
    }
}

#[tokio::test]
async fn malformed_bodies_and_ids_use_the_error_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/leads")
        .header("content-type", "application/json")
        .body(Body::from("{ não é json"))
        .unwrap();
    let (status, body) = send(lazy_app(&[]), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], 400);

    let (status, body) = send(lazy_app(&[]), get("/api/leads/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], 400);
}

#[tokio::test]
async fn invalid_payloads_are_rejected_before_the_database() {
    let (status, body) = send(
        lazy_app(&[]),
        json_request("POST", "/api/leads", &json!({"name": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["details"]["name"].is_array());

    let (status, body) = send(
        lazy_app(&[]),
        json_request(
            "POST",
            "/api/users",
            &json!({"username": "ana", "password": "123", "fullName": "Ana", "email": "ana@example.com"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["details"]["password"].is_array());

    let (status, body) = send(
        lazy_app(&[]),
        json_request(
            "PUT",
            "/api/settings/gemini",
            &json!({"model": "gemini-pro", "professionLevel": "professional", "temperature": 70, "maxTokens": 9000}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["details"]["maxTokens"].is_array());

    let (status, _) = send(
        lazy_app(&[]),
        json_request(
            "POST",
            "/api/activities",
            &json!({"leadId": 1, "userId": 1, "type": "llamada", "completedAt": "2024-05-01T10:00:00Z"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for empty in [json!({}), json!([])] {
        let (status, body) = send(
            lazy_app(&[]),
            json_request(
                "POST",
                "/api/surveys",
                &json!({
                    "leadId": 1,
                    "title": "NPS",
                    "content": "¿Nos recomendaría?",
                    "responses": empty,
                    "completedAt": "2024-05-01T10:00:00Z"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["details"]["responses"].is_array());

        let (status, _) = send(
            lazy_app(&[]),
            json_request("POST", "/api/surveys/1/complete", &json!({"responses": empty})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn openapi_document_lists_the_crm_routes() {
    let (status, body) = send(lazy_app(&[]), get("/api/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().expect("paths ausente");
    for path in ["/api/leads", "/api/leads/{id}", "/api/settings/gemini-key-status", "/health"] {
        assert!(paths.contains_key(path), "{path} ausente do OpenAPI");
    }
}

#[tokio::test]
async fn cors_depends_on_the_environment() {
    let request = |origin: &str| {
        Request::builder()
            .uri("/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap()
    };

    let dev = lazy_app(&[]).oneshot(request("http://localhost:5173")).await.unwrap();
    assert_eq!(dev.headers()["access-control-allow-origin"], "*");

    let prod = || lazy_app(&[("APP_ENV", "production"), ("CORS_ALLOWED_ORIGINS", "https://crm.example.com")]);

    let allowed = prod().oneshot(request("https://crm.example.com")).await.unwrap();
    assert_eq!(allowed.headers()["access-control-allow-origin"], "https://crm.example.com");

    let denied = prod().oneshot(request("https://evil.example.com")).await.unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn preflight_is_answered_by_the_middleware() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/leads")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = lazy_app(&[]).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["access-control-allow-headers"], "content-type");
    assert!(response.headers().contains_key("access-control-allow-methods"));
}
