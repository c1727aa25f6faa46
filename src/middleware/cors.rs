// src/middleware/cors.rs

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
            ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, VARY,
        },
        HeaderValue, Method, Request, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::{AppConfig, AppState};

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Em desenvolvimento libera qualquer origem; em produção só ecoa as
/// origens de CORS_ALLOWED_ORIGINS.
pub fn allowed_origin(config: &AppConfig, origin: Option<&HeaderValue>) -> Option<HeaderValue> {
    if !config.production {
        return Some(HeaderValue::from_static("*"));
    }

    let origin = origin?;
    let requested = origin.to_str().ok()?;
    config
        .allowed_origins
        .iter()
        .any(|allowed| allowed == requested)
        .then(|| origin.clone())
}

pub async fn cors_middleware(
    State(app_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let headers = request.headers();
    let allow_origin = allowed_origin(&app_state.config, headers.get(ORIGIN));
    let preflight =
        request.method() == Method::OPTIONS && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD);
    let requested_headers = headers.get(ACCESS_CONTROL_REQUEST_HEADERS).cloned();

    // Preflight não chega aos handlers
    let mut response = if preflight {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let out = response.headers_mut();
    if let Some(origin) = allow_origin {
        if origin != "*" {
            out.append(VARY, HeaderValue::from_static("Origin"));
        }
        out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }

    if preflight {
        out.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
        if let Some(requested) = requested_headers {
            out.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(production: bool) -> AppConfig {
        let env = if production { "production" } else { "development" };
        AppConfig::from_lookup(|name| match name {
            "DATABASE_URL" => Some("postgres://localhost/crm".into()),
            "SESSION_SECRET" => Some("segredo".into()),
            "APP_ENV" => Some(env.into()),
            "CORS_ALLOWED_ORIGINS" => Some("https://crm.example.com".into()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn development_allows_any_origin() {
        let origin = HeaderValue::from_static("http://localhost:5173");
        assert_eq!(allowed_origin(&config(false), Some(&origin)).unwrap(), "*");
        assert_eq!(allowed_origin(&config(false), None).unwrap(), "*");
    }

    #[test]
    fn production_only_echoes_listed_origins() {
        let listed = HeaderValue::from_static("https://crm.example.com");
        let other = HeaderValue::from_static("https://evil.example.com");

        assert_eq!(allowed_origin(&config(true), Some(&listed)), Some(listed.clone()));
        assert_eq!(allowed_origin(&config(true), Some(&other)), None);
        assert_eq!(allowed_origin(&config(true), None), None);
    }
}
