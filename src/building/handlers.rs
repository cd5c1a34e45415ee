use super::service::BuildingService;
use super::types::{
    ENDPOINT_BUILDING_DATA, ENDPOINT_ROOT, HelloResponse, SERVER_ERROR_MESSAGE,
};

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router, middleware, routing::get};
use std::sync::Arc;

pub async fn handle_hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        hello: "Hello".to_string(),
    })
}

pub async fn handle_building_data(
    Extension(service): Extension<Arc<BuildingService>>,
) -> Response {
    match service.load().await {
        Ok(payload) => {
            tracing::info!(
                "Serving {} apartment(s), gallery link {}",
                payload.apartments.len(),
                if payload.photo_gallery.is_empty() { "absent" } else { "present" }
            );
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to load building data: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

/// Builds the HTTP router. With `cors_origin` set, every response allows GET
/// requests from that browser origin.
pub fn router(service: Arc<BuildingService>, cors_origin: Option<HeaderValue>) -> Router {
    let app = Router::new()
        .route(ENDPOINT_ROOT, get(handle_hello))
        .route(ENDPOINT_BUILDING_DATA, get(handle_building_data))
        .layer(Extension(service));

    match cors_origin {
        Some(origin) => app.layer(middleware::map_response(move |mut response: Response| {
            let origin = origin.clone();
            async move {
                let headers = response.headers_mut();
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET"),
                );
                response
            }
        })),
        None => app,
    }
}
