//! Plain JSON API for recipe generation
//!
//! The hydrated UI goes through the Leptos server function; this route is
//! the same operation for anything that speaks plain HTTP.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pantry_core::GenerateError;
use pantry_core::models::{ErrorResponse, GenerateRequest, GenerateResponse};

/// `POST /api/generate-recipe`
///
/// 200 `{recipes}` on success, 400 when ingredients are missing, 500 with
/// a generic message when the completion service fails.
pub async fn generate_recipe(
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let recipes = super::ai::generate_recipes(request.ingredients).await?;
    Ok(Json(GenerateResponse { recipes }))
}

/// Maps [`GenerateError`] onto HTTP responses. Upstream detail goes to
/// the log; the client only ever sees the generic Display string.
pub struct ApiError(GenerateError);

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GenerateError::MissingIngredients => StatusCode::BAD_REQUEST,
            GenerateError::Upstream(source) => {
                tracing::error!(error = %source, "Recipe generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use axum::routing::post;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/api/generate-recipe", post(generate_recipe))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate-recipe")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn empty_ingredients_is_a_400() {
        let (status, body) = post_json(app(), r#"{"ingredients": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Ingredients are required");
    }

    #[tokio::test]
    async fn whitespace_only_ingredients_is_a_400() {
        let (status, body) = post_json(app(), r#"{"ingredients": "  \n "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Ingredients are required");
    }

    #[tokio::test]
    async fn body_without_the_field_is_a_400() {
        let (status, body) = post_json(app(), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Ingredients are required");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_a_generic_500() {
        let err = ApiError(GenerateError::Upstream(anyhow::anyhow!(
            "connection refused"
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "Failed to generate recipes");
    }
}
