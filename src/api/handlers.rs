use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::api::models::{BlogRequest, BlogResponse, HealthResponse};
use crate::error::{cors_headers, BlogResult, HttpErrorResponse};
use crate::prompt::GenerationPayload;
use crate::AppState;

/// Turns a topic and tone into a generated HTML blog post.
///
/// Parse failures answer 400 before anything leaves the process; everything
/// after the model call maps to either 200 with the generated text or 500
/// with the failure message.
#[axum_macros::debug_handler]
pub async fn handle_blog_request(
    State(state): State<AppState>,
    body: Bytes,
) -> BlogResult<Response> {
    let Ok(request) = BlogRequest::from_body(&body) else {
        // Distinct path from missing fields: the parse detail is dropped and
        // the CORS set is not attached.
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(HttpErrorResponse::from("Invalid input")),
        )
            .into_response());
    };

    let payload = GenerationPayload::new(&request.topic, &request.tone);
    let blog_post = state.generator.generate(&payload).await.map_err(|err| {
        error!("Blog generation failed: {:#}", err);
        err
    })?;

    Ok((
        StatusCode::OK,
        cors_headers(),
        Json(BlogResponse { blog_post }),
    )
        .into_response())
}

#[axum_macros::debug_handler]
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model_id.clone(),
    })
}
