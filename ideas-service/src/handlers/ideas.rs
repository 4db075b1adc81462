use crate::models::{IdeaRequest, IdeaResponse};
use crate::services::prompt::{build_prompt, idea_generation_params};
use crate::startup::AppState;
use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;

/// `POST /api/generate_ideas`
pub async fn generate_ideas(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<IdeaRequest>, AppError>,
) -> Result<Json<IdeaResponse>, AppError> {
    let brief = request.into_brief()?;
    let prompt = build_prompt(&brief);

    tracing::info!(
        platform_type = %brief.platform_type,
        prompt_len = prompt.len(),
        "Generating content ideas"
    );

    let response = state
        .text_provider
        .generate(&prompt, &idea_generation_params())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Idea generation failed");
            AppError::from(e)
        })?;

    tracing::info!(
        input_tokens = response.input_tokens.unwrap_or(0),
        output_tokens = response.output_tokens.unwrap_or(0),
        "Content ideas generated"
    );

    Ok(Json(IdeaResponse {
        ideas: response.text,
    }))
}
