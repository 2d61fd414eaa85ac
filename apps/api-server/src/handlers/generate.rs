//! Content generation handlers. Prompts are validated here, then handed to
//! the configured generator; nothing is persisted until the client saves.

use actix_web::{HttpResponse, web};

use cadence_core::domain::{LeadMagnetPrompt, PostPrompt, derive_title};
use cadence_core::error::ValidationError;
use cadence_shared::dto::{
    GeneratedPostResponse, RefineLeadMagnetRequest, RefinePostRequest, SuggestTopicsRequest,
    TopicIdeasResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn generated(content: String) -> HttpResponse {
    let suggested_title = derive_title(&content);
    HttpResponse::Ok().json(GeneratedPostResponse {
        content,
        suggested_title,
    })
}

/// POST /api/generate/post
pub async fn generate_post(
    state: web::Data<AppState>,
    body: web::Json<PostPrompt>,
) -> AppResult<HttpResponse> {
    let prompt = body.into_inner().normalized()?;
    let content = state.generator.generate_post(&prompt).await?;
    Ok(generated(content))
}

/// POST /api/generate/post/refine
pub async fn refine_post(
    state: web::Data<AppState>,
    body: web::Json<RefinePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let prompt = req.prompt.normalized()?;
    let content = state
        .generator
        .regenerate_post(&prompt, &req.generated_content, &req.change_request)
        .await?;
    Ok(generated(content))
}

/// POST /api/generate/lead-magnet
pub async fn generate_lead_magnet(
    state: web::Data<AppState>,
    body: web::Json<LeadMagnetPrompt>,
) -> AppResult<HttpResponse> {
    let prompt = body.into_inner().normalized()?;
    let content = state.generator.generate_lead_magnet(&prompt).await?;
    Ok(generated(content))
}

/// POST /api/generate/lead-magnet/refine
pub async fn refine_lead_magnet(
    state: web::Data<AppState>,
    body: web::Json<RefineLeadMagnetRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let prompt = req.prompt.normalized()?;
    let content = state
        .generator
        .refine_lead_magnet(&prompt, &req.original_post, &req.change_request)
        .await?;
    Ok(generated(content))
}

/// POST /api/generate/ideas
pub async fn suggest_ideas(
    state: web::Data<AppState>,
    body: web::Json<SuggestTopicsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let category = req.category.trim();
    let description = req.description.trim();
    if category.is_empty() {
        return Err(ValidationError::MissingField("category").into());
    }
    if description.is_empty() {
        return Err(ValidationError::MissingField("description").into());
    }

    let ideas = state.generator.suggest_topics(category, description).await?;
    Ok(HttpResponse::Ok().json(TopicIdeasResponse { ideas }))
}
