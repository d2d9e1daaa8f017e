use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{calculate_profile_score, ExperienceLevel};
use crate::error::ApiError;
use crate::models::UpdateProfileRequest;
use crate::routes::AppState;
use crate::services::{AuthUser, CacheKey};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles/me", web::get().to(get_my_profile))
        .route("/profiles/me", web::put().to(update_my_profile));
}

/// Current user's profile, created empty on first access
///
/// GET /api/v1/profiles/me
async fn get_my_profile(
    state: web::Data<AppState>,
    auth: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let user = state.active_user(&auth).await?;
    let profile = state.postgres.get_or_create_profile(user.id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Partially update the current user's profile
///
/// PUT /api/v1/profiles/me
///
/// Absent fields are left unchanged. The completeness score is recomputed
/// from the updated profile.
async fn update_my_profile(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    if let Some(level) = req.experience_level.as_deref() {
        if ExperienceLevel::parse(level).is_none() {
            return Err(ApiError::BadRequest(format!(
                "experience_level must be one of: {}",
                ExperienceLevel::ALL.map(|level| level.as_str()).join(", ")
            )));
        }
    }

    let user = state.active_user(&auth).await?;
    let mut profile = state.postgres.get_or_create_profile(user.id).await?;

    req.into_inner().apply(&mut profile);
    profile.profile_score = calculate_profile_score(&profile);

    let saved = state.postgres.save_profile(&profile).await?;

    tracing::info!(
        "Updated profile for user {} (completeness {})",
        user.id,
        saved.profile_score
    );

    // Skill counts may have changed
    if let Err(e) = state.cache.delete(&CacheKey::popular_skills()).await {
        tracing::warn!("Failed to invalidate popular skills cache: {}", e);
    }

    Ok(HttpResponse::Ok().json(saved))
}
