use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{popular_skills, RECOMMENDED_SKILLS_LIMIT};
use crate::error::ApiError;
use crate::models::{
    FindMatchesRequest, Hackathon, LimitQuery, MatchPreferences, MatchResponse, Profile,
    SkillFrequency, SkillRecommendationsResponse,
};
use crate::routes::{resolve_limit, AppState};
use crate::services::{AuthUser, CacheError, CacheKey};

/// Configure all matchmaking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/matchmaking", web::post().to(find_matches))
        .route("/matchmaking/quick", web::get().to(quick_match))
        .route("/matchmaking/recommendations/{hackathon_id}", web::get().to(hackathon_recommendations))
        .route("/matchmaking/skills", web::get().to(skill_recommendations));
}

/// Find teammates with explicit preferences
///
/// POST /api/v1/matchmaking
///
/// Request body:
/// ```json
/// {
///   "preferred_skills": ["React", "Figma"],
///   "experience_level": "intermediate",
///   "location_preference": "Berlin",
///   "team_size": 4,
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let limit = resolve_limit(req.limit, state.limits.default_limit, state.limits.max_limit)?;

    let user = state.active_user(&auth).await?;
    let profile = state.require_profile(user.id).await?;

    run_matching(&state, &profile, req.preferences(), limit).await
}

/// Quick match from the requester's own profile
///
/// GET /api/v1/matchmaking/quick?limit=5
async fn quick_match(
    state: web::Data<AppState>,
    auth: AuthUser,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    let limit = resolve_limit(
        query.limit,
        state.limits.quick_default_limit,
        state.limits.quick_max_limit,
    )?;

    let user = state.active_user(&auth).await?;
    let profile = state.require_profile(user.id).await?;

    let preferences =
        MatchPreferences::from_profile(&profile, state.limits.preferred_skills_from_profile);

    run_matching(&state, &profile, preferences, limit).await
}

/// Teammate recommendations for a hackathon
///
/// GET /api/v1/matchmaking/recommendations/{hackathon_id}?limit=10
async fn hackathon_recommendations(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    let hackathon_id = path.into_inner();
    let limit = resolve_limit(
        query.limit,
        state.limits.hackathon_default_limit,
        state.limits.hackathon_max_limit,
    )?;

    let user = state.active_user(&auth).await?;
    let hackathon = load_hackathon(&state, hackathon_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hackathon not found".to_string()))?;
    let profile = state.require_profile(user.id).await?;

    let preferences = MatchPreferences::for_hackathon(&profile, &hackathon);

    run_matching(&state, &profile, preferences, limit).await
}

/// Most common skills on the platform
///
/// GET /api/v1/matchmaking/skills
async fn skill_recommendations(
    state: web::Data<AppState>,
    auth: AuthUser,
) -> Result<HttpResponse, ApiError> {
    state.active_user(&auth).await?;

    let key = CacheKey::popular_skills();
    match state.cache.get::<Vec<SkillFrequency>>(&key).await {
        Ok(cached) => {
            return Ok(HttpResponse::Ok().json(SkillRecommendationsResponse::from(cached)));
        }
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Failed to read popular skills from cache: {}", e),
    }

    let skill_lists = state.postgres.get_all_skill_lists().await?;
    let frequencies = popular_skills(
        skill_lists.iter().map(Vec::as_slice),
        RECOMMENDED_SKILLS_LIMIT,
    );

    tracing::debug!(
        "Computed {} popular skills from {} profiles",
        frequencies.len(),
        skill_lists.len()
    );

    if let Err(e) = state.cache.set(&key, &frequencies).await {
        tracing::warn!("Failed to cache popular skills: {}", e);
    }

    Ok(HttpResponse::Ok().json(SkillRecommendationsResponse::from(frequencies)))
}

/// Fetch the candidate pool and rank it for the requester
async fn run_matching(
    state: &AppState,
    profile: &Profile,
    preferences: MatchPreferences,
    limit: usize,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Finding matches for user: {}, limit: {}", profile.user_id, limit);

    let candidates = state
        .postgres
        .fetch_candidate_pool(profile.user_id, &preferences)
        .await?;

    let result = state
        .matcher
        .find_matches(profile, &preferences, candidates, limit)?;

    tracing::info!(
        "Returning {} matches for user {} ({} eligible of {} candidates)",
        result.matches.len(),
        profile.user_id,
        result.eligible_candidates,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(MatchResponse {
        total_matches: result.matches.len(),
        matches: result.matches,
        preferences_used: preferences,
    }))
}

/// Hackathon lookup through the cache
async fn load_hackathon(state: &AppState, hackathon_id: i64) -> Result<Option<Hackathon>, ApiError> {
    let key = CacheKey::hackathon(hackathon_id);
    match state.cache.get::<Hackathon>(&key).await {
        Ok(hackathon) => return Ok(Some(hackathon)),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Failed to read hackathon {} from cache: {}", hackathon_id, e),
    }

    let hackathon = state.postgres.get_hackathon(hackathon_id).await?;

    if let Some(hackathon) = &hackathon {
        if let Err(e) = state.cache.set(&key, hackathon).await {
            tracing::warn!("Failed to cache hackathon {}: {}", hackathon_id, e);
        }
    }

    Ok(hackathon)
}
