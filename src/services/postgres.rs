use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use crate::models::{Candidate, Hackathon, MatchPreferences, Profile, User};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Profile columns in the order `profile_from_row` reads them
const PROFILE_COLUMNS: &[&str] = &[
    "id",
    "user_id",
    "bio",
    "location",
    "github_url",
    "linkedin_url",
    "portfolio_url",
    "skills",
    "experience_level",
    "interests",
    "preferred_roles",
    "availability",
    "team_size_preference",
    "resume_text",
    "profile_score",
    "created_at",
    "updated_at",
];

fn profile_columns(alias: Option<&str>) -> String {
    PROFILE_COLUMNS
        .iter()
        .map(|column| match alias {
            Some(alias) => format!("{}.{}", alias, column),
            None => column.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn profile_from_row(row: &PgRow) -> Result<Profile, sqlx::Error> {
    Ok(Profile {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        bio: row.try_get("bio")?,
        location: row.try_get("location")?,
        github_url: row.try_get("github_url")?,
        linkedin_url: row.try_get("linkedin_url")?,
        portfolio_url: row.try_get("portfolio_url")?,
        skills: row.try_get("skills")?,
        experience_level: row.try_get("experience_level")?,
        interests: row.try_get("interests")?,
        preferred_roles: row.try_get("preferred_roles")?,
        availability: row.try_get("availability")?,
        team_size_preference: row.try_get("team_size_preference")?,
        resume_text: row.try_get("resume_text")?,
        profile_score: row.try_get("profile_score")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn user_from_row(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        username: row.try_get("username")?,
        full_name: row.try_get("full_name")?,
        is_active: row.try_get("is_active")?,
    })
}

fn hackathon_from_row(row: &PgRow) -> Result<Hackathon, sqlx::Error> {
    Ok(Hackathon {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        themes: row.try_get("themes")?,
        max_team_size: row.try_get("max_team_size")?,
        is_active: row.try_get("is_active")?,
    })
}

/// Candidate pool query
///
/// The location preference is matched with `strpos` rather than `LIKE` so
/// wildcard and escape characters in user input are matched literally.
fn candidate_pool_query() -> String {
    format!(
        r#"
        SELECT u.username, u.full_name, u.is_active, {}
        FROM profiles p
        JOIN users u ON u.id = p.user_id
        WHERE u.id <> $1
          AND u.is_active = TRUE
          AND p.skills IS NOT NULL
          AND cardinality(p.skills) > 0
          AND ($2::TEXT IS NULL OR p.experience_level = $2)
          AND ($3::TEXT IS NULL OR strpos(lower(p.location), lower($3)) > 0)
        "#,
        profile_columns(Some("p"))
    )
}

/// PostgreSQL client for users, profiles and hackathons
///
/// Only reads what matchmaking needs and writes profiles. Account and
/// hackathon management live in other services sharing this database.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Fetch a user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, PostgresError> {
        let query = r#"
            SELECT id, email, username, full_name, is_active
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(user_id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(user_from_row).transpose()?)
    }

    /// Fetch the profile of a user, if one has been created
    pub async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>, PostgresError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE user_id = $1",
            profile_columns(None)
        );

        let row = sqlx::query(&query).bind(user_id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(profile_from_row).transpose()?)
    }

    /// Fetch the profile of a user, creating an empty one on first access
    ///
    /// Uses INSERT ... ON CONFLICT so concurrent first requests create a
    /// single row.
    pub async fn get_or_create_profile(&self, user_id: i64) -> Result<Profile, PostgresError> {
        let insert = r#"
            INSERT INTO profiles (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO NOTHING
        "#;

        let result = sqlx::query(insert).bind(user_id).execute(&self.pool).await?;

        if result.rows_affected() > 0 {
            tracing::debug!("Created empty profile for user {}", user_id);
        }

        self.get_profile(user_id)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("Profile not found for user {}", user_id)))
    }

    /// Persist every mutable profile field and return the stored row
    pub async fn save_profile(&self, profile: &Profile) -> Result<Profile, PostgresError> {
        let query = format!(
            r#"
            UPDATE profiles SET
                bio = $2,
                location = $3,
                github_url = $4,
                linkedin_url = $5,
                portfolio_url = $6,
                skills = $7,
                experience_level = $8,
                interests = $9,
                preferred_roles = $10,
                availability = $11,
                team_size_preference = $12,
                profile_score = $13,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {}
            "#,
            profile_columns(None)
        );

        let row = sqlx::query(&query)
            .bind(profile.user_id)
            .bind(&profile.bio)
            .bind(&profile.location)
            .bind(&profile.github_url)
            .bind(&profile.linkedin_url)
            .bind(&profile.portfolio_url)
            .bind(&profile.skills)
            .bind(&profile.experience_level)
            .bind(&profile.interests)
            .bind(&profile.preferred_roles)
            .bind(&profile.availability)
            .bind(profile.team_size_preference)
            .bind(profile.profile_score)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                PostgresError::NotFound(format!("Profile not found for user {}", profile.user_id))
            })?;

        tracing::debug!("Saved profile for user {}", profile.user_id);

        Ok(profile_from_row(&row)?)
    }

    /// Fetch the candidate pool for a requester
    ///
    /// Pre-filters in SQL on activity, non-empty skills and the optional
    /// experience/location preferences. The matcher re-applies the exact
    /// pool filter afterwards.
    pub async fn fetch_candidate_pool(
        &self,
        user_id: i64,
        preferences: &MatchPreferences,
    ) -> Result<Vec<Candidate>, PostgresError> {
        let query = candidate_pool_query();

        let rows = sqlx::query(&query)
            .bind(user_id)
            .bind(preferences.experience_filter())
            .bind(preferences.location_filter())
            .fetch_all(&self.pool)
            .await?;

        let candidates = rows
            .iter()
            .map(|row| {
                let profile = profile_from_row(row)?;
                Ok(Candidate {
                    user_id: profile.user_id,
                    username: row.try_get("username")?,
                    full_name: row.try_get("full_name")?,
                    is_active: row.try_get("is_active")?,
                    profile,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        tracing::debug!("Fetched {} candidates for user {}", candidates.len(), user_id);

        Ok(candidates)
    }

    /// Skill lists of every profile that has recorded skills
    pub async fn get_all_skill_lists(&self) -> Result<Vec<Vec<String>>, PostgresError> {
        let query = r#"
            SELECT skills
            FROM profiles
            WHERE skills IS NOT NULL
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let skill_lists = rows
            .iter()
            .map(|row| row.try_get::<Vec<String>, _>("skills"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(skill_lists)
    }

    /// Fetch a hackathon by ID
    pub async fn get_hackathon(&self, hackathon_id: i64) -> Result<Option<Hackathon>, PostgresError> {
        let query = r#"
            SELECT id, title, themes, max_team_size, is_active
            FROM hackathons
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(hackathon_id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(hackathon_from_row).transpose()?)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
