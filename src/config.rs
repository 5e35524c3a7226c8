// src/config.rs

use std::env;

use dotenvy::dotenv;

/// Number of questions a quiz generation targets. The pipeline tolerates a
/// synthesizer returning fewer, but never zero.
pub const QUIZ_QUESTION_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub rust_log: String,

    /// Credential for the generative backend. Absent means every
    /// generation request uses the deterministic fallback paths.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_timeout_secs: u64,

    /// Directory holding uploaded study material documents.
    pub uploads_dir: String,

    /// Optional seed account for an initial teacher user.
    pub teacher_username: Option<String>,
    pub teacher_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86400);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

        let openai_timeout_secs = env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let uploads_dir = env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());

        let teacher_username = env::var("TEACHER_USERNAME").ok();
        let teacher_password = env::var("TEACHER_PASSWORD").ok();

        Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            openai_api_key,
            openai_model,
            openai_timeout_secs,
            uploads_dir,
            teacher_username,
            teacher_password,
        }
    }
}
