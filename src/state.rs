use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::config::Config;
use crate::quizgen::ai::TextGenerator;
use crate::quizgen::extract::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,

    /// Generative backend capability; a no-credential client makes every
    /// generation take the deterministic fallback paths.
    pub ai: Arc<dyn TextGenerator>,

    /// Storage holding uploaded study material documents.
    pub documents: Arc<dyn DocumentStore>,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
