// src/routes.rs

use axum::{
    Router, http::Method, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, leaderboard, quiz, report, score},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, quiz, scores, reports, leaderboard).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, config, generative backend, document store).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    // Everything past login requires a valid bearer token.
    let protected_routes = Router::new()
        .route(
            "/generate-quiz/{material_id}",
            post(quiz::generate_quiz).get(quiz::get_latest_quiz),
        )
        .route("/quizzes/{id}", get(quiz::get_quiz))
        .route("/quiz-scores", post(score::submit_score))
        .route("/student-report", get(report::student_report))
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ));

    // The leaderboard is readable without logging in.
    let public_routes = Router::new().route(
        "/leaderboard/material/{material_id}",
        get(leaderboard::material_leaderboard),
    );

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api", protected_routes.merge(public_routes))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
