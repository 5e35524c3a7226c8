// src/quizgen/mod.rs
//
// The quiz-generation and scoring pipeline core: document text extraction,
// AI-backed question synthesis with deterministic fallbacks, and
// recommendation generation.

pub mod ai;
pub mod extract;
pub mod fallback;
pub mod recommend;
pub mod synthesizer;
