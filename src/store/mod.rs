// src/store/mod.rs
//
// Thin persistence layer over Postgres. Quizzes, scores and
// recommendations are create-only: no update or delete operations exist.

pub mod materials;
pub mod quizzes;
pub mod recommendations;
pub mod reports;
pub mod scores;
pub mod users;
