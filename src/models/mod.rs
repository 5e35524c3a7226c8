// src/models/mod.rs

pub mod material;
pub mod quiz;
pub mod recommendation;
pub mod report;
pub mod score;
pub mod user;
