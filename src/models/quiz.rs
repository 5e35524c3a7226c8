// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Difficulty tier for a generated quiz.
///
/// Drives prompt wording for the generative backend, the fallback
/// question-bank tier, and the pass threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Parses the wire representation ("Beginner" etc.). Returns None for
    /// anything else so the boundary can reject it as a 400.
    pub fn parse(s: &str) -> Option<Level> {
        match s {
            "Beginner" => Some(Level::Beginner),
            "Intermediate" => Some(Level::Intermediate),
            "Advanced" => Some(Level::Advanced),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Minimum percentage score considered a pass at this level.
    pub fn pass_threshold(self) -> i32 {
        match self {
            Level::Beginner => 50,
            Level::Intermediate => 70,
            Level::Advanced => 80,
        }
    }

    /// Which tier of the hand-authored fallback banks to use.
    /// Tier 0 is Beginner vocabulary; tier 1 serves both higher levels.
    pub fn bank_tier(self) -> usize {
        match self {
            Level::Beginner => 0,
            Level::Intermediate | Level::Advanced => 1,
        }
    }

    /// Difficulty wording inserted into the generation prompt.
    pub fn difficulty_description(self) -> &'static str {
        match self {
            Level::Beginner => "simple with basic vocabulary and straightforward questions",
            Level::Intermediate => "moderate difficulty with more detailed questions",
            Level::Advanced => "challenging but still appropriate for 7-year-old students",
        }
    }
}

/// Returns whether `score` (a 0-100 percentage) passes at `level`.
pub fn is_passed(level: Level, score: i32) -> bool {
    score >= level.pass_threshold()
}

/// A single multiple-choice question inside a quiz.
///
/// Option order is presentation order and must be preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub const OPTION_COUNT: usize = 4;

    /// Shape invariant: exactly 4 options and a correct index in [0,3].
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == Self::OPTION_COUNT && self.correct_answer_index < Self::OPTION_COUNT
    }
}

/// Represents the 'quizzes' table in the database.
///
/// Rows are create-only: a new generation request always inserts a new row,
/// and reads return the most recently created one for a (material, level).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub material_id: i64,

    /// One of "Beginner", "Intermediate", "Advanced".
    pub level: String,

    /// Ordered question array, stored as JSONB.
    pub questions: Json<Vec<QuizQuestion>>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for requesting quiz generation.
#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub level: String,
}

/// Query parameters for fetching the latest quiz of a material.
#[derive(Debug, Deserialize)]
pub struct QuizLevelQuery {
    pub level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_roundtrip() {
        for s in ["Beginner", "Intermediate", "Advanced"] {
            assert_eq!(Level::parse(s).unwrap().as_str(), s);
        }
        assert!(Level::parse("beginner").is_none());
        assert!(Level::parse("Expert").is_none());
        assert!(Level::parse("").is_none());
    }

    #[test]
    fn test_pass_thresholds() {
        assert!(!is_passed(Level::Beginner, 49));
        assert!(is_passed(Level::Beginner, 50));
        assert!(!is_passed(Level::Intermediate, 69));
        assert!(is_passed(Level::Intermediate, 70));
        assert!(!is_passed(Level::Advanced, 79));
        assert!(is_passed(Level::Advanced, 80));
    }

    #[test]
    fn test_bank_tier_selection() {
        assert_eq!(Level::Beginner.bank_tier(), 0);
        assert_eq!(Level::Intermediate.bank_tier(), 1);
        assert_eq!(Level::Advanced.bank_tier(), 1);
    }

    #[test]
    fn test_question_shape_invariant() {
        let mut q = QuizQuestion {
            question: "What do plants need to grow?".to_string(),
            options: vec![
                "Sunlight and water".to_string(),
                "Ice cream".to_string(),
                "Television".to_string(),
                "Bicycles".to_string(),
            ],
            correct_answer_index: 0,
            explanation: None,
        };
        assert!(q.is_well_formed());

        q.correct_answer_index = 3;
        assert!(q.is_well_formed());
        q.correct_answer_index = 4;
        assert!(!q.is_well_formed());

        q.correct_answer_index = 0;
        q.options.pop();
        assert!(!q.is_well_formed());
    }

    #[test]
    fn test_question_wire_format_is_camel_case() {
        let json = serde_json::json!({
            "question": "Which animal has a very long neck?",
            "options": ["Elephant", "Giraffe", "Tiger", "Crocodile"],
            "correctAnswerIndex": 1,
            "explanation": "Giraffes have very long necks."
        });
        let q: QuizQuestion = serde_json::from_value(json).unwrap();
        assert_eq!(q.correct_answer_index, 1);

        let back = serde_json::to_value(&q).unwrap();
        assert!(back.get("correctAnswerIndex").is_some());
    }
}
