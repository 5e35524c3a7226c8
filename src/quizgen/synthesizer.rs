// src/quizgen/synthesizer.rs

use serde_json::Value;

use crate::config::QUIZ_QUESTION_COUNT;
use crate::models::quiz::{Level, QuizQuestion};
use crate::quizgen::ai::{AiError, CompletionRequest, TextGenerator};
use crate::quizgen::fallback::fallback_questions;

const SYNTHESIZER_SYSTEM_PROMPT: &str =
    "You are an educational quiz generator for young children. Only use information from the provided study material to create questions.";

/// Produces the multiple-choice questions for a quiz.
///
/// Tries the generative backend first; any failure there (unconfigured,
/// unreachable, timed out, unparseable or ill-shaped output) falls back to
/// the deterministic topic-keyed question banks. Infallible: callers always
/// receive a non-empty, well-shaped question list.
pub async fn synthesize(ai: &dyn TextGenerator, text: &str, level: Level) -> Vec<QuizQuestion> {
    if !ai.is_configured() {
        tracing::warn!(
            level = level.as_str(),
            "no generative backend configured, using fallback question bank"
        );
        return fallback_questions(text, level);
    }

    match generate_with_backend(ai, text, level).await {
        Ok(questions) => questions,
        Err(e) => {
            tracing::warn!(
                level = level.as_str(),
                "quiz synthesis degraded to fallback: {}",
                e
            );
            fallback_questions(text, level)
        }
    }
}

async fn generate_with_backend(
    ai: &dyn TextGenerator,
    text: &str,
    level: Level,
) -> Result<Vec<QuizQuestion>, AiError> {
    let content = ai
        .complete(CompletionRequest {
            system: SYNTHESIZER_SYSTEM_PROMPT.to_string(),
            user: build_prompt(text, level),
            json_response: true,
            max_tokens: None,
            // Higher temperature so repeated generations for the same
            // material produce different questions.
            temperature: 0.8,
        })
        .await?;

    let parsed: Value = serde_json::from_str(&content)
        .map_err(|e| AiError::MalformedResponse(format!("completion is not JSON: {}", e)))?;

    let questions = normalize_questions(parsed)?;

    if questions.is_empty() {
        return Err(AiError::MalformedResponse(
            "backend returned zero questions".to_string(),
        ));
    }
    if !questions.iter().all(QuizQuestion::is_well_formed) {
        return Err(AiError::MalformedResponse(
            "a question violates the 4-options/valid-index shape".to_string(),
        ));
    }

    Ok(questions)
}

/// Normalizes the two shapes the backend is allowed to answer with
/// (a bare question array, or an object wrapping a `questions` array)
/// into one internal representation. Anything else is a degraded upstream.
fn normalize_questions(value: Value) -> Result<Vec<QuizQuestion>, AiError> {
    let list = if value.is_array() {
        value
    } else if let Some(questions) = value.get("questions").filter(|q| q.is_array()) {
        questions.clone()
    } else {
        return Err(AiError::MalformedResponse(
            "expected an array of questions or a {questions: [...]} object".to_string(),
        ));
    };

    serde_json::from_value(list).map_err(|e| AiError::MalformedResponse(e.to_string()))
}

fn build_prompt(text: &str, level: Level) -> String {
    format!(
        r#"Generate a multiple-choice quiz with {count} questions based on the following study material.

The quiz should be:
- Child-friendly and appropriate for 7-year-old students
- At {level} level ({difficulty})
- Clear and easy to understand
- Have 4 options for each question with only one correct answer
- ONLY use information from the provided study material

Format your response as a JSON object with the following structure:
[
  {{
    "question": "Question text here?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correctAnswerIndex": 0,
    "explanation": "Short explanation of the correct answer"
  }}
]

Study material:
{text}"#,
        count = QUIZ_QUESTION_COUNT,
        level = level.as_str(),
        difficulty = level.difficulty_description(),
        text = text,
    )
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    /// Scripted fake backend.
    struct FakeGenerator {
        configured: bool,
        response: Result<String, ()>,
    }

    impl FakeGenerator {
        fn unconfigured() -> Self {
            Self {
                configured: false,
                response: Err(()),
            }
        }

        fn failing() -> Self {
            Self {
                configured: true,
                response: Err(()),
            }
        }

        fn returning(content: &str) -> Self {
            Self {
                configured: true,
                response: Ok(content.to_string()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, AiError> {
            match &self.response {
                Ok(content) => Ok(content.clone()),
                Err(()) => Err(AiError::Status(503, "unavailable".to_string())),
            }
        }
    }

    fn valid_questions_json() -> String {
        serde_json::json!([
            {
                "question": "What gas do plants take in?",
                "options": ["Oxygen", "Carbon dioxide", "Nitrogen", "Hydrogen"],
                "correctAnswerIndex": 1,
                "explanation": "Plants take in carbon dioxide."
            },
            {
                "question": "Where do roots grow?",
                "options": ["In the soil", "In the sky", "On leaves", "In water only"],
                "correctAnswerIndex": 0
            }
        ])
        .to_string()
    }

    #[tokio::test]
    async fn test_unconfigured_backend_uses_fallback() {
        let ai = FakeGenerator::unconfigured();
        for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
            for text in ["plants", "animals", "math drills", "language", "anything"] {
                let questions = synthesize(&ai, text, level).await;
                assert_eq!(questions.len(), 5);
                assert!(questions.iter().all(QuizQuestion::is_well_formed));
            }
        }
    }

    #[tokio::test]
    async fn test_backend_failure_uses_fallback() {
        let ai = FakeGenerator::failing();
        let questions = synthesize(&ai, "a story about animals", Level::Beginner).await;
        assert_eq!(questions[0].question, "Which animal has a very long neck?");
    }

    #[tokio::test]
    async fn test_bare_array_response_is_accepted() {
        let ai = FakeGenerator::returning(&valid_questions_json());
        let questions = synthesize(&ai, "plants", Level::Beginner).await;
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer_index, 1);
    }

    #[tokio::test]
    async fn test_wrapped_questions_response_is_accepted() {
        let wrapped = format!("{{\"questions\": {}}}", valid_questions_json());
        let ai = FakeGenerator::returning(&wrapped);
        let questions = synthesize(&ai, "plants", Level::Beginner).await;
        assert_eq!(questions.len(), 2);
    }

    #[tokio::test]
    async fn test_non_json_response_uses_fallback() {
        let ai = FakeGenerator::returning("Here are your questions: 1) ...");
        let questions = synthesize(&ai, "plants", Level::Beginner).await;
        assert_eq!(questions[0].question, "What do plants need to grow?");
    }

    #[tokio::test]
    async fn test_unexpected_object_shape_uses_fallback() {
        let ai = FakeGenerator::returning(r#"{"quiz": {"items": []}}"#);
        let questions = synthesize(&ai, "plants", Level::Beginner).await;
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].question, "What do plants need to grow?");
    }

    #[tokio::test]
    async fn test_ill_shaped_questions_are_discarded() {
        // 5 options on the first question
        let bad = serde_json::json!([
            {
                "question": "Too many options?",
                "options": ["A", "B", "C", "D", "E"],
                "correctAnswerIndex": 0
            }
        ])
        .to_string();
        let ai = FakeGenerator::returning(&bad);
        let questions = synthesize(&ai, "plants", Level::Beginner).await;
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(QuizQuestion::is_well_formed));
    }

    #[tokio::test]
    async fn test_out_of_range_index_is_discarded() {
        let bad = serde_json::json!([
            {
                "question": "Index out of range?",
                "options": ["A", "B", "C", "D"],
                "correctAnswerIndex": 4
            }
        ])
        .to_string();
        let ai = FakeGenerator::returning(&bad);
        let questions = synthesize(&ai, "some animal text", Level::Advanced).await;
        assert!(questions.iter().all(QuizQuestion::is_well_formed));
        assert_eq!(questions[0].question, "Which group of animals have scales?");
    }

    #[tokio::test]
    async fn test_empty_array_uses_fallback() {
        let ai = FakeGenerator::returning("[]");
        let questions = synthesize(&ai, "plants", Level::Beginner).await;
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn test_prompt_mentions_level_and_material() {
        let prompt = build_prompt("Plants need sunlight.", Level::Intermediate);
        assert!(prompt.contains("Intermediate"));
        assert!(prompt.contains("moderate difficulty"));
        assert!(prompt.contains("Plants need sunlight."));
        assert!(prompt.contains("correctAnswerIndex"));
    }
}
