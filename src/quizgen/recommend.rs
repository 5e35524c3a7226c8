// src/quizgen/recommend.rs

use crate::quizgen::ai::{CompletionRequest, TextGenerator};

const COACH_SYSTEM_PROMPT: &str = "You are an educational coach for young children.";

/// Produces a personalized study recommendation after a scored attempt.
///
/// Starts from a score-tiered encouragement line, then asks the generative
/// backend for 2-3 specific next steps. Any backend failure (or an
/// unconfigured backend) degrades to a deterministic topic-aware tip, so
/// this function never fails.
pub async fn study_recommendation(
    ai: &dyn TextGenerator,
    student_name: &str,
    material_title: &str,
    score: i32,
    incorrect_questions: &[String],
) -> String {
    let base = baseline(student_name, material_title, score);

    if !ai.is_configured() {
        return format!(
            "{} We recommend reviewing the material again and practicing regularly.",
            base
        );
    }

    let request = CompletionRequest {
        system: COACH_SYSTEM_PROMPT.to_string(),
        user: build_prompt(student_name, material_title, score, incorrect_questions),
        json_response: false,
        max_tokens: Some(300),
        temperature: 0.7,
    };

    match ai.complete(request).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => fallback_recommendation(&base, material_title),
        Err(e) => {
            tracing::warn!("recommendation generation degraded to fallback: {}", e);
            fallback_recommendation(&base, material_title)
        }
    }
}

/// Encouragement line tiered by score, referencing the student and material.
fn baseline(student_name: &str, material_title: &str, score: i32) -> String {
    if score >= 80 {
        format!(
            "Great job, {}! You've shown excellent understanding of {}.",
            student_name, material_title
        )
    } else if score >= 60 {
        format!(
            "Good work, {}! You're making progress in understanding {}.",
            student_name, material_title
        )
    } else {
        format!(
            "Keep going, {}! With more practice, you'll improve your understanding of {}.",
            student_name, material_title
        )
    }
}

/// Deterministic tip keyed on the material title.
fn topic_tip(material_title: &str) -> &'static str {
    let lower = material_title.to_lowercase();
    if lower.contains("math") {
        "Practice counting and simple calculations daily."
    } else if lower.contains("science") || lower.contains("plant") || lower.contains("animal") {
        "Try observing plants and animals around you to understand them better."
    } else if lower.contains("language") || lower.contains("read") {
        "Read more stories and practice writing simple sentences."
    } else {
        "Review the important points in your textbook and notes."
    }
}

fn fallback_recommendation(base: &str, material_title: &str) -> String {
    format!("{} {} Keep up the good work!", base, topic_tip(material_title))
}

fn build_prompt(
    student_name: &str,
    material_title: &str,
    score: i32,
    incorrect_questions: &[String],
) -> String {
    let incorrect_list = incorrect_questions
        .iter()
        .map(|question| format!("- {}", question))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Create personalized study recommendations for a 7-year-old student named {student_name} who just completed a quiz on "{material_title}".

Quiz performance details:
- Overall score: {score}%
- Questions answered incorrectly:
{incorrect_list}

Provide 2-3 specific recommendations on what to focus on next, written in a friendly, encouraging tone.
Keep the language simple and appropriate for a 7-year-old. Be specific about the topics that need more study
based on the incorrect answers and the material title."#
    )
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::quizgen::ai::AiError;

    struct FakeGenerator {
        configured: bool,
        response: Result<String, ()>,
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, AiError> {
            match &self.response {
                Ok(content) => Ok(content.clone()),
                Err(()) => Err(AiError::Request("connection refused".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_unconfigured_backend_returns_baseline() {
        let ai = FakeGenerator {
            configured: false,
            response: Err(()),
        };
        let rec = study_recommendation(&ai, "Aisha", "Plants Around Us", 85, &[]).await;
        assert!(rec.starts_with("Great job, Aisha!"));
        assert!(rec.contains("reviewing the material again"));
    }

    #[tokio::test]
    async fn test_baseline_tiers() {
        assert!(baseline("Ben", "Counting", 80).starts_with("Great job"));
        assert!(baseline("Ben", "Counting", 79).starts_with("Good work"));
        assert!(baseline("Ben", "Counting", 60).starts_with("Good work"));
        assert!(baseline("Ben", "Counting", 59).starts_with("Keep going"));
    }

    #[tokio::test]
    async fn test_backend_failure_appends_topic_tip() {
        let ai = FakeGenerator {
            configured: true,
            response: Err(()),
        };

        let rec = study_recommendation(&ai, "Mei", "Basic Mathematics", 50, &[]).await;
        assert!(rec.contains("Practice counting and simple calculations daily."));
        assert!(rec.ends_with("Keep up the good work!"));

        let rec = study_recommendation(&ai, "Mei", "Animals of Malaysia", 50, &[]).await;
        assert!(rec.contains("observing plants and animals"));

        let rec = study_recommendation(&ai, "Mei", "Learning to Read", 50, &[]).await;
        assert!(rec.contains("Read more stories"));

        let rec = study_recommendation(&ai, "Mei", "History", 50, &[]).await;
        assert!(rec.contains("Review the important points"));
    }

    #[tokio::test]
    async fn test_backend_text_is_used_when_present() {
        let ai = FakeGenerator {
            configured: true,
            response: Ok("  Focus on plant parts next week.  ".to_string()),
        };
        let rec = study_recommendation(&ai, "Omar", "Plants", 70, &[]).await;
        assert_eq!(rec, "Focus on plant parts next week.");
    }

    #[tokio::test]
    async fn test_blank_backend_text_falls_back() {
        let ai = FakeGenerator {
            configured: true,
            response: Ok("   ".to_string()),
        };
        let rec = study_recommendation(&ai, "Omar", "Plants", 70, &[]).await;
        assert!(rec.ends_with("Keep up the good work!"));
    }

    #[test]
    fn test_prompt_lists_incorrect_questions() {
        let prompt = build_prompt(
            "Nur",
            "Plants",
            60,
            &["What do roots do?".to_string(), "Which part is green?".to_string()],
        );
        assert!(prompt.contains("- What do roots do?"));
        assert!(prompt.contains("- Which part is green?"));
        assert!(prompt.contains("60%"));
    }
}
