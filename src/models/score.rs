// src/models/score.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Elapsed time wire format, e.g. "03:45".
static TIME_TAKEN_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid time format regex"));

/// Represents the 'quiz_scores' table in the database.
/// One row per submitted attempt; never mutated afterwards.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,

    /// Percentage correct, 0-100.
    pub score: i32,

    /// Elapsed time in "MM:SS" format.
    pub time_taken: String,

    pub completed_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    pub quiz_id: i64,

    #[validate(range(min = 0, max = 100, message = "Score must be between 0 and 100."))]
    pub score: i32,

    #[validate(custom(function = validate_time_taken))]
    pub time_taken: String,
}

fn validate_time_taken(time_taken: &str) -> Result<(), validator::ValidationError> {
    if TIME_TAKEN_FORMAT.is_match(time_taken) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("time_taken_format"))
    }
}

/// A leaderboard row joined from `quiz_scores`, `users` and `quizzes`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: i64,
    pub username: String,
    pub score: i32,
    pub time_taken: String,
    pub completed_at: chrono::DateTime<chrono::Utc>,
    pub level: String,
}

/// Parses "MM:SS" into total seconds. Malformed values sort last among
/// score ties rather than failing the whole leaderboard.
fn time_taken_seconds(time_taken: &str) -> u32 {
    let mut parts = time_taken.splitn(2, ':');
    let minutes = parts.next().and_then(|m| m.parse::<u32>().ok());
    let seconds = parts.next().and_then(|s| s.parse::<u32>().ok());
    match (minutes, seconds) {
        (Some(m), Some(s)) => m * 60 + s,
        _ => u32::MAX,
    }
}

/// Orders leaderboard entries: score descending, elapsed time ascending
/// (faster wins ties). This ordering is a contract shared with clients,
/// so it lives in one place instead of in SQL.
pub fn rank_leaderboard(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(time_taken_seconds(&a.time_taken).cmp(&time_taken_seconds(&b.time_taken)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn entry(score: i32, time_taken: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            id: 0,
            username: "student".to_string(),
            score,
            time_taken: time_taken.to_string(),
            completed_at: chrono::Utc::now(),
            level: "Beginner".to_string(),
        }
    }

    fn request(score: i32, time_taken: &str) -> SubmitScoreRequest {
        SubmitScoreRequest {
            quiz_id: 1,
            score,
            time_taken: time_taken.to_string(),
        }
    }

    #[test]
    fn test_leaderboard_ordering() {
        let mut entries = vec![entry(70, "01:00"), entry(90, "02:00"), entry(90, "01:30")];
        rank_leaderboard(&mut entries);

        let order: Vec<(i32, &str)> = entries
            .iter()
            .map(|e| (e.score, e.time_taken.as_str()))
            .collect();
        assert_eq!(order, vec![(90, "01:30"), (90, "02:00"), (70, "01:00")]);
    }

    #[test]
    fn test_time_taken_seconds() {
        assert_eq!(time_taken_seconds("00:45"), 45);
        assert_eq!(time_taken_seconds("02:05"), 125);
        assert_eq!(time_taken_seconds("garbage"), u32::MAX);
    }

    #[test]
    fn test_score_range_validation() {
        assert!(request(0, "01:00").validate().is_ok());
        assert!(request(100, "01:00").validate().is_ok());
        assert!(request(101, "01:00").validate().is_err());
        assert!(request(-1, "01:00").validate().is_err());
    }

    #[test]
    fn test_time_taken_validation() {
        assert!(request(50, "00:00").validate().is_ok());
        assert!(request(50, "12:34").validate().is_ok());
        assert!(request(50, "1:00").validate().is_err());
        assert!(request(50, "01:2").validate().is_err());
        assert!(request(50, "0100").validate().is_err());
        assert!(request(50, "aa:bb").validate().is_err());
    }
}
