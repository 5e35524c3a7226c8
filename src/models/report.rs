// src/models/report.rs

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

use crate::models::recommendation::StudyRecommendation;

/// One score row enriched with the full content hierarchy
/// (quiz -> material -> subchapter -> chapter -> subject).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportScoreRow {
    pub id: i64,
    pub score: i32,
    pub time_taken: String,
    pub completed_at: chrono::DateTime<chrono::Utc>,
    pub quiz_id: i64,
    pub level: String,
    pub material_id: i64,
    pub material_title: String,
    pub subchapter_id: i64,
    pub subchapter_name: String,
    pub chapter_id: i64,
    pub chapter_name: String,
    pub subject_id: i64,
    pub subject_name: String,
}

/// Per-subject aggregate inside a student report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPerformance {
    pub total_quizzes: usize,
    pub total_score: i64,
    pub average_score: f64,
}

/// Aggregated progress report for one student.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    pub total_quizzes: usize,
    pub average_score: f64,
    pub quiz_scores: Vec<ReportScoreRow>,
    pub recommendations: Vec<StudyRecommendation>,
    pub subject_performance: BTreeMap<String, SubjectPerformance>,
}

/// Folds fetched score rows into the report shape.
///
/// The average is the arithmetic mean over all attempts (0 when there are
/// none); the per-subject breakdown groups by subject name.
pub fn build_report(
    quiz_scores: Vec<ReportScoreRow>,
    recommendations: Vec<StudyRecommendation>,
) -> StudentReport {
    let total_quizzes = quiz_scores.len();
    let average_score = if total_quizzes > 0 {
        quiz_scores.iter().map(|s| s.score as f64).sum::<f64>() / total_quizzes as f64
    } else {
        0.0
    };

    let mut subject_performance: BTreeMap<String, SubjectPerformance> = BTreeMap::new();
    for row in &quiz_scores {
        let entry = subject_performance
            .entry(row.subject_name.clone())
            .or_insert(SubjectPerformance {
                total_quizzes: 0,
                total_score: 0,
                average_score: 0.0,
            });
        entry.total_quizzes += 1;
        entry.total_score += row.score as i64;
        entry.average_score = entry.total_score as f64 / entry.total_quizzes as f64;
    }

    StudentReport {
        total_quizzes,
        average_score,
        quiz_scores,
        recommendations,
        subject_performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(score: i32, subject_name: &str) -> ReportScoreRow {
        ReportScoreRow {
            id: 0,
            score,
            time_taken: "01:00".to_string(),
            completed_at: chrono::Utc::now(),
            quiz_id: 1,
            level: "Beginner".to_string(),
            material_id: 1,
            material_title: "Material".to_string(),
            subchapter_id: 1,
            subchapter_name: "Subchapter".to_string(),
            chapter_id: 1,
            chapter_name: "Chapter".to_string(),
            subject_id: 1,
            subject_name: subject_name.to_string(),
        }
    }

    #[test]
    fn test_report_aggregation() {
        let rows = vec![row(80, "Science"), row(60, "Science"), row(100, "Mathematics")];
        let report = build_report(rows, vec![]);

        assert_eq!(report.total_quizzes, 3);
        assert_eq!(report.average_score, 80.0);
        assert_eq!(report.subject_performance["Science"].total_quizzes, 2);
        assert_eq!(report.subject_performance["Science"].average_score, 70.0);
        assert_eq!(report.subject_performance["Mathematics"].average_score, 100.0);
    }

    #[test]
    fn test_report_with_no_scores() {
        let report = build_report(vec![], vec![]);
        assert_eq!(report.total_quizzes, 0);
        assert_eq!(report.average_score, 0.0);
        assert!(report.subject_performance.is_empty());
    }
}
