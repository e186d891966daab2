use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use sprout_core::models::answer::Answer;
use sprout_core::models::question::Question;

/// Highest score a single response option carries (4-point scale, 0–3).
pub const MAX_OPTION_SCORE: f64 = 3.0;

/// Raw answer value at which a red-flag item counts ("sometimes" or worse).
pub const RED_FLAG_VALUE: u8 = 2;

/// Concern classification for one developmental domain on the general
/// screen. Cut points: <33 low, [33,50) moderate, [50,67) elevated,
/// ≥67 significant. Lower bounds closed, upper bounds open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConcernLevel {
    /// No answered questions to classify. Distinct from `Low`.
    InsufficientData,
    Low,
    Moderate,
    Elevated,
    Significant,
}

impl ConcernLevel {
    pub fn classify(raw_score: f64, max_possible_score: f64) -> Self {
        if max_possible_score <= 0.0 {
            return Self::InsufficientData;
        }
        let percentage = 100.0 * raw_score / max_possible_score;
        match percentage {
            p if p < 33.0 => Self::Low,
            p if p < 50.0 => Self::Moderate,
            p if p < 67.0 => Self::Elevated,
            _ => Self::Significant,
        }
    }
}

/// Risk classification for a single-condition questionnaire. Cut points:
/// <30 minimal, [30,50) low, [50,70) moderate, ≥70 high. A coarser scale
/// than [`ConcernLevel`], used by different questionnaires; the two tables
/// are intentionally separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    /// No answered questions to classify. Distinct from `Minimal`.
    InsufficientData,
    Minimal,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn classify(raw_score: f64, max_possible_score: f64) -> Self {
        if max_possible_score <= 0.0 {
            return Self::InsufficientData;
        }
        let percentage = 100.0 * raw_score / max_possible_score;
        match percentage {
            p if p < 30.0 => Self::Minimal,
            p if p < 50.0 => Self::Low,
            p if p < 70.0 => Self::Moderate,
            _ => Self::High,
        }
    }
}

/// Raw and maximum totals for one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreTotals {
    pub raw_score: f64,
    pub max_possible_score: f64,
}

impl ScoreTotals {
    /// Percentage of the maximum, 0.0 when nothing was answered.
    pub fn percentage(&self) -> f64 {
        if self.max_possible_score <= 0.0 {
            0.0
        } else {
            100.0 * self.raw_score / self.max_possible_score
        }
    }
}

/// Scored totals and classification for one domain of the general screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub domain: String,
    pub raw_score: f64,
    pub max_possible_score: f64,
    pub percentage_score: f64,
    pub concern_level: ConcernLevel,
}

/// Result of a single-condition questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    pub total_score: f64,
    pub max_possible_score: f64,
    pub percentage_score: f64,
    pub red_flag_count: u32,
    pub risk_level: RiskLevel,
}

/// A single invalid answer reported by [`Questionnaire::validate_answers`].
///
/// [`Questionnaire::validate_answers`]: crate::Questionnaire::validate_answers
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerValidationError {
    pub question_id: String,
    pub value: u8,
    pub message: String,
}

/// Weighted totals over the answered questions. A question with no answer
/// contributes to neither the raw score nor the maximum.
pub fn aggregate(questions: &[Question], answers: &HashMap<&str, &Answer>) -> ScoreTotals {
    let mut totals = ScoreTotals::default();
    for question in questions {
        if let Some(answer) = answers.get(question.id.as_str()) {
            totals.raw_score += f64::from(answer.score) * question.weight;
            totals.max_possible_score += MAX_OPTION_SCORE * question.weight;
        }
    }
    totals
}

/// Per-domain totals with weight fixed at 1. Domains appear in
/// first-encounter order of the question list; domains with no answered
/// questions are omitted.
pub fn aggregate_by_domain(
    questions: &[Question],
    answers: &HashMap<&str, &Answer>,
) -> Vec<(String, ScoreTotals)> {
    let mut domains: Vec<(String, ScoreTotals)> = Vec::new();
    for question in questions {
        let Some(answer) = answers.get(question.id.as_str()) else {
            continue;
        };
        let index = match domains.iter().position(|(d, _)| *d == question.domain) {
            Some(index) => index,
            None => {
                domains.push((question.domain.clone(), ScoreTotals::default()));
                domains.len() - 1
            }
        };
        let totals = &mut domains[index].1;
        totals.raw_score += f64::from(answer.score);
        totals.max_possible_score += MAX_OPTION_SCORE;
    }
    domains
}

/// Count answered red-flag items at or above [`RED_FLAG_VALUE`]. The raw
/// answer value is compared, never the weighted score.
pub fn count_red_flags(questions: &[Question], answers: &HashMap<&str, &Answer>) -> u32 {
    questions
        .iter()
        .filter(|q| q.is_red_flag)
        .filter_map(|q| answers.get(q.id.as_str()))
        .filter(|a| a.value >= RED_FLAG_VALUE)
        .count() as u32
}
