//! Entry points for scoring one screening session. Both are pure functions
//! of their arguments: identical input yields identical output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use sprout_core::models::answer::Answer;
use sprout_core::models::question::Question;
use sprout_core::models::rule::RecommendationRule;

use crate::error::ScreeningError;
use crate::recommend::{self, Recommendation};
use crate::scoring::{self, ConcernLevel, DomainScore, RiskLevel, RiskResult};

/// Output of [`score_general_screening`]: one entry per answered domain,
/// plus the recommendations whose rules fired.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneralScreeningResult {
    pub domain_scores: Vec<DomainScore>,
    pub recommendations: Vec<Recommendation>,
}

/// Score a single-condition questionnaire: weighted totals, risk-table
/// classification, and the red-flag count. Zero answered questions yields
/// `RiskLevel::InsufficientData`, not an error.
pub fn score_single_condition(
    questions: &[Question],
    answers: &[Answer],
) -> Result<RiskResult, ScreeningError> {
    let answers_by_id = index_answers(questions, answers)?;

    let totals = scoring::aggregate(questions, &answers_by_id);
    let red_flag_count = scoring::count_red_flags(questions, &answers_by_id);
    let risk_level = RiskLevel::classify(totals.raw_score, totals.max_possible_score);

    debug!(
        raw = totals.raw_score,
        max = totals.max_possible_score,
        red_flags = red_flag_count,
        level = ?risk_level,
        "scored single-condition screening"
    );

    Ok(RiskResult {
        total_score: totals.raw_score,
        max_possible_score: totals.max_possible_score,
        percentage_score: totals.percentage(),
        red_flag_count,
        risk_level,
    })
}

/// Score the multi-domain general screen: per-domain totals and concern
/// classification for every domain with at least one answered question,
/// then the recommendation rules. Unanswered domains are omitted from
/// `domain_scores` rather than classified.
pub fn score_general_screening(
    questions: &[Question],
    answers: &[Answer],
    rules: &[RecommendationRule],
) -> Result<GeneralScreeningResult, ScreeningError> {
    validate_rules(questions, rules)?;
    let answers_by_id = index_answers(questions, answers)?;

    let domain_scores: Vec<DomainScore> = scoring::aggregate_by_domain(questions, &answers_by_id)
        .into_iter()
        .map(|(domain, totals)| DomainScore {
            concern_level: ConcernLevel::classify(totals.raw_score, totals.max_possible_score),
            percentage_score: totals.percentage(),
            raw_score: totals.raw_score,
            max_possible_score: totals.max_possible_score,
            domain,
        })
        .collect();

    let recommendations = recommend::match_rules(&domain_scores, rules);

    debug!(
        domains = domain_scores.len(),
        recommendations = recommendations.len(),
        "scored general screening"
    );

    Ok(GeneralScreeningResult {
        domain_scores,
        recommendations,
    })
}

/// Index answers by question ID, rejecting duplicates and answers to
/// questions outside the supplied list.
fn index_answers<'a>(
    questions: &[Question],
    answers: &'a [Answer],
) -> Result<HashMap<&'a str, &'a Answer>, ScreeningError> {
    let mut by_id = HashMap::with_capacity(answers.len());
    for answer in answers {
        if !questions.iter().any(|q| q.id == answer.question_id) {
            return Err(ScreeningError::UnknownQuestion {
                question_id: answer.question_id.clone(),
            });
        }
        if by_id.insert(answer.question_id.as_str(), answer).is_some() {
            return Err(ScreeningError::DuplicateAnswer {
                question_id: answer.question_id.clone(),
            });
        }
    }
    Ok(by_id)
}

/// A rule that references a domain no question belongs to, or that sets a
/// zero minimum, can never fire; rejected eagerly before any aggregation.
fn validate_rules(
    questions: &[Question],
    rules: &[RecommendationRule],
) -> Result<(), ScreeningError> {
    for rule in rules {
        if rule.thresholds.min_primary_domains == 0 {
            return Err(ScreeningError::NonPositiveRuleThreshold {
                condition_id: rule.condition_id.clone(),
                field: "min_primary_domains",
            });
        }
        if rule.thresholds.min_elevated_questions == 0 {
            return Err(ScreeningError::NonPositiveRuleThreshold {
                condition_id: rule.condition_id.clone(),
                field: "min_elevated_questions",
            });
        }
        for domain in rule.primary_domains.iter().chain(&rule.secondary_domains) {
            if !questions.iter().any(|q| q.domain == *domain) {
                return Err(ScreeningError::UnknownRuleDomain {
                    condition_id: rule.condition_id.clone(),
                    domain: domain.clone(),
                });
            }
        }
    }
    Ok(())
}
