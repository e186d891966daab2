use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sprout_core::models::rule::RecommendationRule;

use crate::scoring::DomainScore;

/// Converts a 0–3 threshold level into a percentage cut point, matching the
/// 3-point-per-question domain scale.
const LEVEL_TO_PERCENT: f64 = 33.33;

/// How strongly a matched condition should be raised with the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfidenceLevel {
    Suggested,
    Recommended,
    StronglyRecommended,
}

/// A "consider evaluating for this condition" suggestion produced by one
/// fired rule.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub condition_id: String,
    pub condition_name: String,
    pub confidence_level: ConfidenceLevel,
    /// Primary hits first, then secondary hits.
    pub triggering_domains: Vec<String>,
}

/// Evaluate every rule against the domain scores, in caller order. Rules
/// are independent: a domain may trigger several rules, and firing one rule
/// never alters what another sees. No match yields an empty list.
pub fn match_rules(
    domain_scores: &[DomainScore],
    rules: &[RecommendationRule],
) -> Vec<Recommendation> {
    rules
        .iter()
        .filter_map(|rule| evaluate_rule(domain_scores, rule))
        .collect()
}

fn evaluate_rule(domain_scores: &[DomainScore], rule: &RecommendationRule) -> Option<Recommendation> {
    let primary_hits = elevated_domains(
        domain_scores,
        &rule.primary_domains,
        rule.thresholds.primary_threshold,
    );
    let secondary_hits = elevated_domains(
        domain_scores,
        &rule.secondary_domains,
        rule.thresholds.secondary_threshold,
    );

    let required_primary = rule.thresholds.min_primary_domains.max(1) as usize;
    let elevated_total = primary_hits.len() + secondary_hits.len();
    if primary_hits.len() < required_primary
        || elevated_total < rule.thresholds.min_elevated_questions as usize
    {
        return None;
    }

    // First match wins on the ladder.
    let confidence_level = if primary_hits.len() >= 2 && elevated_total >= 4 {
        ConfidenceLevel::StronglyRecommended
    } else if primary_hits.len() >= 2 {
        ConfidenceLevel::Recommended
    } else {
        ConfidenceLevel::Suggested
    };

    let mut triggering_domains = primary_hits;
    triggering_domains.extend(secondary_hits);

    Some(Recommendation {
        condition_id: rule.condition_id.clone(),
        condition_name: rule.condition_name.clone(),
        confidence_level,
        triggering_domains,
    })
}

/// The candidate domains whose scored percentage meets the threshold level.
/// A domain with no score entry never qualifies.
fn elevated_domains(
    domain_scores: &[DomainScore],
    candidates: &[String],
    threshold_level: f64,
) -> Vec<String> {
    let cut = threshold_level * LEVEL_TO_PERCENT;
    candidates
        .iter()
        .filter(|domain| {
            domain_scores
                .iter()
                .any(|score| score.domain == **domain && score.percentage_score >= cut)
        })
        .cloned()
        .collect()
}
