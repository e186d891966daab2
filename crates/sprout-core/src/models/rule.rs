use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Declarative recommendation rule for one condition. Rules are static
/// configuration, evaluated independently; each fires at most once per
/// screening.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationRule {
    pub condition_id: String,
    pub condition_name: String,
    /// Domains that carry the condition's core signal.
    pub primary_domains: Vec<String>,
    /// Supporting domains that strengthen a match but cannot fire it alone.
    pub secondary_domains: Vec<String>,
    pub thresholds: RuleThresholds,
}

/// Cut points controlling when a rule fires. Threshold levels are on the
/// 0–3 per-question scale, not percentages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleThresholds {
    pub primary_threshold: f64,
    pub secondary_threshold: f64,
    pub min_primary_domains: u32,
    pub min_elevated_questions: u32,
}
