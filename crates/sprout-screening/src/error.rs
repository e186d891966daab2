use thiserror::Error;

/// Configuration and input failures detected before any aggregation runs.
/// An unanswered screening is not an error; it surfaces as the explicit
/// insufficient-data classification instead.
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("rule '{condition_id}' references domain '{domain}' not present in any question")]
    UnknownRuleDomain { condition_id: String, domain: String },

    #[error("rule '{condition_id}' requires a positive {field}")]
    NonPositiveRuleThreshold {
        condition_id: String,
        field: &'static str,
    },

    #[error("answer references unknown question '{question_id}'")]
    UnknownQuestion { question_id: String },

    #[error("duplicate answer for question '{question_id}'")]
    DuplicateAnswer { question_id: String },
}
