use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A screening questionnaire item. Loaded once per screening session from
/// configuration; never created or mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    /// Prose shown to the parent. The engine never reads it.
    pub text: String,
    /// Developmental domain this item belongs to (e.g. "fine_motor").
    pub domain: String,
    /// Weight applied to the answer's score in single-condition scoring.
    pub weight: f64,
    /// High-signal item: an answer of "sometimes" or worse is surfaced
    /// separately from the numeric total.
    pub is_red_flag: bool,
    pub response_options: Vec<ResponseOption>,
}

/// One choice on a question's 4-point frequency scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
    pub score: u8,
}

impl Question {
    /// Look up the response option matching a raw answer value.
    pub fn option_for_value(&self, value: u8) -> Option<&ResponseOption> {
        self.response_options.iter().find(|o| o.value == value)
    }
}
