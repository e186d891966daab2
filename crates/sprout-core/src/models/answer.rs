use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A parent's response to one questionnaire item. One answer per question
/// per session; collected by the UI, consumed read-only by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    /// Raw position on the 4-point frequency scale (0–3).
    pub value: u8,
    /// Score carried by the selected response option.
    pub score: u8,
}
