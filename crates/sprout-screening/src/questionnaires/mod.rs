pub mod autism;
pub mod general;
pub mod speech_language;

use sprout_core::models::question::{Question, ResponseOption};

/// Four-point frequency scale shared by every built-in questionnaire.
/// Option value and score coincide (0–3); higher means more concern.
fn frequency_options() -> Vec<ResponseOption> {
    [(0, "Never"), (1, "Rarely"), (2, "Sometimes"), (3, "Frequently")]
        .into_iter()
        .map(|(value, label)| ResponseOption {
            value,
            label: label.to_string(),
            score: value,
        })
        .collect()
}

fn question(id: &str, text: &str, domain: &str, weight: f64, is_red_flag: bool) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        domain: domain.to_string(),
        weight,
        is_red_flag,
        response_options: frequency_options(),
    }
}
