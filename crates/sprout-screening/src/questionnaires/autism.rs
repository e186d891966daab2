use std::sync::LazyLock;

use sprout_core::models::question::Question;

use super::question;
use crate::Questionnaire;

/// Early autism-spectrum screening questionnaire. Twelve parent-reported
/// items across social communication, repetitive behavior, sensory
/// response, and regression; weighted, with red flags on the
/// highest-signal items.
pub struct AutismScreen;

impl Questionnaire for AutismScreen {
    fn id(&self) -> &str {
        "autism_screen"
    }

    fn name(&self) -> &str {
        "Autism Spectrum Screening"
    }

    fn condition_id(&self) -> Option<&str> {
        Some("autism_spectrum")
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let items = [
                (
                    "eye_contact",
                    "Avoids eye contact during everyday interactions",
                    "social_communication",
                    1.5,
                    false,
                ),
                (
                    "response_to_name",
                    "Does not respond when their name is called",
                    "social_communication",
                    2.0,
                    true,
                ),
                (
                    "showing_objects",
                    "Does not show or bring objects to share interest",
                    "social_communication",
                    1.5,
                    false,
                ),
                (
                    "pointing",
                    "Does not point to show interest in things out of reach",
                    "social_communication",
                    2.0,
                    true,
                ),
                (
                    "pretend_play",
                    "Shows little interest in pretend play with toys",
                    "social_communication",
                    1.5,
                    false,
                ),
                (
                    "peer_interest",
                    "Shows little interest in other children",
                    "social_communication",
                    1.0,
                    false,
                ),
                (
                    "repetitive_movements",
                    "Makes repetitive movements such as hand flapping or rocking",
                    "repetitive_behavior",
                    1.5,
                    false,
                ),
                (
                    "routine_distress",
                    "Becomes intensely distressed by small changes in routine",
                    "repetitive_behavior",
                    1.0,
                    false,
                ),
                (
                    "restricted_interests",
                    "Focuses on one narrow interest to the exclusion of other play",
                    "repetitive_behavior",
                    1.0,
                    false,
                ),
                (
                    "sensory_seeking",
                    "Seeks out unusual sensory experiences, such as staring at lights",
                    "sensory",
                    1.0,
                    false,
                ),
                (
                    "sound_sensitivity",
                    "Covers ears or becomes upset at everyday sounds",
                    "sensory",
                    1.0,
                    false,
                ),
                (
                    "skill_loss",
                    "Has lost words or skills they previously used",
                    "regression",
                    2.0,
                    true,
                ),
            ];

            items
                .into_iter()
                .map(|(id, text, domain, weight, red_flag)| {
                    question(id, text, domain, weight, red_flag)
                })
                .collect()
        });
        &QUESTIONS
    }
}
