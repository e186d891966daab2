use std::sync::LazyLock;

use sprout_core::models::question::Question;

use super::question;
use crate::Questionnaire;

/// Speech and language delay screening questionnaire. Ten parent-reported
/// items split between expressive and receptive language.
pub struct SpeechLanguageScreen;

impl Questionnaire for SpeechLanguageScreen {
    fn id(&self) -> &str {
        "speech_language_screen"
    }

    fn name(&self) -> &str {
        "Speech and Language Screening"
    }

    fn condition_id(&self) -> Option<&str> {
        Some("speech_language_delay")
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let items = [
                (
                    "vocabulary_size",
                    "Uses fewer words than other children the same age",
                    "expressive_language",
                    1.5,
                    false,
                ),
                (
                    "two_word_phrases",
                    "Does not combine two words into short phrases",
                    "expressive_language",
                    2.0,
                    true,
                ),
                (
                    "speech_clarity",
                    "Is difficult for family members to understand",
                    "expressive_language",
                    1.0,
                    false,
                ),
                (
                    "imitating_words",
                    "Does not try to imitate new words",
                    "expressive_language",
                    1.5,
                    false,
                ),
                (
                    "naming_objects",
                    "Cannot name familiar objects or pictures",
                    "expressive_language",
                    1.0,
                    false,
                ),
                (
                    "gesture_use",
                    "Uses few gestures such as waving or nodding",
                    "expressive_language",
                    1.0,
                    false,
                ),
                (
                    "following_directions",
                    "Has trouble following simple one-step directions",
                    "receptive_language",
                    1.5,
                    true,
                ),
                (
                    "understanding_questions",
                    "Does not understand simple questions",
                    "receptive_language",
                    1.5,
                    false,
                ),
                (
                    "pointing_to_named",
                    "Cannot point to named body parts or familiar objects",
                    "receptive_language",
                    1.0,
                    false,
                ),
                (
                    "attention_to_speech",
                    "Does not attend when spoken to directly",
                    "receptive_language",
                    1.0,
                    false,
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
