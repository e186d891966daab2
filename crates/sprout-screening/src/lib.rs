//! sprout-screening
//!
//! Screening scoring and recommendation engine. Pure computation — no
//! storage or session dependency. Defines score aggregation, concern
//! classification, red-flag detection, recommendation matching, and the
//! built-in questionnaires for each supported screening.

pub mod engine;
pub mod error;
pub mod questionnaires;
pub mod recommend;
pub mod scoring;

use sprout_core::models::answer::Answer;
use sprout_core::models::question::Question;

use scoring::AnswerValidationError;

/// Trait implemented by each built-in screening questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier for this questionnaire (e.g. "autism_screen").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "Autism Spectrum Screening").
    fn name(&self) -> &str;

    /// Condition this questionnaire screens for, when single-condition.
    /// The general developmental screen returns `None`.
    fn condition_id(&self) -> Option<&str> {
        None
    }

    /// The items administered by this questionnaire.
    fn questions(&self) -> &[Question];

    /// Validate a set of answers against this questionnaire's items.
    /// Advisory, for form-level feedback; the engine performs its own
    /// eager validation before scoring.
    fn validate_answers(&self, answers: &[Answer]) -> Vec<AnswerValidationError> {
        let questions = self.questions();

        let mut errors = Vec::new();
        for answer in answers {
            let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
                errors.push(AnswerValidationError {
                    question_id: answer.question_id.clone(),
                    value: answer.value,
                    message: format!(
                        "{}: unknown question '{}'",
                        self.name(),
                        answer.question_id,
                    ),
                });
                continue;
            };

            match question.option_for_value(answer.value) {
                None => errors.push(AnswerValidationError {
                    question_id: answer.question_id.clone(),
                    value: answer.value,
                    message: format!(
                        "{}: no response option with value {} on '{}'",
                        self.name(),
                        answer.value,
                        question.id,
                    ),
                }),
                Some(option) if option.score != answer.score => {
                    errors.push(AnswerValidationError {
                        question_id: answer.question_id.clone(),
                        value: answer.value,
                        message: format!(
                            "{}: score {} disagrees with option score {} on '{}'",
                            self.name(),
                            answer.score,
                            option.score,
                            question.id,
                        ),
                    });
                }
                Some(_) => {}
            }
        }
        errors
    }
}

/// Return all built-in questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::autism::AutismScreen),
        Box::new(questionnaires::speech_language::SpeechLanguageScreen),
        Box::new(questionnaires::general::GeneralDevelopmentalScreen),
    ]
}

/// Look up a built-in questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
