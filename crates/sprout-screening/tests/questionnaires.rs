//! Tests for the built-in questionnaire catalog and its rule set.

use sprout_core::models::answer::Answer;
use sprout_screening::engine::{score_general_screening, score_single_condition};
use sprout_screening::questionnaires::general::{self, GeneralDevelopmentalScreen};
use sprout_screening::recommend::ConfidenceLevel;
use sprout_screening::scoring::RiskLevel;
use sprout_screening::{all_questionnaires, get_questionnaire, Questionnaire};

fn answer(question_id: &str, value: u8) -> Answer {
    Answer {
        question_id: question_id.to_string(),
        value,
        score: value,
    }
}

#[test]
fn registry_lists_each_questionnaire_once() {
    let all = all_questionnaires();
    assert_eq!(all.len(), 3);

    let mut ids: Vec<&str> = all.iter().map(|q| q.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn lookup_by_id() {
    assert!(get_questionnaire("autism_screen").is_some());
    assert!(get_questionnaire("nonexistent").is_none());
}

#[test]
fn catalog_items_use_the_four_point_scale() {
    for questionnaire in all_questionnaires() {
        for question in questionnaire.questions() {
            assert!(question.weight > 0.0, "{} has no weight", question.id);
            assert!(!question.text.is_empty());
            assert_eq!(question.response_options.len(), 4, "{}", question.id);
            for (expected, option) in question.response_options.iter().enumerate() {
                assert_eq!(option.value, expected as u8);
                assert_eq!(option.score, option.value);
            }
        }
    }
}

#[test]
fn general_screen_covers_seven_domains() {
    let screen = GeneralDevelopmentalScreen;
    let questions = screen.questions();
    assert_eq!(questions.len(), 21);

    let mut domains: Vec<&str> = questions.iter().map(|q| q.domain.as_str()).collect();
    domains.dedup();
    assert_eq!(domains.len(), 7);
    for domain in domains {
        let count = questions.iter().filter(|q| q.domain == domain).count();
        assert_eq!(count, 3, "{domain}");
    }
}

#[test]
fn single_condition_screens_declare_their_condition() {
    assert_eq!(
        get_questionnaire("autism_screen").unwrap().condition_id(),
        Some("autism_spectrum")
    );
    assert_eq!(
        get_questionnaire("speech_language_screen")
            .unwrap()
            .condition_id(),
        Some("speech_language_delay")
    );
    assert_eq!(
        get_questionnaire("general_developmental_screen")
            .unwrap()
            .condition_id(),
        None
    );
}

#[test]
fn default_rules_pass_eager_validation() {
    let screen = GeneralDevelopmentalScreen;
    let result =
        score_general_screening(screen.questions(), &[], &general::default_rules()).unwrap();
    assert!(result.domain_scores.is_empty());
    assert!(result.recommendations.is_empty());
}

#[test]
fn validate_answers_accepts_a_clean_sheet() {
    let questionnaire = get_questionnaire("autism_screen").unwrap();
    let answers: Vec<Answer> = questionnaire
        .questions()
        .iter()
        .map(|q| answer(&q.id, 1))
        .collect();

    assert!(questionnaire.validate_answers(&answers).is_empty());
}

#[test]
fn validate_answers_reports_unknown_question() {
    let questionnaire = get_questionnaire("autism_screen").unwrap();
    let errors = questionnaire.validate_answers(&[answer("not_an_item", 1)]);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].question_id, "not_an_item");
    assert!(errors[0].message.contains("unknown question"));
}

#[test]
fn validate_answers_reports_out_of_scale_value() {
    let questionnaire = get_questionnaire("autism_screen").unwrap();
    let errors = questionnaire.validate_answers(&[answer("eye_contact", 7)]);

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("no response option"));
}

#[test]
fn validate_answers_reports_score_option_mismatch() {
    let questionnaire = get_questionnaire("autism_screen").unwrap();
    let mut tampered = answer("eye_contact", 1);
    tampered.score = 3;
    let errors = questionnaire.validate_answers(&[tampered]);

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("disagrees"));
}

#[test]
fn autism_screen_flags_its_highest_signal_items() {
    let questionnaire = get_questionnaire("autism_screen").unwrap();
    let red_flags: Vec<&str> = questionnaire
        .questions()
        .iter()
        .filter(|q| q.is_red_flag)
        .map(|q| q.id.as_str())
        .collect();

    assert_eq!(red_flags, vec!["response_to_name", "pointing", "skill_loss"]);
}

#[test]
fn concerning_autism_answers_score_high_with_red_flags() {
    let questionnaire = get_questionnaire("autism_screen").unwrap();
    let answers: Vec<Answer> = questionnaire
        .questions()
        .iter()
        .map(|q| answer(&q.id, 3))
        .collect();

    let result = score_single_condition(questionnaire.questions(), &answers).unwrap();
    assert_eq!(result.percentage_score, 100.0);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.red_flag_count, 3);
}

#[test]
fn reassuring_autism_answers_score_minimal() {
    let questionnaire = get_questionnaire("autism_screen").unwrap();
    let answers: Vec<Answer> = questionnaire
        .questions()
        .iter()
        .map(|q| answer(&q.id, 0))
        .collect();

    let result = score_single_condition(questionnaire.questions(), &answers).unwrap();
    assert_eq!(result.risk_level, RiskLevel::Minimal);
    assert_eq!(result.red_flag_count, 0);
}

#[test]
fn elevated_language_domains_recommend_speech_evaluation() {
    let screen = GeneralDevelopmentalScreen;
    let answers: Vec<Answer> = screen
        .questions()
        .iter()
        .map(|q| {
            let concerning = q.domain == "expressive_language" || q.domain == "receptive_language";
            answer(&q.id, if concerning { 3 } else { 0 })
        })
        .collect();

    let result =
        score_general_screening(screen.questions(), &answers, &general::default_rules()).unwrap();

    let ids: Vec<&str> = result
        .recommendations
        .iter()
        .map(|r| r.condition_id.as_str())
        .collect();
    assert_eq!(ids, vec!["autism_spectrum", "speech_language_delay"]);

    assert_eq!(
        result.recommendations[0].confidence_level,
        ConfidenceLevel::Suggested
    );
    assert_eq!(
        result.recommendations[1].confidence_level,
        ConfidenceLevel::Recommended
    );
}

#[test]
fn broad_elevation_strengthens_the_autism_recommendation() {
    let screen = GeneralDevelopmentalScreen;
    let concerning = [
        "social_emotional",
        "receptive_language",
        "expressive_language",
        "cognitive",
    ];
    let answers: Vec<Answer> = screen
        .questions()
        .iter()
        .map(|q| answer(&q.id, if concerning.contains(&q.domain.as_str()) { 3 } else { 0 }))
        .collect();

    let result =
        score_general_screening(screen.questions(), &answers, &general::default_rules()).unwrap();

    let autism = result
        .recommendations
        .iter()
        .find(|r| r.condition_id == "autism_spectrum")
        .unwrap();
    assert_eq!(
        autism.confidence_level,
        ConfidenceLevel::StronglyRecommended
    );
    assert_eq!(
        autism.triggering_domains,
        vec![
            "social_emotional",
            "receptive_language",
            "expressive_language",
            "cognitive"
        ]
    );
}
