use std::sync::LazyLock;

use sprout_core::models::question::Question;
use sprout_core::models::rule::{RecommendationRule, RuleThresholds};

use super::question;
use crate::Questionnaire;

/// Multi-domain general developmental screening. Twenty-one unweighted
/// items, three per domain, scored and classified per domain; pairs with
/// the rule set from [`default_rules`].
pub struct GeneralDevelopmentalScreen;

impl Questionnaire for GeneralDevelopmentalScreen {
    fn id(&self) -> &str {
        "general_developmental_screen"
    }

    fn name(&self) -> &str {
        "General Developmental Screening"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let sections = [
                (
                    "gross_motor",
                    [
                        ("gm_stairs", "Struggles to walk up stairs even with support"),
                        ("gm_running", "Falls frequently when running or climbing"),
                        ("gm_ball", "Cannot kick or throw a ball"),
                    ],
                ),
                (
                    "fine_motor",
                    [
                        ("fm_grasp", "Has difficulty holding crayons or small objects"),
                        ("fm_stacking", "Cannot stack a few small blocks"),
                        ("fm_utensils", "Struggles to use a spoon or fork"),
                    ],
                ),
                (
                    "expressive_language",
                    [
                        ("el_words", "Uses very few words for their age"),
                        ("el_phrases", "Does not combine words into short phrases"),
                        ("el_requests", "Cannot make needs known with words or gestures"),
                    ],
                ),
                (
                    "receptive_language",
                    [
                        ("rl_directions", "Has trouble following simple directions"),
                        ("rl_names", "Does not look toward familiar people or objects when named"),
                        ("rl_routines", "Does not anticipate familiar daily routines"),
                    ],
                ),
                (
                    "social_emotional",
                    [
                        ("se_peers", "Shows little interest in playing near other children"),
                        ("se_affection", "Rarely seeks comfort from familiar caregivers"),
                        ("se_emotions", "Has difficulty calming after everyday upsets"),
                    ],
                ),
                (
                    "cognitive",
                    [
                        ("cg_puzzles", "Gives up quickly on simple puzzles or shape sorters"),
                        ("cg_pretend", "Shows little pretend or imitative play"),
                        ("cg_curiosity", "Shows little curiosity about new objects"),
                    ],
                ),
                (
                    "self_help",
                    [
                        ("sh_feeding", "Resists feeding themselves finger foods"),
                        ("sh_dressing", "Does not help with dressing or undressing"),
                        ("sh_routines", "Struggles to settle into everyday routines"),
                    ],
                ),
            ];

            sections
                .into_iter()
                .flat_map(|(domain, items)| {
                    items
                        .into_iter()
                        .map(move |(id, text)| question(id, text, domain, 1.0, false))
                })
                .collect()
        });
        &QUESTIONS
    }
}

/// The built-in rule set evaluated against the general screen's domain
/// scores. Order here is presentation priority; callers wanting a
/// different priority pre-sort the returned rules.
pub fn default_rules() -> Vec<RecommendationRule> {
    vec![
        rule(
            "autism_spectrum",
            "Autism Spectrum Disorder",
            &["social_emotional", "receptive_language"],
            &["expressive_language", "cognitive"],
            RuleThresholds {
                primary_threshold: 1.5,
                secondary_threshold: 1.0,
                min_primary_domains: 1,
                min_elevated_questions: 2,
            },
        ),
        rule(
            "speech_language_delay",
            "Speech or Language Delay",
            &["expressive_language", "receptive_language"],
            &["social_emotional"],
            RuleThresholds {
                primary_threshold: 1.0,
                secondary_threshold: 1.0,
                min_primary_domains: 1,
                min_elevated_questions: 1,
            },
        ),
        rule(
            "motor_delay",
            "Motor Development Delay",
            &["gross_motor", "fine_motor"],
            &["self_help"],
            RuleThresholds {
                primary_threshold: 1.5,
                secondary_threshold: 1.0,
                min_primary_domains: 1,
                min_elevated_questions: 1,
            },
        ),
        rule(
            "global_developmental_delay",
            "Global Developmental Delay",
            &["cognitive", "expressive_language", "gross_motor"],
            &["fine_motor", "receptive_language", "social_emotional", "self_help"],
            RuleThresholds {
                primary_threshold: 1.0,
                secondary_threshold: 1.0,
                min_primary_domains: 2,
                min_elevated_questions: 4,
            },
        ),
        rule(
            "attention_concerns",
            "Attention and Self-Regulation Concerns",
            &["cognitive", "social_emotional"],
            &["self_help"],
            RuleThresholds {
                primary_threshold: 1.5,
                secondary_threshold: 1.5,
                min_primary_domains: 1,
                min_elevated_questions: 2,
            },
        ),
    ]
}

fn rule(
    condition_id: &str,
    condition_name: &str,
    primary: &[&str],
    secondary: &[&str],
    thresholds: RuleThresholds,
) -> RecommendationRule {
    RecommendationRule {
        condition_id: condition_id.to_string(),
        condition_name: condition_name.to_string(),
        primary_domains: primary.iter().map(|d| d.to_string()).collect(),
        secondary_domains: secondary.iter().map(|d| d.to_string()).collect(),
        thresholds,
    }
}
