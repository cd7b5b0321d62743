//! Priority-ordered mood rule engine.
//!
//! Tiers are evaluated top to bottom and the first one whose predicate holds
//! decides the result. Reordering or adding a tier is an edit to [`TIERS`].

use tracing::debug;

use super::normalize::normalize;
use super::rules::{Group, RuleSet};
use super::types::{Analysis, ClassificationResult, Tier};

/// Swear count that flags CHAOS on its own.
const CHAOS_SWEAR_ALONE: usize = 3;
/// Swear count that flags CHAOS when laughter/shouting is also present.
const CHAOS_SWEAR_WITH_EXTRA: usize = 2;

/// When a tier fires.
#[derive(Debug, Clone, Copy)]
enum Predicate {
    /// At least one pattern of the group matches.
    Any(Group),
    /// Dense vulgarity, optionally amplified by laughter/shouting.
    SwearDensity,
    Always,
}

impl Predicate {
    fn holds(self, rules: &RuleSet, text: &str, hits: &Hits) -> bool {
        match self {
            Predicate::Any(group) => rules.group(group).is_match(text),
            Predicate::SwearDensity => {
                hits.swear >= CHAOS_SWEAR_ALONE
                    || (hits.swear >= CHAOS_SWEAR_WITH_EXTRA && hits.chaos >= 1)
            }
            Predicate::Always => true,
        }
    }
}

struct Hits {
    swear: usize,
    chaos: usize,
}

impl Hits {
    fn count(rules: &RuleSet, text: &str) -> Self {
        Self {
            swear: rules.group(Group::Swear).count_matches(text),
            chaos: rules.group(Group::ChaosExtra).count_matches(text),
        }
    }
}

/// Dispatch order, highest precedence first.
const TIERS: &[(Predicate, Tier)] = &[
    (Predicate::Any(Group::Stop), Tier::Stop),
    (Predicate::SwearDensity, Tier::Chaos),
    (Predicate::Any(Group::Sad), Tier::Sad),
    (Predicate::Any(Group::Corny), Tier::Corny),
    (Predicate::Any(Group::Hype), Tier::Hype),
    (Predicate::Any(Group::Tense), Tier::Tense),
    (Predicate::Always, Tier::None),
];

/// Stateless classifier over a compiled [`RuleSet`].
#[derive(Debug, Clone, Copy)]
pub struct MoodEngine {
    rules: &'static RuleSet,
}

impl MoodEngine {
    /// Engine over the built-in tables.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::builtin(),
        }
    }

    /// Classify one utterance.
    pub fn classify(&self, raw: &str) -> ClassificationResult {
        self.explain(raw).result
    }

    /// Classify one utterance and report how the decision was reached.
    pub fn explain(&self, raw: &str) -> Analysis {
        let text = raw.trim();
        let normalized = normalize(text);
        let hits = Hits::count(self.rules, &normalized);

        let tier = TIERS
            .iter()
            .find(|(predicate, _)| predicate.holds(self.rules, &normalized, &hits))
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::None);

        debug!(
            normalized = %normalized,
            swear_hits = hits.swear,
            chaos_hits = hits.chaos,
            tier = ?tier,
            "Utterance classified"
        );

        Analysis {
            normalized,
            swear_hits: hits.swear,
            chaos_hits: hits.chaos,
            tier,
            result: ClassificationResult::from_tier(tier, text),
        }
    }
}

impl Default for MoodEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one utterance with the built-in tables.
pub fn classify(raw: &str) -> ClassificationResult {
    MoodEngine::new().classify(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::types::{Intent, Mood};

    fn assert_outcome(text: &str, intent: Intent, mood: Mood, confidence: f64) {
        let r = classify(text);
        assert_eq!(r.intent(), intent, "intent for {text:?}");
        assert_eq!(r.mood(), mood, "mood for {text:?}");
        assert_eq!(r.confidence(), confidence, "confidence for {text:?}");
    }

    #[test]
    fn stop_commands() {
        assert_outcome("cállate ahora", Intent::Stop, Mood::Stop, 0.92);
        assert_outcome("ya para porfa", Intent::Stop, Mood::Stop, 0.92);
        assert_outcome("caya", Intent::Stop, Mood::Stop, 0.92);
        assert_outcome("STOP!!", Intent::Stop, Mood::Stop, 0.92);
        assert_outcome("maldito seas, bot", Intent::Stop, Mood::Stop, 0.92);
    }

    #[test]
    fn accent_invariance() {
        assert_eq!(
            classify("cállate ahora").intent(),
            classify("callate ahora").intent()
        );
        assert_eq!(
            classify("cállate ahora").confidence(),
            classify("callate ahora").confidence()
        );
        assert_eq!(classify("¡Qué miedo!").mood(), classify("que miedo").mood());
    }

    #[test]
    fn stop_beats_chaos() {
        let analysis = MoodEngine::new().explain("callate maldito weon culiao");
        assert_eq!(analysis.tier, Tier::Stop);
        assert!(analysis.swear_hits >= 2);
        assert_eq!(analysis.result.intent(), Intent::Stop);
    }

    #[test]
    fn chaos_threshold_boundary() {
        assert_outcome("eres pendejo y gil", Intent::None, Mood::None, 0.50);
        assert_outcome("eres pendejo y gil jaja", Intent::Mood, Mood::Chaos, 0.80);
        assert_outcome("pendejo gil weon", Intent::Mood, Mood::Chaos, 0.80);
    }

    #[test]
    fn repeated_swear_counts_once() {
        let analysis = MoodEngine::new().explain("weon weon weon jaja");
        assert_eq!(analysis.swear_hits, 1);
        assert_eq!(analysis.chaos_hits, 1);
        assert_eq!(analysis.tier, Tier::None);
    }

    #[test]
    fn laughter_alone_is_not_chaos() {
        assert_outcome("jaja jajaja lol xd", Intent::None, Mood::None, 0.50);
    }

    #[test]
    fn mood_tiers() {
        assert_outcome("hoy estoy triste", Intent::Mood, Mood::Sad, 0.78);
        assert_outcome("ando deprimido", Intent::Mood, Mood::Sad, 0.78);
        assert_outcome("ay que tierno uwu", Intent::Mood, Mood::Corny, 0.75);
        assert_outcome("eso fue épico", Intent::Mood, Mood::Hype, 0.74);
        assert_outcome("lets go!", Intent::Mood, Mood::Hype, 0.74);
        assert_outcome("esto es sospechoso", Intent::Mood, Mood::Tense, 0.72);
        assert_outcome("no confío en ti", Intent::Mood, Mood::Tense, 0.72);
    }

    #[test]
    fn sad_beats_corny() {
        assert_outcome("estoy triste pero que lindo", Intent::Mood, Mood::Sad, 0.78);
    }

    #[test]
    fn corny_beats_hype_and_hype_beats_tense() {
        assert_outcome("ay que epico", Intent::Mood, Mood::Corny, 0.75);
        assert_outcome("brutal pero que miedo", Intent::Mood, Mood::Hype, 0.74);
    }

    #[test]
    fn default_case_echoes_trimmed_text() {
        let r = classify("  El clima esta agradable HOY  ");
        assert_eq!(r.intent(), Intent::None);
        assert_eq!(r.mood(), Mood::None);
        assert_eq!(r.confidence(), 0.50);
        assert_eq!(r.text(), "El clima esta agradable HOY");

        let r = classify("el clima esta agradable hoy");
        assert_eq!(r.text(), "el clima esta agradable hoy");
    }

    #[test]
    fn totality_over_odd_input() {
        let inputs = ["", "   ", "?!...", "привет мир", "😂😂😂", "\u{0301}\u{0301}", "\0"];
        for input in inputs {
            let r = classify(input);
            assert!((0.0..=1.0).contains(&r.confidence()));
            assert_eq!(r.intent(), Intent::None, "{input:?}");
            assert_eq!(r.confidence(), 0.50);
        }
    }

    #[test]
    fn dead_groups_do_not_dispatch() {
        // Only JOYFUL/EVIL content; "muajajaja" is EVIL but no tier reads EVIL.
        assert_outcome("muajajaja tu mamita", Intent::None, Mood::None, 0.50);
        assert!(TIERS.iter().all(|(p, _)| !matches!(
            p,
            Predicate::Any(Group::Joyful) | Predicate::Any(Group::Evil)
        )));
    }

    #[test]
    fn explain_reports_normalized_text() {
        let analysis = MoodEngine::new().explain("¡Qué MIEDO, weón!");
        assert_eq!(analysis.normalized, "que miedo weon");
        assert_eq!(analysis.swear_hits, 1);
        assert_eq!(analysis.tier, Tier::Tense);
    }

    #[test]
    fn engine_copies_share_the_static_rules() {
        fn assert_copy_send_sync<T: Copy + Send + Sync>() {}
        assert_copy_send_sync::<MoodEngine>();

        let engine = MoodEngine::new();
        let copy = engine;
        assert!(std::ptr::eq(engine.rules, copy.rules));
        assert_eq!(engine.classify("que miedo"), copy.classify("que miedo"));
    }
}
