//! Static pattern tables.
//!
//! Every pattern is matched against normalized text (lowercase ASCII, single
//! spaces), so none of them need accent or case variants. Tables are plain
//! data; the order the engine consults them in lives in `engine.rs`.
//!
//! `\b` anchoring keeps short words like "para" from firing inside longer
//! ones ("paraguas"). The compound STOP rules use `.*` on purpose so an insult
//! and a mention of the bot can sit anywhere in the utterance.

use std::sync::LazyLock;

use regex::RegexSet;

const STOP_PATTERNS: &[&str] = &[
    r"\bcallate\b",
    r"\bcalla\b",
    r"\bcaya\b", // common transcription of "calla"
    r"\bpara\b",
    r"\bstop\b",
    r"\bmaldit[oa]\b.*\bbot\b",
    r"\bmalit[oa]\b.*\bbot\b",
    r"\bmaldit[oa]\b.*\bvot\b",
    r"\bmalit[oa]\b.*\bvot\b",
];

const SAD_PATTERNS: &[&str] = &[
    r"\bestoy triste\b",
    r"\bme siento mal\b",
    r"\bdepre\b",
    r"\bdeprimid",
    r"\bno tengo ganas\b",
];

const CORNY_PATTERNS: &[&str] = &[
    r"\bay\b",
    r"\buwu\b",
    r"\bque lindo\b",
    r"\bque tierno\b",
    r"\bmi amor\b",
    r"\bay si\b",
    r"\bgoggogoc\b",
];

const HYPE_PATTERNS: &[&str] = &[
    r"\bepico\b",
    r"\bbrutal\b",
    r"\bque buena\b",
    r"\bgo go\b",
    r"\bvamo\b",
    r"\blets go\b",
];

const TENSE_PATTERNS: &[&str] = &[
    r"\bque miedo\b",
    r"\bno me gusta\b",
    r"\bno confio\b",
    r"\bsospechoso\b",
];

const SWEAR_PATTERNS: &[&str] = &[
    r"\bwea\b",
    r"\bweas\b",
    r"\bhuea\b",
    r"\bhueas\b",
    r"\bweon\b",
    r"\bweones\b",
    r"\bctm\b",
    r"\bconchetumare\b",
    r"\bputa\b",
    r"\bculiao\b",
    r"\bculia(o|os|a|as)\b",
    r"\bchucha\b",
    r"\bmierda\b",
    r"\bcarajo\b",
    r"\b(cago|cagai|cagamo?s|cagaron|cagaste)\b",
    r"\bpendejo\b",
    r"\bpendeja\b",
    r"\bgil\b",
    r"\bgiles\b",
    r"\bmaricon\b",
    r"\bmaricona\b",
    r"\bfacho\b",
    r"\bfacha\b",
    r"\bimbecil\b",
    r"\bimbeciles\b",
    r"\bidiota\b",
    r"\bidiotas\b",
    r"\bestupido\b",
    r"\bestupida\b",
    r"\bestupidos\b",
    r"\bestupidas\b",
    r"\btonto\b",
    r"\btonta\b",
    r"\btontos\b",
    r"\btontas\b",
];

const CHAOS_EXTRA_PATTERNS: &[&str] = &[
    r"\bjaja\b",
    r"\bjajaja\b",
    r"\blol\b",
    r"\bxd\b",
    r"\bgrita\b",
    r"\bcalla\b", // people shout it at each other
];

// JOYFUL and EVIL are kept for reference only; no tier consults them.
const JOYFUL_PATTERNS: &[&str] = &[
    r"\bque buena\b",
    r"\bepico\b",
    r"\bbrutal\b",
    r"\bvamo\b",
    r"\blets go\b",
];

const EVIL_PATTERNS: &[&str] = &[
    r"\bmaldit[oa]\b",
    r"\bmalit[oa]\b",
    r"\bMUAJAJAJ\b",
    r"\bmuehehehe\b",
    r"\bmuajajaja\b",
    r"\bcallate\b",
    r"\bcalla\b",
    r"\bcaya\b",
    r"\btu mamita\b",
];

/// Named pattern group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Stop,
    Sad,
    Corny,
    Hype,
    Tense,
    /// Vulgarity lexicon, counted rather than OR-ed.
    Swear,
    /// Laughter/shouting markers that amplify swearing.
    ChaosExtra,
    Joyful,
    Evil,
}

impl Group {
    pub const ALL: [Group; 9] = [
        Group::Stop,
        Group::Sad,
        Group::Corny,
        Group::Hype,
        Group::Tense,
        Group::Swear,
        Group::ChaosExtra,
        Group::Joyful,
        Group::Evil,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Group::Stop => "STOP",
            Group::Sad => "SAD",
            Group::Corny => "CORNY",
            Group::Hype => "HYPE",
            Group::Tense => "TENSE",
            Group::Swear => "SWEAR",
            Group::ChaosExtra => "CHAOS_EXTRA",
            Group::Joyful => "JOYFUL",
            Group::Evil => "EVIL",
        }
    }

    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Group::Stop => STOP_PATTERNS,
            Group::Sad => SAD_PATTERNS,
            Group::Corny => CORNY_PATTERNS,
            Group::Hype => HYPE_PATTERNS,
            Group::Tense => TENSE_PATTERNS,
            Group::Swear => SWEAR_PATTERNS,
            Group::ChaosExtra => CHAOS_EXTRA_PATTERNS,
            Group::Joyful => JOYFUL_PATTERNS,
            Group::Evil => EVIL_PATTERNS,
        }
    }
}

/// A compiled pattern group.
#[derive(Debug, Clone)]
pub struct PatternGroup {
    group: Group,
    set: RegexSet,
}

impl PatternGroup {
    /// Compile a group's table.
    pub fn compile(group: Group) -> Result<Self, regex::Error> {
        Ok(Self {
            group,
            set: RegexSet::new(group.patterns())?,
        })
    }

    pub fn group(&self) -> Group {
        self.group
    }

    /// Does any pattern match anywhere in `text`?
    pub fn is_match(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    /// Number of distinct patterns matching `text`. Repeats of the same
    /// pattern count once.
    pub fn count_matches(&self, text: &str) -> usize {
        self.set.matches(text).iter().count()
    }
}

/// All compiled groups, built once per process.
#[derive(Debug, Clone)]
pub struct RuleSet {
    groups: Vec<PatternGroup>,
}

static BUILTIN: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::compile().expect("built-in pattern tables must compile"));

impl RuleSet {
    /// Compile every table in [`Group::ALL`].
    pub fn compile() -> Result<Self, regex::Error> {
        let groups = Group::ALL
            .iter()
            .map(|g| PatternGroup::compile(*g))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { groups })
    }

    /// The process-wide rule set.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    pub fn group(&self, group: Group) -> &PatternGroup {
        // `Group::ALL` is in declaration order.
        &self.groups[group as usize]
    }
}
