//! Intent detection for user utterances.
//!
//! A flat catalogue of named regex rules, evaluated independently: one
//! utterance can match many intents at once ("I'm stressed because of work"
//! matches `feeling_stressed`, `because`, and `work_stress` together). The
//! catalogue is pure data — priority between co-occurring intents is decided
//! by the response rule cascade, never here.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::IntentError;

/// A conversational-purpose label detected from utterance text.
///
/// Labels are non-exclusive: detection returns every matching label, or
/// `General` when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    FeelingSad,
    FeelingDepressed,
    FeelingAnxious,
    FeelingStressed,
    FeelingLonely,
    FeelingAngry,
    Crying,
    Hurt,
    FeelingHopeless,
    LowMood,
    FeelingHappy,
    FeelingGood,
    FeelingExcited,
    FeelingGrateful,
    RelationshipProblems,
    FamilyProblems,
    FriendshipProblems,
    Bullying,
    WorkStress,
    ExamStress,
    MoneyProblems,
    HealthProblems,
    SelfEsteem,
    Because,
    SomeoneHurt,
    Failure,
    Rejection,
    Loss,
    Thanks,
    Yes,
    No,
    Help,
    Goodbye,
    /// Fallback label when no pattern matches.
    General,
}

impl Intent {
    /// Stable snake_case label, matching the wire/log representation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::FeelingSad => "feeling_sad",
            Self::FeelingDepressed => "feeling_depressed",
            Self::FeelingAnxious => "feeling_anxious",
            Self::FeelingStressed => "feeling_stressed",
            Self::FeelingLonely => "feeling_lonely",
            Self::FeelingAngry => "feeling_angry",
            Self::Crying => "crying",
            Self::Hurt => "hurt",
            Self::FeelingHopeless => "feeling_hopeless",
            Self::LowMood => "low_mood",
            Self::FeelingHappy => "feeling_happy",
            Self::FeelingGood => "feeling_good",
            Self::FeelingExcited => "feeling_excited",
            Self::FeelingGrateful => "feeling_grateful",
            Self::RelationshipProblems => "relationship_problems",
            Self::FamilyProblems => "family_problems",
            Self::FriendshipProblems => "friendship_problems",
            Self::Bullying => "bullying",
            Self::WorkStress => "work_stress",
            Self::ExamStress => "exam_stress",
            Self::MoneyProblems => "money_problems",
            Self::HealthProblems => "health_problems",
            Self::SelfEsteem => "self_esteem",
            Self::Because => "because",
            Self::SomeoneHurt => "someone_hurt",
            Self::Failure => "failure",
            Self::Rejection => "rejection",
            Self::Loss => "loss",
            Self::Thanks => "thanks",
            Self::Yes => "yes",
            Self::No => "no",
            Self::Help => "help",
            Self::Goodbye => "goodbye",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The pattern table: one whole-word regex per detectable intent.
///
/// Patterns are searched over the lowercased utterance, so they are written
/// in lowercase. `Intent::General` carries no pattern — it is the fallback.
pub const PATTERNS: &[(Intent, &str)] = &[
    // Greetings
    (
        Intent::Greeting,
        r"\b(hello|hi|hey|hii|hiii|hy|hyy|hola|namaste|good morning|good afternoon|good evening|greetings|whats up|sup|yo)\b",
    ),
    // Emotional states: negative
    (
        Intent::FeelingSad,
        r"\b(sad|sadness|feeling sad|feel sad|im sad|i am sad)\b",
    ),
    (
        Intent::FeelingDepressed,
        r"\b(depressed|depression|feeling depressed|feel depressed)\b",
    ),
    (
        Intent::FeelingAnxious,
        r"\b(anxious|anxiety|worried|worry|nervous|panic|scared|afraid|fear)\b",
    ),
    (
        Intent::FeelingStressed,
        r"\b(stressed|stress|pressure|overwhelmed|overworked|burnout|burnt out)\b",
    ),
    (
        Intent::FeelingLonely,
        r"\b(lonely|alone|isolated|no one|nobody)\b",
    ),
    (
        Intent::FeelingAngry,
        r"\b(angry|mad|furious|frustrated|irritated|annoyed)\b",
    ),
    (Intent::Crying, r"\b(crying|cry|tears|weeping|sobbing)\b"),
    (Intent::Hurt, r"\b(hurt|pain|painful|hurting|wounded)\b"),
    (
        Intent::FeelingHopeless,
        r"\b(hopeless|helpless|worthless|useless|pointless)\b",
    ),
    (
        Intent::LowMood,
        r"\b(low mood|feeling down|feeling low|down|low|unmotivated|no energy)\b",
    ),
    // Emotional states: positive
    (
        Intent::FeelingHappy,
        r"\b(happy|happiness|feeling happy|feel happy|joyful|joy)\b",
    ),
    (
        Intent::FeelingGood,
        r"\b(good|great|amazing|wonderful|fantastic|excellent|awesome|fine|better)\b",
    ),
    (
        Intent::FeelingExcited,
        r"\b(excited|excitement|energetic|motivated|pumped)\b",
    ),
    (
        Intent::FeelingGrateful,
        r"\b(grateful|thankful|blessed|appreciate)\b",
    ),
    // Specific problems
    (
        Intent::RelationshipProblems,
        r"\b(relationship|boyfriend|girlfriend|partner|spouse|husband|wife|breakup|broke up|break up|divorce|cheating|cheated|fight|fought|argument|love problem)\b",
    ),
    (
        Intent::FamilyProblems,
        r"\b(family|parents|mother|father|mom|dad|sister|brother|sibling|family issue|family problem|family fight)\b",
    ),
    (
        Intent::FriendshipProblems,
        r"\b(friend|friends|friendship|best friend|friends hurt|friends ignore|friends left|friend problem)\b",
    ),
    (
        Intent::Bullying,
        r"\b(bully|bullying|bullied|harass|harassment|teasing|mocking|make fun)\b",
    ),
    (
        Intent::WorkStress,
        r"\b(work|job|office|workplace|boss|manager|colleague|coworker|workload|deadline|overtime|project|career)\b",
    ),
    (
        Intent::ExamStress,
        r"\b(exam|test|exams|tests|studying|study|grade|grades|marks|result|results|academic|school|college|university|assignment|homework)\b",
    ),
    (
        Intent::MoneyProblems,
        r"\b(money|financial|finances|debt|broke|bills|salary|pay|loan|expenses|poor)\b",
    ),
    (
        Intent::HealthProblems,
        r"\b(health|sick|illness|disease|pain|ache|medical|doctor|hospital|unwell)\b",
    ),
    (
        Intent::SelfEsteem,
        r"\b(ugly|fat|stupid|dumb|worthless|useless|hate myself|self esteem|confidence|insecure|not good enough)\b",
    ),
    // Reasons and explanations
    (
        Intent::Because,
        r"\b(because|cause|reason|due to|since|as)\b",
    ),
    (
        Intent::SomeoneHurt,
        r"\b(hurt me|hurting me|betrayed|betray|let me down|disappointed|ignore|ignored|left me|abandoned)\b",
    ),
    (
        Intent::Failure,
        r"\b(fail|failed|failure|mess|messed up|mistake|screwed up|lost)\b",
    ),
    (
        Intent::Rejection,
        r"\b(reject|rejected|rejection|turned down|said no|denied)\b",
    ),
    (
        Intent::Loss,
        r"\b(lost|loss|death|died|passed away|gone|miss)\b",
    ),
    // Conversational responses
    (
        Intent::Thanks,
        r"\b(thank|thanks|thx|thankyou|thank you|appreciate|grateful)\b",
    ),
    (Intent::Yes, r"\b(yes|yeah|yep|yup|sure|okay|ok|fine|alright)\b"),
    (Intent::No, r"\b(no|nope|nah|not really)\b"),
    (
        Intent::Help,
        r"\b(help|support|advice|suggest|recommend|what should|what can|guide)\b",
    ),
    (
        Intent::Goodbye,
        r"\b(bye|goodbye|see you|gtg|gotta go|have to go|talk later|later)\b",
    ),
];

/// The set of intents detected in one utterance.
///
/// Preserves catalogue order; never empty (`General` stands in when no
/// pattern matched).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentSet(Vec<Intent>);

impl IntentSet {
    /// Build from detected labels; substitutes `General` when empty.
    pub fn from_detected(detected: Vec<Intent>) -> Self {
        if detected.is_empty() {
            Self(vec![Intent::General])
        } else {
            Self(detected)
        }
    }

    /// Whether the given intent was detected.
    pub fn contains(&self, intent: Intent) -> bool {
        self.0.contains(&intent)
    }

    /// Whether any of the given intents was detected.
    pub fn contains_any(&self, intents: &[Intent]) -> bool {
        intents.iter().any(|i| self.contains(*i))
    }

    /// Detected intents in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = Intent> + '_ {
        self.0.iter().copied()
    }

    /// Number of detected intents.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false in practice — detection substitutes `General`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Snake_case labels, for logs and the CLI.
    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|i| i.label()).collect()
    }
}

/// Compiled intent catalogue.
///
/// Compiles every pattern once at engine startup; a pattern that fails to
/// compile is a startup diagnostic, never a runtime surprise.
pub struct IntentCatalogue {
    rules: Vec<(Intent, Regex)>,
}

impl IntentCatalogue {
    /// Compile the full pattern table.
    pub fn new() -> Result<Self, IntentError> {
        let mut rules = Vec::with_capacity(PATTERNS.len());
        for (intent, pattern) in PATTERNS {
            let regex = Regex::new(pattern).map_err(|e| IntentError::InvalidPattern {
                intent: intent.label(),
                message: e.to_string(),
            })?;
            rules.push((*intent, regex));
        }
        Ok(Self { rules })
    }

    /// Detect every matching intent in the utterance.
    ///
    /// All rules are evaluated — no short-circuiting — so overlapping
    /// matches are returned together. Matching is case-insensitive via
    /// lowercasing, with word-boundary anchoring from the patterns.
    pub fn detect(&self, utterance: &str) -> IntentSet {
        let lower = utterance.to_lowercase();
        let detected = self
            .rules
            .iter()
            .filter(|(_, regex)| regex.is_match(&lower))
            .map(|(intent, _)| *intent)
            .collect();
        IntentSet::from_detected(detected)
    }

    /// The pattern table as (label, pattern) pairs, for the CLI listing.
    pub fn rules(&self) -> impl Iterator<Item = (Intent, &str)> + '_ {
        self.rules.iter().map(|(i, r)| (*i, r.as_str()))
    }
}
