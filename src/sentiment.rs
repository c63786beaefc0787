//! Sentiment collaborator contract and the built-in keyword scorer.
//!
//! Sentiment scoring is external to the dialogue core: the engine consumes a
//! ready-made `SentimentScore` and never computes one. The `KeywordScorer`
//! here is a self-contained default so the CLI works without a real scorer;
//! callers with their own model implement `SentimentScorer` instead.

use serde::{Deserialize, Serialize};

/// Coarse emotional tone of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTone {
    Negative,
    Neutral,
    Positive,
    /// Anxiety-dominant tone. Strengthens the anxiety signal but never
    /// substitutes for pattern-based intent detection.
    Anxious,
}

impl Default for EmotionTone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for EmotionTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
            Self::Positive => write!(f, "positive"),
            Self::Anxious => write!(f, "anxious"),
        }
    }
}

/// A scored utterance: tone plus intensity and subjectivity in [-1, 1] / [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Dominant tone.
    pub tone: EmotionTone,
    /// Signed strength of the tone.
    pub intensity: f32,
    /// How opinion-laden the text is.
    pub subjectivity: f32,
}

impl SentimentScore {
    /// The collaborator-failure substitute: neutral, zero intensity.
    ///
    /// Callers must hand this to the engine when their scorer is
    /// unavailable, so the engine never observes a missing score.
    pub fn neutral() -> Self {
        Self {
            tone: EmotionTone::Neutral,
            intensity: 0.0,
            subjectivity: 0.0,
        }
    }

    /// Fine-grained label combining tone and intensity.
    pub fn detail_label(&self) -> &'static str {
        match self.tone {
            EmotionTone::Negative | EmotionTone::Anxious => {
                if self.intensity <= -0.6 {
                    "very_sad"
                } else if self.intensity <= -0.3 {
                    "sad"
                } else {
                    "slightly_sad"
                }
            }
            EmotionTone::Positive => {
                if self.intensity >= 0.6 {
                    "very_happy"
                } else if self.intensity >= 0.3 {
                    "happy"
                } else {
                    "slightly_happy"
                }
            }
            EmotionTone::Neutral => "neutral",
        }
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

/// External sentiment collaborator.
pub trait SentimentScorer: Send + Sync {
    /// Score a single utterance.
    fn score(&self, text: &str) -> SentimentScore;
}

// ---------------------------------------------------------------------------
// Keyword scorer
// ---------------------------------------------------------------------------

const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad", "depressed", "anxious", "worried", "stressed", "lonely", "hopeless", "tired",
    "exhausted", "scared", "afraid", "angry", "frustrated", "overwhelmed", "hurt", "pain",
    "suffering", "crying", "miserable", "terrible",
];

const POSITIVE_KEYWORDS: &[&str] = &[
    "happy", "good", "great", "better", "wonderful", "excited", "joyful", "grateful",
    "thankful", "blessed", "peaceful", "calm", "relaxed", "content", "satisfied",
];

const ANXIOUS_KEYWORDS: &[&str] = &[
    "anxious", "anxiety", "worried", "worry", "nervous", "panic", "panicking", "overwhelming",
];

/// Lexicon-based sentiment scorer over mental-health vocabulary.
///
/// Each keyword hit moves the score by ±0.15, capped at ±0.6; tone flips at
/// ±0.3. Two or more anxiety keywords override the tone to `Anxious`.
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for KeywordScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let lower = text.trim().to_lowercase();
        if lower.is_empty() {
            return SentimentScore::neutral();
        }

        let negative_hits = NEGATIVE_KEYWORDS.iter().filter(|k| lower.contains(**k)).count();
        let positive_hits = POSITIVE_KEYWORDS.iter().filter(|k| lower.contains(**k)).count();
        let anxious_hits = ANXIOUS_KEYWORDS.iter().filter(|k| lower.contains(**k)).count();

        let raw = 0.15 * (positive_hits as f32 - negative_hits as f32);
        let intensity = raw.clamp(-0.6, 0.6);

        let tone = if anxious_hits >= 2 {
            EmotionTone::Anxious
        } else if intensity <= -0.3 {
            EmotionTone::Negative
        } else if intensity >= 0.3 {
            EmotionTone::Positive
        } else {
            EmotionTone::Neutral
        };

        let word_count = lower.split_whitespace().count().max(1);
        let emotional_hits = negative_hits + positive_hits;
        let subjectivity = (emotional_hits as f32 / word_count as f32).clamp(0.0, 1.0);

        SentimentScore {
            tone,
            intensity,
            subjectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_for_empty() {
        let score = KeywordScorer::new().score("   ");
        assert_eq!(score.tone, EmotionTone::Neutral);
        assert_eq!(score.intensity, 0.0);
    }

    #[test]
    fn negative_vocabulary() {
        let score = KeywordScorer::new().score("I am sad, tired and hopeless");
        assert_eq!(score.tone, EmotionTone::Negative);
        assert!(score.intensity < 0.0);
    }

    #[test]
    fn positive_vocabulary() {
        let score = KeywordScorer::new().score("feeling happy, grateful and calm today");
        assert_eq!(score.tone, EmotionTone::Positive);
        assert!(score.intensity > 0.0);
    }

    #[test]
    fn anxiety_keywords_override_tone() {
        let score = KeywordScorer::new().score("I can't stop worrying, the panic is constant");
        assert_eq!(score.tone, EmotionTone::Anxious);
    }

    #[test]
    fn single_keyword_stays_neutral() {
        let score = KeywordScorer::new().score("I had a good sandwich");
        assert_eq!(score.tone, EmotionTone::Neutral);
    }

    #[test]
    fn intensity_is_capped() {
        let text = "sad depressed lonely hopeless tired exhausted scared angry miserable terrible";
        let score = KeywordScorer::new().score(text);
        assert_eq!(score.intensity, -0.6);
    }

    #[test]
    fn detail_labels() {
        let score = SentimentScore {
            tone: EmotionTone::Negative,
            intensity: -0.7,
            subjectivity: 0.5,
        };
        assert_eq!(score.detail_label(), "very_sad");

        let score = SentimentScore {
            tone: EmotionTone::Positive,
            intensity: 0.4,
            subjectivity: 0.5,
        };
        assert_eq!(score.detail_label(), "happy");

        assert_eq!(SentimentScore::neutral().detail_label(), "neutral");
    }

    #[test]
    fn tone_display() {
        assert_eq!(EmotionTone::Anxious.to_string(), "anxious");
        assert_eq!(EmotionTone::default(), EmotionTone::Neutral);
    }
}
