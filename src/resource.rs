//! Resource-trigger contract and the recommender collaborator interface.
//!
//! The engine never fetches coping resources itself. When a reply should be
//! accompanied by resources, the directive carries a `ResourceTrigger` and
//! the caller invokes its `ResourceRecommender` with the trigger's emotion
//! (and optional specific problem), then surfaces the combined bundle.

use serde::{Deserialize, Serialize};

use crate::sentiment::EmotionTone;
use crate::session::Problem;

/// Instruction to the caller: fetch resources for this emotion before
/// surfacing the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTrigger {
    /// Emotion to recommend for.
    pub emotion: EmotionTone,
    /// Narrows the recommendation to a specific problem category.
    pub specific: Option<Problem>,
}

impl ResourceTrigger {
    /// A trigger for the given emotion with no specific category.
    pub fn for_emotion(emotion: EmotionTone) -> Self {
        Self {
            emotion,
            specific: None,
        }
    }

    /// A trigger narrowed to one problem category.
    pub fn for_problem(emotion: EmotionTone, problem: Problem) -> Self {
        Self {
            emotion,
            specific: Some(problem),
        }
    }
}

impl std::fmt::Display for ResourceTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.specific {
            Some(problem) => write!(f, "{}/{}", self.emotion, problem.label()),
            None => write!(f, "{}", self.emotion),
        }
    }
}

// ---------------------------------------------------------------------------
// Recommender collaborator
// ---------------------------------------------------------------------------

/// A recommended video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResource {
    pub title: String,
    pub url: String,
    /// Video style tag (meditation, calming, funny, motivational, ...).
    pub kind: String,
    pub duration: String,
    pub description: String,
}

/// A recommended coping exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResource {
    pub name: String,
    pub description: String,
    pub duration: String,
}

/// A recommended article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResource {
    pub title: String,
    pub url: String,
}

/// A professional-support pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalResource {
    pub name: String,
    pub contact: String,
    pub description: String,
}

/// The bundle a recommender returns for one trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub videos: Vec<VideoResource>,
    pub exercises: Vec<ExerciseResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<ArticleResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub professional_resources: Vec<ProfessionalResource>,
}

/// External resource recommendation collaborator.
///
/// Invoked by the caller only when a directive carries a trigger; the
/// engine never calls this.
pub trait ResourceRecommender: Send + Sync {
    /// Recommend a bundle for an emotion, optionally steered by a user
    /// mood preference (e.g. "funny", "calming").
    fn recommend(&self, emotion: EmotionTone, mood_preference: Option<&str>) -> ResourceBundle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_constructors() {
        let t = ResourceTrigger::for_emotion(EmotionTone::Negative);
        assert_eq!(t.emotion, EmotionTone::Negative);
        assert!(t.specific.is_none());

        let t = ResourceTrigger::for_problem(EmotionTone::Negative, Problem::Work);
        assert_eq!(t.specific, Some(Problem::Work));
    }

    #[test]
    fn bundle_serializes_without_empty_optionals() {
        let bundle = ResourceBundle::default();
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json.get("articles").is_none());
        assert!(json.get("professional_resources").is_none());
        assert!(json.get("videos").is_some());
    }
}
