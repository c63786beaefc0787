//! The ordered response rule table.
//!
//! Eleven tiers, evaluated top to bottom against the turn context; the
//! first rule whose predicate holds produces the reply and the evaluation
//! stops. Tiers 6 through 10 gate their resource trigger on an explanation
//! ("because"), an explicit problem, or conversation depth — the engine
//! listens first and recommends later.

use rand::RngCore;

use crate::intent::Intent;
use crate::resource::ResourceTrigger;
use crate::sentiment::EmotionTone;
use crate::session::{EmotionState, Problem};

use super::catalogue::{ResponseCatalogue, Scenario};
use super::{ResponseDirective, Selection, TurnContext};

/// One tier of the cascade: a named predicate/handler pair.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&TurnContext) -> bool,
    pub respond: fn(&TurnContext, &ResponseCatalogue, &mut dyn RngCore) -> Selection,
}

/// The cascade in priority order. The final entry always applies.
pub static RULES: &[Rule] = &[
    Rule {
        name: "greeting",
        applies: |ctx| ctx.intents.contains(Intent::Greeting),
        respond: greeting,
    },
    Rule {
        name: "thanks",
        applies: |ctx| ctx.intents.contains(Intent::Thanks),
        respond: thanks,
    },
    Rule {
        name: "goodbye",
        applies: |ctx| ctx.intents.contains(Intent::Goodbye),
        respond: goodbye,
    },
    Rule {
        name: "crying",
        applies: |ctx| ctx.intents.contains(Intent::Crying),
        respond: crying,
    },
    Rule {
        name: "positive",
        applies: |ctx| {
            ctx.intents.contains(Intent::FeelingHappy)
                || ctx.intents.contains(Intent::FeelingGood)
                || ctx.sentiment.tone == EmotionTone::Positive
        },
        respond: positive,
    },
    Rule {
        name: "stress",
        applies: |ctx| {
            ctx.intents.contains(Intent::FeelingStressed)
                && !ctx.intents.contains(Intent::FeelingAnxious)
        },
        respond: stress,
    },
    Rule {
        name: "anxiety",
        applies: |ctx| {
            ctx.intents.contains(Intent::FeelingAnxious)
                && !ctx.intents.contains(Intent::FeelingStressed)
        },
        respond: anxiety,
    },
    Rule {
        name: "anxiety_stress",
        applies: |ctx| {
            ctx.intents.contains(Intent::FeelingAnxious)
                && ctx.intents.contains(Intent::FeelingStressed)
        },
        respond: anxiety_stress,
    },
    Rule {
        name: "low_mood",
        applies: |ctx| ctx.intents.contains(Intent::LowMood),
        respond: low_mood,
    },
    Rule {
        name: "negative",
        applies: |ctx| {
            ctx.intents.contains(Intent::FeelingSad)
                || ctx.intents.contains(Intent::FeelingDepressed)
                || ctx.sentiment.tone == EmotionTone::Negative
        },
        respond: negative,
    },
    Rule {
        name: "fallback",
        applies: |_| true,
        respond: fallback,
    },
];

/// Whether the user has explained themselves or the conversation has run
/// long enough to stop withholding resources.
fn resource_gate(ctx: &TurnContext) -> bool {
    ctx.intents.contains(Intent::Because) || ctx.turn_count >= ctx.turn_gate
}

/// Intents counting as an explicit problem disclosure, with the problem
/// category each resolves to, in tie-break priority order.
pub(super) const PROBLEM_INTENTS: &[(Intent, Problem)] = &[
    (Intent::FriendshipProblems, Problem::Friends),
    (Intent::SomeoneHurt, Problem::Friends),
    (Intent::RelationshipProblems, Problem::Relationship),
    (Intent::FamilyProblems, Problem::Family),
    (Intent::Bullying, Problem::Bullying),
    (Intent::ExamStress, Problem::Exam),
    (Intent::WorkStress, Problem::Work),
    (Intent::MoneyProblems, Problem::Money),
    (Intent::HealthProblems, Problem::Health),
    (Intent::SelfEsteem, Problem::SelfEsteem),
    (Intent::FeelingLonely, Problem::Lonely),
];

fn problem_scenario(problem: Problem) -> Scenario {
    match problem {
        Problem::Friends => Scenario::SadFriends,
        Problem::Relationship => Scenario::SadRelationship,
        Problem::Family => Scenario::SadFamily,
        Problem::Bullying => Scenario::SadBullying,
        Problem::Exam => Scenario::SadExam,
        Problem::Work => Scenario::SadWork,
        Problem::Money => Scenario::SadMoney,
        Problem::Health => Scenario::SadHealth,
        Problem::SelfEsteem => Scenario::SadSelfEsteem,
        Problem::Lonely => Scenario::SadLonely,
    }
}

// ---------------------------------------------------------------------------
// Tier handlers
// ---------------------------------------------------------------------------

fn greeting(ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    let scenario = if ctx.turn_count == 1 {
        Scenario::GreetingFirst
    } else {
        Scenario::GreetingAgain
    };
    Selection::plain("greeting", cat.pick(scenario, rng))
}

fn thanks(_ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    Selection::plain("thanks", cat.pick(Scenario::ThanksReply, rng))
}

fn goodbye(_ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    Selection::plain("goodbye", cat.pick(Scenario::GoodbyeReply, rng))
}

fn crying(_ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    Selection::plain("crying", cat.pick(Scenario::CryingSupport, rng))
        .with_emotion(EmotionState::Crying)
}

fn positive(ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    let achievement = ["exam", "marks", "grade"]
        .iter()
        .any(|w| ctx.utterance_lower.contains(w));
    let scenario = if achievement {
        Scenario::HappyAchievement
    } else {
        Scenario::HappyShare
    };
    Selection::plain("positive", cat.pick(scenario, rng))
}

fn stress(ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    let selection = if resource_gate(ctx) {
        let (scenario, specific) = if ctx.intents.contains(Intent::WorkStress) {
            (Scenario::SadWork, Some(Problem::Work))
        } else if ctx.intents.contains(Intent::ExamStress) {
            (Scenario::SadExam, Some(Problem::Exam))
        } else {
            (Scenario::StressAck, None)
        };
        let trigger = ResourceTrigger {
            emotion: EmotionTone::Negative,
            specific,
        };
        Selection::triggering("stress", cat.pick(scenario, rng), trigger)
    } else {
        Selection::plain("stress", cat.pick(Scenario::StressAck, rng))
    };
    selection.with_emotion(EmotionState::Stress)
}

fn anxiety(ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    let text = cat.pick(Scenario::AnxietyAck, rng);
    let selection = if resource_gate(ctx) {
        Selection::triggering(
            "anxiety",
            text,
            ResourceTrigger::for_emotion(EmotionTone::Negative),
        )
    } else {
        Selection::plain("anxiety", text)
    };
    selection.with_emotion(EmotionState::Anxiety)
}

fn anxiety_stress(ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    let text = cat.pick(Scenario::AnxietyStressCombo, rng);
    let selection = if resource_gate(ctx) {
        Selection::triggering(
            "anxiety_stress",
            text,
            ResourceTrigger::for_emotion(EmotionTone::Negative),
        )
    } else {
        Selection::plain("anxiety_stress", text)
    };
    selection.with_emotion(EmotionState::AnxietyStress)
}

fn low_mood(ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    let text = cat.pick(Scenario::LowMoodAck, rng);
    let selection = if resource_gate(ctx) {
        Selection::triggering(
            "low_mood",
            text,
            ResourceTrigger::for_emotion(EmotionTone::Negative),
        )
    } else {
        Selection::plain("low_mood", text)
    };
    selection.with_emotion(EmotionState::LowMood)
}

fn negative(ctx: &TurnContext, cat: &ResponseCatalogue, rng: &mut dyn RngCore) -> Selection {
    let disclosed_problem = PROBLEM_INTENTS
        .iter()
        .find(|(intent, _)| ctx.intents.contains(*intent))
        .map(|(_, problem)| *problem);

    let gated = disclosed_problem.is_some() || resource_gate(ctx);
    let selection = if gated {
        match disclosed_problem {
            Some(problem) => {
                let text = cat.pick(problem_scenario(problem), rng);
                Selection::triggering(
                    "negative",
                    text,
                    ResourceTrigger::for_problem(EmotionTone::Negative, problem),
                )
                .with_problem(problem)
            }
            None => {
                // No specific category: validate, encourage, hand over to
                // resources.
                let text = format!(
                    "{} {} {}",
                    cat.pick(Scenario::Validation, rng),
                    cat.pick(Scenario::Encouragement, rng),
                    cat.pick(Scenario::TransitionResources, rng),
                );
                Selection::triggering(
                    "negative",
                    text,
                    ResourceTrigger::for_emotion(EmotionTone::Negative),
                )
            }
        }
    } else {
        // First or second contact with no explanation: ask why before
        // recommending anything.
        Selection::plain("negative", cat.pick(Scenario::SadInitial, rng))
    };
    selection.with_emotion(EmotionState::Negative)
}

pub(super) fn fallback(
    _ctx: &TurnContext,
    cat: &ResponseCatalogue,
    rng: &mut dyn RngCore,
) -> Selection {
    Selection::plain("fallback", cat.pick(Scenario::ListeningFallback, rng))
}

impl Selection {
    fn plain(rule: &'static str, text: impl Into<String>) -> Self {
        Self {
            directive: ResponseDirective {
                text: text.into(),
                trigger: None,
            },
            rule,
            set_emotion: None,
            set_problem: None,
        }
    }

    fn triggering(rule: &'static str, text: impl Into<String>, trigger: ResourceTrigger) -> Self {
        Self {
            directive: ResponseDirective {
                text: text.into(),
                trigger: Some(trigger),
            },
            rule,
            set_emotion: None,
            set_problem: None,
        }
    }

    fn with_emotion(mut self, emotion: EmotionState) -> Self {
        self.set_emotion = Some(emotion);
        self
    }

    fn with_problem(mut self, problem: Problem) -> Self {
        self.set_problem = Some(problem);
        self
    }
}
