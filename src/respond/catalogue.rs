//! Reply-template catalogue: scenario-keyed variant lists.
//!
//! Every scenario maps to a named non-empty list of equivalent phrasings;
//! selection picks uniformly so repeated turns don't parrot the same line.
//! The randomness source is supplied by the caller, which keeps tests
//! deterministic via a seeded RNG.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A reply scenario: the key into the template table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    GreetingFirst,
    GreetingAgain,
    SadInitial,
    SadRelationship,
    SadFamily,
    SadFriends,
    SadBullying,
    SadExam,
    SadWork,
    SadMoney,
    SadHealth,
    SadSelfEsteem,
    SadLonely,
    CryingSupport,
    StressAck,
    AnxietyAck,
    LowMoodAck,
    AnxietyStressCombo,
    HappyShare,
    HappyAchievement,
    Validation,
    Encouragement,
    TransitionResources,
    ThanksReply,
    GoodbyeReply,
    ListeningFallback,
}

impl Scenario {
    /// The variant list for this scenario. Always non-empty.
    pub fn variants(&self) -> &'static [&'static str] {
        match self {
            Self::GreetingFirst => &[
                "Hello! I'm MindMend, your mental health support companion. I'm here to listen to you without any judgment. How are you feeling today? 😊",
                "Hi there! I'm so glad you're here. I'm MindMend, and I'm here to support you through whatever you're going through. What's on your mind today? 💙",
                "Hey! Welcome to MindMend. This is a safe space for you to share anything. How are you doing right now? 🤗",
            ],
            Self::GreetingAgain => &[
                "Hello again! I'm here for you. How can I support you today? 😊",
                "Hi! Good to hear from you again. What would you like to talk about? 💬",
                "Hey! I'm all ears. What's going on with you? 🌟",
            ],
            Self::SadInitial => &[
                "I'm really sorry you're feeling sad right now. 😢 Your feelings are completely valid. Can you tell me what's making you feel this way? I'm here to listen.",
                "I hear you, and I'm here for you. Feeling sad is tough, and I want you to know you're not alone. What's been going on that's making you feel sad? 💙",
                "Thank you for sharing that with me. It takes courage to express when you're feeling down. Would you like to tell me what's causing these feelings? I'm listening. 🤗",
            ],
            Self::SadRelationship => &[
                "I'm so sorry you're going through relationship problems. 💔 Heartbreak and relationship conflicts are incredibly painful. Your feelings are completely valid. Remember, you deserve to be treated with love, respect, and kindness. Let me share some resources that can help you through this difficult time.",
                "Relationship pain is one of the deepest hurts we can experience. 😢 Whether it's a breakup, betrayal, or ongoing conflicts, these wounds take time to heal. You're not alone in this. I'm here to support you with helpful resources.",
            ],
            Self::SadFamily => &[
                "I'm sorry you're dealing with family problems. 👨‍👩‍👧 Family conflicts can be especially difficult. Your feelings are valid, and it's okay to feel hurt or frustrated. Remember, you can take care of yourself. Let me share some coping strategies and resources.",
                "Family problems are incredibly challenging. 😔 Whether it's conflicts with parents or siblings, these situations can feel overwhelming. You deserve peace. I have resources that can help you navigate this.",
            ],
            Self::SadFriends => &[
                "I'm so sorry your friends hurt you. 💔 Friendship problems can feel devastating. Being ignored or hurt by friends can shake our confidence. Please know that you deserve friends who value and respect you. Let me share some resources to help you cope.",
                "That's really hard. 😢 When our friends let us down, it can make us feel so alone. Remember, you are worthy of genuine, caring friendships. Let me provide you with some helpful resources and coping strategies.",
            ],
            Self::SadBullying => &[
                "I'm so sorry you're being bullied. 😔 Bullying is NOT okay, and it's NOT your fault. No one deserves to be treated that way. Please consider talking to a trusted adult, teacher, or counselor. Let me also share resources that can help you cope and protect yourself.",
                "Bullying is a form of abuse, and I want you to know that you don't deserve this treatment. 💙 You are valuable and worthy of respect. Please reach out to someone you trust. I'm also going to provide you with coping strategies and support resources.",
            ],
            Self::SadExam => &[
                "Exam pressure can be incredibly stressful. 📚 Remember, your worth isn't defined by your grades. You're so much more than a test score! Let me help you with some stress-relief techniques, study tips, and motivational resources.",
                "I hear you. Academic pressure is real. 😟 Many students go through this. Let me help you with some stress-relief techniques, study tips, and calming exercises that can make things feel more manageable.",
            ],
            Self::SadWork => &[
                "Work stress and office pressure can be exhausting. 😓 It's okay to feel overwhelmed. Your wellbeing matters more than any deadline. Let me share some stress management resources and quick relaxation techniques.",
                "I'm sorry you're dealing with work overload. Burnout is real. 💼 Remember to take breaks and be kind to yourself. Let me share some stress management resources, funny videos, and relaxation exercises.",
            ],
            Self::SadMoney => &[
                "Financial stress is incredibly challenging. 💰 Please know that your worth isn't determined by your bank account. Many people face financial difficulties. Let me share resources including stress-management techniques and support information.",
                "I'm sorry you're dealing with financial stress. 😔 Money problems can cause enormous anxiety. You're not alone in this. Let me provide coping strategies and helpful resources.",
            ],
            Self::SadHealth => &[
                "I'm sorry you're dealing with health issues. 🏥 Physical illness can deeply affect our mental health too. Please make sure you're seeing medical professionals. Let me also share mental health resources to support you through this difficult time.",
                "Health problems are so challenging. 😔 Dealing with illness or pain is exhausting. While I can't provide medical advice, I can offer mental health support resources to help you cope emotionally.",
            ],
            Self::SadSelfEsteem => &[
                "I'm so sorry you're feeling this way about yourself. 💙 Please know that you ARE good enough, worthy, and valuable - exactly as you are. You deserve self-compassion. Let me share resources to help build your self-esteem.",
                "Those feelings of worthlessness are symptoms of low self-esteem, not truth. 🌟 You have inherent value. Let me help you challenge those negative thoughts with coping strategies and professional resources.",
            ],
            Self::SadLonely => &[
                "I'm so sorry you're feeling lonely. 😔 Loneliness is incredibly painful. You matter, and you deserve connection and companionship. Let me share resources for building social connections and coping with loneliness.",
                "Feeling alone is one of the hardest experiences. 💙 Your feelings are valid, and reaching out shows courage. Let me provide resources and strategies to help you feel less isolated.",
            ],
            Self::CryingSupport => &[
                "I'm here with you. It's okay to cry - tears are a natural way to release emotion. 😢 Take your time. When you're ready, I'm here to listen.",
                "Crying is healing. 💙 Let it out. I'm right here with you. Would you like to share what's causing these tears?",
            ],
            Self::StressAck => &[
                "I hear that you're feeling stressed. 😰 Stress can affect everything - sleep, mood, and health. Can you tell me what's causing this stress? I have stress-relief resources that can help.",
                "Stress is your body's way of saying it's overwhelmed. 😓 What's been stressing you out? Let me provide you with stress-management techniques, breathing exercises, and calming resources.",
            ],
            Self::AnxietyAck => &[
                "I'm sorry you're experiencing anxiety. 😰 Anxiety can feel like your mind is racing. Can you tell me more about when you feel most anxious? I have anxiety-relief techniques including breathing exercises that can help immediately.",
                "Anxiety is so challenging. 💙 It can make you feel constantly worried. Please know that anxiety is treatable. I have resources specifically for managing anxious thoughts.",
            ],
            Self::LowMoodAck => &[
                "I'm sorry you're experiencing low mood. 😔 When we feel down or unmotivated, it can be hard to see things getting better. I have resources including mood-boosting activities and uplifting videos that can help.",
                "A persistent low mood can be draining. 💙 Sometimes we just feel down without knowing why. I have resources to help lift your mood and energy.",
            ],
            Self::AnxietyStressCombo => &[
                "Anxiety and stress together can feel overwhelming. 😰 But there are ways to break this cycle. Let me provide you with breathing exercises, stress-management techniques, and calming resources that address both.",
                "Dealing with both stress and anxiety is exhausting. 💙 The good news is that many techniques help with both. I have breathing exercises, grounding techniques, and calming videos that work for stress and anxiety.",
            ],
            Self::HappyShare => &[
                "That's wonderful to hear! 😊 I'm so happy you're feeling good! What's been going well for you? I'd love to celebrate this moment with you! ✨",
                "Yay! I love hearing that you're happy! 🎉 What's bringing you joy today? Tell me all about it!",
            ],
            Self::HappyAchievement => &[
                "Congratulations on your good marks! 🎊 You worked hard for this! This is proof of your dedication. I'm so proud of you! 🌟",
                "That's amazing! Good grades are the result of your hard work! 📚✨ You should feel really proud! 💪",
            ],
            Self::Validation => &[
                "What you're feeling is completely valid and normal. You're not alone in this. 💙",
                "Your emotions matter, and acknowledging them shows strength. 🌟",
                "Thank you for trusting me. What you're going through is significant, and you deserve support. 🫂",
            ],
            Self::Encouragement => &[
                "You're stronger than you think, and you can work through this. 💪",
                "Remember, difficult times don't last forever. You've survived 100% of your worst days. 🌈",
                "You took an important step by reaching out. That shows courage. 🌟",
            ],
            Self::TransitionResources => &[
                "Based on what you've shared, I have helpful resources - calming exercises, motivational videos (including funny ones!), and professional support options. These can really help. 🌈",
                "Let me help you with practical tools! I have breathing exercises, YouTube videos for relaxation and motivation, and helpful articles. 💙",
            ],
            Self::ThanksReply => &[
                "You're very welcome! 😊 I'm here whenever you need support. Take care of yourself! 💙",
                "I'm glad I could help! 🌟 Feel free to come back anytime. You're doing great! 🤗",
            ],
            Self::GoodbyeReply => &[
                "Take care! 💙 Remember, I'm here 24/7 whenever you need support. You're not alone. Goodbye for now! 🌈",
                "Goodbye! 👋 Please be kind to yourself. You're strong and capable. Stay well! ✨",
            ],
            Self::ListeningFallback => &[
                "I'm here to listen. Would you like to share more about how you're feeling? I'm here to support you. 💙",
            ],
        }
    }
}

/// The full template table with uniform variant selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseCatalogue;

impl ResponseCatalogue {
    pub fn new() -> Self {
        Self
    }

    /// Pick one variant uniformly at random.
    pub fn pick(&self, scenario: Scenario, rng: &mut dyn RngCore) -> &'static str {
        scenario
            .variants()
            .choose(&mut *rng)
            .copied()
            .unwrap_or("I'm here to listen.")
    }
}
