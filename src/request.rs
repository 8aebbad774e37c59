use crate::technique::Technique;
use serde::{Deserialize, Serialize};

/// Describes the meditation to generate.
///
/// Optional fields default to empty when absent from a payload; the prompt
/// builders treat empty and missing identically. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationRequest {
    pub technique: Technique,
    /// Session length in minutes.
    pub session_length: u32,
    /// e.g. "detailed", "brief"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub guidance_level: String,
    /// Focus of attention for focused-attention sessions, e.g. "breath", "mantra".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub focus_object: String,
    /// Targets for loving-kindness sessions, e.g. ["self", "family"].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compassion_targets: Vec<String>,
    /// Emotions to observe for mindfulness-of-emotion sessions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emotion_labels: Vec<String>,
    /// e.g. "self", "others", "world"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gratitude_scope: String,
    /// e.g. "nature", "silence", "white_noise"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ambient_sound: String,
    /// e.g. "calm", "whisper"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub voice_preference: String,
    /// e.g. "relaxation", "focus"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub goal: String,
}

impl MeditationRequest {
    /// A request with every optional field empty.
    pub fn new(technique: Technique, session_length: u32) -> Self {
        MeditationRequest {
            technique,
            session_length,
            guidance_level: String::new(),
            focus_object: String::new(),
            compassion_targets: Vec::new(),
            emotion_labels: Vec::new(),
            gratitude_scope: String::new(),
            ambient_sound: String::new(),
            voice_preference: String::new(),
            goal: String::new(),
        }
    }
}
