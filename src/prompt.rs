use crate::error::MindfulError;
use crate::request::MeditationRequest;
use crate::technique::Technique;

/// Shared trailer appended to every prompt so the reply matches the shape
/// the generator parses.
const FORMAT_INSTRUCTIONS: &str = "Format your response as JSON with a \"content\" field \
containing the full script with [PAUSE x] markers for pauses in seconds, and a \
\"timing_markers\" map with \"intro\", \"body\" and \"closing\" entries.";

/// Builds the user-turn prompt for a meditation request.
///
/// Pure and deterministic; every `Technique` value has exactly one builder.
pub fn build_meditation_prompt(request: &MeditationRequest) -> Result<String, MindfulError> {
    let body = match request.technique {
        Technique::BodyScan => build_body_scan_prompt(request),
        Technique::FocusedAttention => build_focused_attention_prompt(request),
        Technique::LovingKindness => build_loving_kindness_prompt(request),
        Technique::MindfulnessEmotion => build_mindfulness_emotion_prompt(request),
        Technique::GratitudePractice => build_gratitude_practice_prompt(request),
    };
    Ok(format!("{}\n\n{}", body, FORMAT_INSTRUCTIONS))
}

fn build_body_scan_prompt(request: &MeditationRequest) -> String {
    format!(
        "You are a meditation teacher. Create a {}-minute body scan meditation script with {} \
         guidance. The goal is {}. Use a {} voice tone. Include references to {} ambient sounds. \
         Follow traditional mindfulness practices for body scan meditation.",
        request.session_length,
        request.guidance_level,
        request.goal,
        request.voice_preference,
        request.ambient_sound,
    )
}

fn build_focused_attention_prompt(request: &MeditationRequest) -> String {
    // Defaults are applied locally, never written back to the request.
    let focus_object = if request.focus_object.is_empty() {
        "the breath"
    } else {
        &request.focus_object
    };
    let guidance_level = if request.guidance_level.is_empty() {
        "brief"
    } else {
        &request.guidance_level
    };
    let voice_preference = if request.voice_preference.is_empty() {
        "calm"
    } else {
        &request.voice_preference
    };

    format!(
        "You are a meditation teacher. Create a {}-minute focused attention meditation script \
         where the focus is on {}. Provide {} guidance. The goal is {}. Use a {} voice tone. \
         Incorporate traditional practices of focused attention meditation.",
        request.session_length, focus_object, guidance_level, request.goal, voice_preference,
    )
}

fn build_loving_kindness_prompt(request: &MeditationRequest) -> String {
    let targets = if request.compassion_targets.is_empty() {
        "self and others".to_string()
    } else {
        request.compassion_targets.join(", ")
    };
    format!(
        "You are a meditation teacher. Create a {}-minute loving-kindness (metta) meditation \
         script focusing on cultivating compassion towards {}. Provide {} guidance. Use a {} \
         voice tone and include references to {} ambient sounds. Follow traditional \
         loving-kindness meditation practices.",
        request.session_length,
        targets,
        request.guidance_level,
        request.voice_preference,
        request.ambient_sound,
    )
}

fn build_mindfulness_emotion_prompt(request: &MeditationRequest) -> String {
    let emotions = if request.emotion_labels.is_empty() {
        "various emotions".to_string()
    } else {
        request.emotion_labels.join(", ")
    };
    format!(
        "You are a meditation teacher. Create a {}-minute mindfulness of emotions meditation \
         script, guiding the listener to observe and acknowledge emotions such as {}. Provide {} \
         guidance. The goal is {}. Use a {} voice tone and include references to {} ambient \
         sounds. Incorporate traditional mindfulness practices.",
        request.session_length,
        emotions,
        request.guidance_level,
        request.goal,
        request.voice_preference,
        request.ambient_sound,
    )
}

fn build_gratitude_practice_prompt(request: &MeditationRequest) -> String {
    let scope = if request.gratitude_scope.is_empty() {
        "self, others, and the world"
    } else {
        &request.gratitude_scope
    };
    format!(
        "You are a meditation teacher. Create a {}-minute gratitude meditation script focusing \
         on cultivating gratitude towards {}. Provide {} guidance. The goal is {}. Use a {} \
         voice tone and include references to {} ambient sounds. Incorporate traditional \
         gratitude meditation practices.",
        request.session_length,
        scope,
        request.guidance_level,
        request.goal,
        request.voice_preference,
        request.ambient_sound,
    )
}
