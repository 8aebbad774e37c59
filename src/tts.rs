use crate::error::MindfulError;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Default ElevenLabs text-to-speech base URL; the voice id is appended per
/// request.
pub const ELEVENLABS_API_BASE_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        VoiceSettings { stability: 0.75, similarity_boost: 0.75 }
    }
}

/// ElevenLabs text-to-speech client. Endpoint, voice and key are
/// configuration inputs supplied at construction.
pub struct TtsClient {
    client: reqwest::Client,
    api_key: String,
    voice_id: String,
    base_url: String,
    voice_settings: VoiceSettings,
}

impl std::fmt::Debug for TtsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsClient")
            .field("base_url", &self.base_url)
            .field("voice_id", &self.voice_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TtsClient {
    pub fn new(
        api_key: impl Into<String>,
        voice_id: impl Into<String>,
    ) -> Result<Self, MindfulError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(MindfulError::MissingCredential("ElevenLabs API key"));
        }
        let voice_id = voice_id.into();
        if voice_id.is_empty() {
            return Err(MindfulError::MissingCredential("ElevenLabs voice id"));
        }
        Ok(TtsClient {
            client: reqwest::Client::new(),
            api_key,
            voice_id,
            base_url: ELEVENLABS_API_BASE_URL.to_string(),
            voice_settings: VoiceSettings::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_voice_settings(mut self, voice_settings: VoiceSettings) -> Self {
        self.voice_settings = voice_settings;
        self
    }

    /// Converts `text` to speech, returning the raw audio bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, MindfulError> {
        let payload = TtsRequest { text, voice_settings: self.voice_settings };

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, self.voice_id))
            .header("xi-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MindfulError::UpstreamStatus { status, body });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Converts `text` to speech and writes the audio to `path`.
    pub async fn synthesize_to_file(
        &self,
        text: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), MindfulError> {
        let audio = self.synthesize(text).await?;
        tokio::fs::write(path.as_ref(), &audio).await?;
        info!("Audio written to {} ({} bytes)", path.as_ref().display(), audio.len());
        Ok(())
    }
}
