use crate::error::MindfulError;
use crate::prompt::build_meditation_prompt;
use crate::request::MeditationRequest;
use crate::script::MeditationScript;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default OpenAI API base URL.
pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";

const MODEL: &str = "gpt-4";
const TEMPERATURE: f32 = 0.7;

const SYSTEM_PROMPT: &str = "You are an experienced meditation guide creating guided meditations. \
Format your response as JSON with two fields: \
- \"content\": the meditation script with [PAUSE X] markers for pauses in seconds \
- \"timing_markers\": a map of specific points in the meditation (\"intro\", \"body\", \"closing\")";

/// One chat-completion round trip: a system instruction and a user prompt
/// in, the first choice's message text out.
#[async_trait]
pub trait ChatCompletion {
    async fn complete(&self, system: &str, user: &str) -> Result<String, MindfulError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Chat-completion client for the OpenAI API.
pub struct OpenAiChat {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAiChat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiChat")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiChat {
    pub fn new(api_key: impl Into<String>) -> Result<Self, MindfulError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(MindfulError::MissingCredential("OpenAI API key"));
        }
        Ok(OpenAiChat {
            client: reqwest::Client::new(),
            api_key,
            base_url: OPENAI_API_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (proxies, local models).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String, MindfulError> {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: TEMPERATURE,
        };

        debug!("Sending chat completion request to {}", self.base_url);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MindfulError::UpstreamStatus { status, body });
        }

        let mut parsed: ChatResponse = response.json().await?;
        if parsed.choices.is_empty() {
            return Err(MindfulError::EmptyCompletion);
        }
        Ok(parsed.choices.remove(0).message.content)
    }
}

/// Generates meditation scripts: builds the prompt, makes one completion
/// call, parses the reply. No retries, no partial results.
#[derive(Debug)]
pub struct ScriptGenerator<C> {
    chat: C,
}

impl ScriptGenerator<OpenAiChat> {
    pub fn new(api_key: impl Into<String>) -> Result<Self, MindfulError> {
        Ok(ScriptGenerator { chat: OpenAiChat::new(api_key)? })
    }
}

impl<C: ChatCompletion> ScriptGenerator<C> {
    pub fn with_chat(chat: C) -> Self {
        ScriptGenerator { chat }
    }

    pub async fn generate(
        &self,
        request: &MeditationRequest,
    ) -> Result<MeditationScript, MindfulError> {
        let prompt = build_meditation_prompt(request)?;
        let content = self.chat.complete(SYSTEM_PROMPT, &prompt).await?;
        parse_script(&content)
    }
}

fn parse_script(content: &str) -> Result<MeditationScript, MindfulError> {
    serde_json::from_str(content).map_err(|source| MindfulError::ScriptParse {
        source,
        raw: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::Technique;
    use std::sync::Mutex;

    /// Returns canned replies (or errors) in place of the real API.
    struct MockChat {
        replies: Mutex<Vec<Result<String, MindfulError>>>,
        seen_prompts: Mutex<Vec<(String, String)>>,
    }

    impl MockChat {
        fn replying(reply: Result<String, MindfulError>) -> Self {
            MockChat {
                replies: Mutex::new(vec![reply]),
                seen_prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatCompletion for MockChat {
        async fn complete(&self, system: &str, user: &str) -> Result<String, MindfulError> {
            self.seen_prompts
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            self.replies.lock().unwrap().remove(0)
        }
    }

    fn request() -> MeditationRequest {
        MeditationRequest::new(Technique::FocusedAttention, 10)
    }

    #[tokio::test]
    async fn parses_a_well_formed_reply() {
        let reply = r#"{"content":"Breathe in. [PAUSE 5] Breathe out.","timing_markers":{"intro":"0s","body":"10s","closing":"60s"}}"#;
        let generator = ScriptGenerator::with_chat(MockChat::replying(Ok(reply.to_string())));

        let script = generator.generate(&request()).await.unwrap();
        assert_eq!(script.content, "Breathe in. [PAUSE 5] Breathe out.");
        assert_eq!(script.timing_markers["intro"], "0s");
        assert_eq!(script.timing_markers["body"], "10s");
        assert_eq!(script.timing_markers["closing"], "60s");
    }

    #[tokio::test]
    async fn sends_system_instruction_and_built_prompt() {
        let reply = r#"{"content":"x","timing_markers":{}}"#;
        let mock = MockChat::replying(Ok(reply.to_string()));
        let generator = ScriptGenerator::with_chat(mock);

        generator.generate(&request()).await.unwrap();
        let seen = generator.chat.seen_prompts.lock().unwrap();
        let (system, user) = &seen[0];
        assert!(system.contains("meditation guide"));
        assert!(user.contains("focused attention"));
        assert!(user.contains("the breath"));
    }

    #[tokio::test]
    async fn malformed_reply_fails_with_the_raw_text() {
        let generator = ScriptGenerator::with_chat(MockChat::replying(Ok("not json".to_string())));

        let err = generator.generate(&request()).await.unwrap_err();
        match err {
            MindfulError::ScriptParse { raw, .. } => assert_eq!(raw, "not json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_timing_markers_is_a_parse_failure() {
        let reply = r#"{"content":"just text"}"#;
        let generator = ScriptGenerator::with_chat(MockChat::replying(Ok(reply.to_string())));

        let err = generator.generate(&request()).await.unwrap_err();
        assert!(matches!(err, MindfulError::ScriptParse { .. }));
    }

    #[tokio::test]
    async fn upstream_failure_is_surfaced_without_parsing() {
        let upstream = MindfulError::UpstreamStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        let generator = ScriptGenerator::with_chat(MockChat::replying(Err(upstream)));

        let err = generator.generate(&request()).await.unwrap_err();
        match err {
            MindfulError::UpstreamStatus { status, body } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_an_empty_api_key() {
        let err = ScriptGenerator::new("").unwrap_err();
        assert!(matches!(err, MindfulError::MissingCredential("OpenAI API key")));
    }

    #[tokio::test]
    async fn openai_chat_posts_to_a_custom_base_url() {
        let reply = r#"{"choices":[{"message":{"content":"the script"}}]}"#;
        let (base_url, received) =
            crate::testing::serve_once("HTTP/1.1 200 OK", "application/json", reply.into()).await;

        let chat = OpenAiChat::new("key").unwrap().with_base_url(base_url);
        let content = chat.complete("system text", "user text").await.unwrap();
        assert_eq!(content, "the script");

        let raw = received.await.unwrap();
        assert!(raw.starts_with("POST /chat/completions"));
        assert!(raw.contains("\"model\":\"gpt-4\""));
        assert!(raw.contains("\"temperature\":0.7"));
        assert!(raw.contains("user text"));
    }

    #[tokio::test]
    async fn openai_chat_reports_non_success_status() {
        let (base_url, _received) = crate::testing::serve_once(
            "HTTP/1.1 429 Too Many Requests",
            "text/plain",
            "rate limited".into(),
        )
        .await;

        let chat = OpenAiChat::new("key").unwrap().with_base_url(base_url);
        let err = chat.complete("system", "user").await.unwrap_err();
        match err {
            MindfulError::UpstreamStatus { status, body } => {
                assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
