use clap::Parser;
use tracing::{info, warn};

mod args;
mod error;
mod generator;
mod prompt;
mod request;
mod script;
mod technique;
#[cfg(test)]
mod testing;
mod tts;
mod utils;

use args::{Args, Command};
use generator::ScriptGenerator;
use request::MeditationRequest;
use technique::Technique;
use tts::TtsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info") // set to "debug" for more logs
        .init();

    let args = Args::parse();

    match utils::load_env() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => warn!("No .env file loaded: {}", e),
    }

    match args.command {
        Command::Script => run_script().await,
        Command::Speak { input, out, voice_id } => run_speak(&input, &out, &voice_id).await,
    }
}

async fn run_script() -> anyhow::Result<()> {
    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    let generator = ScriptGenerator::new(api_key)?;

    let mut request = MeditationRequest::new(Technique::FocusedAttention, 10);
    request.focus_object = "breath".to_string();
    request.guidance_level = "brief".to_string();
    request.goal = "relaxation".to_string();

    info!(
        "Generating a {}-minute {} meditation script",
        request.session_length, request.technique
    );
    let script = generator.generate(&request).await?;
    println!("{}", script.render());
    Ok(())
}

async fn run_speak(input: &str, out: &str, voice_id: &str) -> anyhow::Result<()> {
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap_or_default();
    let client = TtsClient::new(api_key, voice_id)?;

    let text = tokio::fs::read_to_string(input).await?;
    info!("Synthesizing {} chars of script text", text.len());
    client.synthesize_to_file(&text, out).await?;
    Ok(())
}
