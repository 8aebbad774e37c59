use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(name = "mindful", about = "Tool to create mindfulness meditations with")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a meditation script
    Script,

    /// Convert a script text file to speech
    Speak {
        /// Text file containing the script to synthesize
        #[clap(long)]
        input: String,

        #[clap(long, default_value = "output_audio.mp3")]
        out: String,

        /// ElevenLabs voice id to synthesize with
        #[clap(long)]
        voice_id: String,
    },
}
