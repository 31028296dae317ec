pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod script;
pub mod tts;
pub mod voice;

// Public library API - the CLI consumes the pipeline through these; if you
// are using duovox as a library, these are the types to reach for.
pub use config::Config;
pub use error::Error;
pub use script::parser::{ContinuationPolicy, DialogueLine};
pub use tts::provider::SpeechSynthesizer;
