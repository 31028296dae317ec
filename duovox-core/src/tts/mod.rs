pub mod gemini;
pub mod mock;
pub mod provider;
pub mod request;
pub mod types;

pub use gemini::GeminiSynthesizer;
pub use provider::SpeechSynthesizer;
pub use types::{AudioData, PcmFormat, SynthesisRequest};
