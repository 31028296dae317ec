use crate::error::Error;
use crate::tts::types::{AudioData, SynthesisRequest};

/// Seam between the pipeline and the remote TTS capability. One call per
/// run; implementations never retry.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioData, Error>;
}
