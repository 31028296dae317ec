//! Mock synthesizer for tests. Records every request it receives so tests
//! can assert that failing pipelines never reach the network stage.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use crate::error::Error;
use crate::tts::provider::SpeechSynthesizer;
use crate::tts::types::{AudioData, SynthesisRequest};

/// Mock behavior for the mock synthesizer
#[derive(Debug, Clone, Default)]
pub enum MockBehavior {
    /// Return a small silent PCM payload
    #[default]
    Success,
    /// Return the given bytes with the given mime type
    FixedAudio { data: Vec<u8>, mime_type: String },
    /// Always fail with a request error
    AlwaysRequestError,
    /// Always fail with a timeout
    AlwaysTimeout,
}

#[derive(Clone, Default)]
pub struct MockSynthesizer {
    behavior: Arc<Mutex<MockBehavior>>,
    requests: Arc<Mutex<Vec<SynthesisRequest>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    /// Number of synthesize calls made against this mock.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioData, Error> {
        self.requests.lock().unwrap().push(request.clone());

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Success => Ok(AudioData {
                // 100ms of 16-bit silence at 24kHz
                data: vec![0u8; 4800],
                mime_type: "audio/L16;codec=pcm;rate=24000".to_string(),
            }),
            MockBehavior::FixedAudio { data, mime_type } => Ok(AudioData { data, mime_type }),
            MockBehavior::AlwaysRequestError => {
                Err(Error::Request(anyhow!("mock request error")))
            }
            MockBehavior::AlwaysTimeout => {
                Err(Error::RequestTimeout(anyhow!("mock timeout")))
            }
        }
    }
}
