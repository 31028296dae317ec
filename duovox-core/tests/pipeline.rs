use duovox_core::config::Config;
use duovox_core::error::Error;
use duovox_core::pipeline;
use duovox_core::script::parser::ContinuationPolicy;
use duovox_core::tts::mock::{MockBehavior, MockSynthesizer};

fn test_config() -> Config {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Config::new("test-key".to_string())
}

fn output_arg(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_round_trips_mock_audio_through_wav_wrapper() {
    let dir = tempfile::TempDir::new().unwrap();
    let pcm: Vec<u8> = (0u8..128).collect();
    let mock = MockSynthesizer::new(MockBehavior::FixedAudio {
        data: pcm.clone(),
        mime_type: "audio/L16;codec=pcm;rate=24000".to_string(),
    });

    let out = output_arg(&dir, "custom");
    let path = pipeline::run(
        "Alice: Hi\nBob: Hello",
        Some(&out),
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap();

    assert!(path.to_str().unwrap().ends_with("custom.wav"));
    assert_eq!(mock.call_count(), 1);

    // 44-byte canonical WAV header, then the mock payload byte-for-byte.
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len(), 44 + pcm.len());
    assert_eq!(&written[44..], &pcm[..]);
}

#[tokio::test]
async fn test_wav_payload_is_written_byte_for_byte() {
    let dir = tempfile::TempDir::new().unwrap();
    let payload = b"RIFF-already-a-wav-file".to_vec();
    let mock = MockSynthesizer::new(MockBehavior::FixedAudio {
        data: payload.clone(),
        mime_type: "audio/wav".to_string(),
    });

    let out = output_arg(&dir, "direct");
    let path = pipeline::run(
        "Alice: Hi\nBob: Hello",
        Some(&out),
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), payload);
}

#[tokio::test]
async fn test_one_speaker_fails_before_any_network_call() {
    let mock = MockSynthesizer::new(MockBehavior::Success);
    let err = pipeline::run(
        "John: Hi",
        None,
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::UnsupportedSpeakerCount { count: 1 }));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_three_speakers_fails_before_any_network_call() {
    let mock = MockSynthesizer::new(MockBehavior::Success);
    let err = pipeline::run(
        "A: 1\nB: 2\nC: 3",
        None,
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::UnsupportedSpeakerCount { count: 3 }));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_empty_script_fails_with_parse_error() {
    let mock = MockSynthesizer::new(MockBehavior::Success);
    let err = pipeline::run(
        "no dialogue here",
        None,
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().starts_with("parse error:"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_request_error_propagates_with_stable_prefix() {
    let dir = tempfile::TempDir::new().unwrap();
    let mock = MockSynthesizer::new(MockBehavior::AlwaysRequestError);

    let out = output_arg(&dir, "never");
    let err = pipeline::run(
        "Alice: Hi\nBob: Hello",
        Some(&out),
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
    assert!(err.to_string().starts_with("request failed:"));
    assert!(!dir.path().join("never.wav").exists());
}

#[tokio::test]
async fn test_timeout_is_distinct_from_other_request_failures() {
    let mock = MockSynthesizer::new(MockBehavior::AlwaysTimeout);

    let err = pipeline::run(
        "Alice: Hi\nBob: Hello",
        Some("/tmp/unused-duovox-test"),
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::RequestTimeout(_)));
    assert!(err.to_string().starts_with("request timed out:"));
}

#[tokio::test]
async fn test_reconfigured_mock_recovers_after_request_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let mock = MockSynthesizer::new(MockBehavior::AlwaysRequestError);

    let out = output_arg(&dir, "retry");
    let err = pipeline::run(
        "Alice: Hi\nBob: Hello",
        Some(&out),
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Request(_)));

    // A fresh run against the same mock succeeds once the behavior changes;
    // both calls were recorded.
    mock.set_behavior(MockBehavior::Success);
    let path = pipeline::run(
        "Alice: Hi\nBob: Hello",
        Some(&out),
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap();

    assert!(path.exists());
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_prompt_sent_to_synthesizer_names_both_voices() {
    let dir = tempfile::TempDir::new().unwrap();
    let mock = MockSynthesizer::new(MockBehavior::Success);

    let out = output_arg(&dir, "prompt-check");
    pipeline::run(
        "Alice: Hi\nBob: Hello",
        Some(&out),
        ContinuationPolicy::Append,
        &mock,
        &test_config(),
    )
    .await
    .unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model, "gemini-2.5-flash-preview-tts");
    assert!(request.prompt.contains("Alice: Hi"));
    assert!(request.prompt.contains("Bob: Hello"));
    assert_eq!(request.speaker_voices.entries().len(), 2);
    let (_, voice_a) = &request.speaker_voices.entries()[0];
    let (_, voice_b) = &request.speaker_voices.entries()[1];
    assert_ne!(voice_a, voice_b);
}
