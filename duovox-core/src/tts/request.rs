//! Prompt construction and the Gemini `generateContent` wire types.
//!
//! Pure data transformation: no network I/O happens here.

use serde::Serialize;

use crate::script::parser::DialogueLine;
use crate::tts::types::SynthesisRequest;
use crate::voice::assign::VoiceAssignment;

/// Builds the synthesis payload from the parsed script and the voice
/// assignment. The prompt re-renders the dialogue with explicit
/// `Speaker: text` labels under a fixed instruction header so the model
/// aligns text segments to voices.
pub fn build_synthesis_request(
    lines: &[DialogueLine],
    assignment: &VoiceAssignment,
    model: &str,
) -> SynthesisRequest {
    let mut prompt = String::from(
        "Please read this script as a conversation using these distinct voices:\n",
    );
    for (speaker, voice) in assignment.entries() {
        prompt.push_str(&format!("- Use voice {voice} for {speaker}\n"));
    }
    prompt.push_str(
        "\nApply consistent voices throughout the script, using the correct voice \
         for each speaker.\n\n===SCRIPT===\n",
    );
    for line in lines {
        prompt.push_str(&format!("{}: {}\n", line.speaker, line.text));
    }

    SynthesisRequest {
        prompt,
        speaker_voices: assignment.clone(),
        model: model.to_string(),
    }
}

/// Converts a [`SynthesisRequest`] into the JSON body the API expects.
pub fn to_wire(request: &SynthesisRequest) -> GenerateContentRequest {
    let speaker_voice_configs = request
        .speaker_voices
        .entries()
        .iter()
        .map(|(speaker, voice)| SpeakerVoiceConfig {
            speaker: speaker.clone(),
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice.clone(),
                },
            },
        })
        .collect();

    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: request.prompt.clone(),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: 1.0,
            response_modalities: vec!["AUDIO".to_string()],
            speech_config: SpeechConfig {
                multi_speaker_voice_config: MultiSpeakerVoiceConfig {
                    speaker_voice_configs,
                },
            },
        },
    }
}

// Gemini generateContent wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub response_modalities: Vec<String>,
    pub speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub multi_speaker_voice_config: MultiSpeakerVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSpeakerVoiceConfig {
    pub speaker_voice_configs: Vec<SpeakerVoiceConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerVoiceConfig {
    pub speaker: String,
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}
