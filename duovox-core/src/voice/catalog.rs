//! The fixed catalog of Gemini prebuilt voices.
//!
//! Voice names, style tags, and gender tags come from the prebuilt voice
//! set the API offers. The catalog is an immutable structure loaded at
//! startup; nothing mutates it at runtime.

use crate::voice::gender::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    pub name: &'static str,
    pub style: &'static str,
    pub gender: Gender,
}

const fn voice(name: &'static str, style: &'static str, gender: Gender) -> VoiceProfile {
    VoiceProfile {
        name,
        style,
        gender,
    }
}

const BUILTIN_VOICES: &[VoiceProfile] = &[
    voice("Zephyr", "Bright", Gender::Female),
    voice("Puck", "Upbeat", Gender::Male),
    voice("Charon", "Informative", Gender::Male),
    voice("Kore", "Firm", Gender::Female),
    voice("Fenrir", "Excitable", Gender::Male),
    voice("Leda", "Youthful", Gender::Female),
    voice("Orus", "Firm", Gender::Male),
    voice("Aoede", "Breezy", Gender::Female),
    voice("Callirrhoe", "Easy-going", Gender::Female),
    voice("Autonoe", "Bright", Gender::Female),
    voice("Enceladus", "Breathy", Gender::Male),
    voice("Iapetus", "Clear", Gender::Male),
    voice("Umbriel", "Easy-going", Gender::Male),
    voice("Algieba", "Smooth", Gender::Male),
    voice("Despina", "Smooth", Gender::Female),
    voice("Erinome", "Clear", Gender::Female),
    voice("Algenib", "Gravelly", Gender::Male),
    voice("Rasalgethi", "Informative", Gender::Male),
    voice("Laomedeia", "Upbeat", Gender::Female),
    voice("Achernar", "Soft", Gender::Female),
    voice("Alnilam", "Firm", Gender::Male),
    voice("Schedar", "Even", Gender::Male),
    voice("Gacrux", "Mature", Gender::Female),
    voice("Pulcherrima", "Forward", Gender::Female),
    voice("Achird", "Friendly", Gender::Male),
    voice("Zubenelgenubi", "Casual", Gender::Male),
    voice("Vindemiatrix", "Gentle", Gender::Female),
    voice("Sadachbia", "Lively", Gender::Male),
    voice("Sadaltager", "Knowledgeable", Gender::Male),
    voice("Sulafat", "Warm", Gender::Female),
];

#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<VoiceProfile>,
}

impl VoiceCatalog {
    /// The full prebuilt voice set, in the API's published order. Selection
    /// falls back to catalog order, so the order here is load-bearing for
    /// deterministic output.
    pub fn builtin() -> Self {
        Self {
            voices: BUILTIN_VOICES.to_vec(),
        }
    }

    pub fn new(voices: Vec<VoiceProfile>) -> Self {
        Self { voices }
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn voices(&self) -> &[VoiceProfile] {
        &self.voices
    }

    /// The nth voice (0-based) carrying the given gender tag, in catalog
    /// order.
    pub fn nth_with_gender(&self, gender: Gender, n: usize) -> Option<&VoiceProfile> {
        self.voices.iter().filter(|v| v.gender == gender).nth(n)
    }

    pub fn gender_of(&self, voice_name: &str) -> Option<Gender> {
        self.voices
            .iter()
            .find(|v| v.name == voice_name)
            .map(|v| v.gender)
    }
}
