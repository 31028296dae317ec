use crate::voice::assign::VoiceAssignment;

/// Payload for one synthesis call. Built once, sent once; no retries are
/// modeled anywhere in the pipeline.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// Full script text with an instruction header and explicit speaker
    /// labels, so the model can align segments to voices.
    pub prompt: String,
    pub speaker_voices: VoiceAssignment,
    pub model: String,
}

/// Raw audio returned by the API, before any container handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// PCM parameters recovered from a mime type such as
/// `audio/L16;codec=pcm;rate=24000`. The API returns headerless PCM, so
/// these drive the WAV container synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub channels: u16,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            sample_rate: 24_000,
            bits_per_sample: 16,
            channels: 1,
        }
    }
}

impl PcmFormat {
    /// Parses `rate=` and the `audio/L<bits>` subtype out of the mime type.
    /// Unparsable parameters keep their defaults (24 kHz, 16-bit, mono).
    pub fn from_mime_type(mime_type: &str) -> Self {
        let mut format = Self::default();

        for param in mime_type.split(';') {
            let param = param.trim();
            if let Some(rate) = param.to_ascii_lowercase().strip_prefix("rate=") {
                if let Ok(rate) = rate.parse::<u32>() {
                    format.sample_rate = rate;
                }
            } else if let Some(bits) = param.strip_prefix("audio/L") {
                if let Ok(bits) = bits.parse::<u16>() {
                    format.bits_per_sample = bits;
                }
            }
        }

        format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_gemini_mime_type() {
        let format = PcmFormat::from_mime_type("audio/L16;codec=pcm;rate=24000");
        assert_eq!(
            format,
            PcmFormat {
                sample_rate: 24_000,
                bits_per_sample: 16,
                channels: 1
            }
        );
    }

    #[test]
    fn test_non_default_rate_and_width() {
        let format = PcmFormat::from_mime_type("audio/L24;rate=48000");
        assert_eq!(format.sample_rate, 48_000);
        assert_eq!(format.bits_per_sample, 24);
    }

    #[test]
    fn test_unparsable_parameters_keep_defaults() {
        let format = PcmFormat::from_mime_type("audio/Lxx;rate=abc");
        assert_eq!(format, PcmFormat::default());
    }

    #[test]
    fn test_empty_mime_type_keeps_defaults() {
        assert_eq!(PcmFormat::from_mime_type(""), PcmFormat::default());
    }
}
