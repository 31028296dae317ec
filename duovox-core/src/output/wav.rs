//! WAV container synthesis for headerless PCM payloads.
//!
//! The API usually returns raw 16-bit little-endian PCM tagged with an
//! `audio/L16;...` mime type. Wrapping that in a canonical 44-byte WAV
//! header is all that stands between the response and a playable file;
//! payloads already tagged `audio/wav` pass through byte-for-byte.

use std::io::Cursor;

use anyhow::anyhow;

use crate::error::Error;
use crate::tts::types::{AudioData, PcmFormat};

pub fn to_wav_bytes(audio: &AudioData) -> Result<Vec<u8>, Error> {
    if is_wav(&audio.mime_type) {
        return Ok(audio.data.clone());
    }

    let format = PcmFormat::from_mime_type(&audio.mime_type);
    if format.bits_per_sample != 16 {
        return Err(Error::Write(anyhow!(
            "unsupported PCM sample width: {} bits (mime type {})",
            format.bits_per_sample,
            audio.mime_type
        )));
    }

    let spec = hound::WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)
        .map_err(|e| Error::Write(anyhow!("failed to start WAV container: {e}")))?;

    // Odd trailing byte (half a sample) is dropped.
    for sample in audio.data.chunks_exact(2) {
        writer
            .write_sample(i16::from_le_bytes([sample[0], sample[1]]))
            .map_err(|e| Error::Write(anyhow!("failed to write WAV sample: {e}")))?;
    }
    writer
        .finalize()
        .map_err(|e| Error::Write(anyhow!("failed to finalize WAV container: {e}")))?;

    Ok(cursor.into_inner())
}

fn is_wav(mime_type: &str) -> bool {
    let lower = mime_type.to_ascii_lowercase();
    lower == "audio/wav" || lower.starts_with("audio/wav;")
}
