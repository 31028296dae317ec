//! End-to-end synthesis run.
//!
//! Stages run in order: parse, speaker extraction, voice assignment,
//! request building, synthesis, write. The first failing stage aborts the
//! run; nothing retries. The speaker-count check happens before any
//! network call is made.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::output;
use crate::script::parser::{self, ContinuationPolicy};
use crate::script::registry;
use crate::tts::provider::SpeechSynthesizer;
use crate::tts::request;
use crate::voice::assign::{assign_voices, resolve_speakers};
use crate::voice::catalog::VoiceCatalog;
use crate::voice::gender::NameGenderIndex;

/// Runs the whole pipeline and returns the path of the written WAV file.
pub async fn run(
    script_text: &str,
    output_name: Option<&str>,
    policy: ContinuationPolicy,
    synthesizer: &dyn SpeechSynthesizer,
    config: &Config,
) -> Result<PathBuf, Error> {
    let lines = parser::parse(script_text, policy)?;
    debug!(lines = lines.len(), "parsed script");

    let names = registry::extract_speakers(&lines)?;
    info!(speakers = ?names, "resolved speakers");

    let index = NameGenderIndex::builtin();
    let speakers = resolve_speakers(&names, &index);
    let catalog = VoiceCatalog::builtin();
    let assignment = assign_voices(&speakers, &catalog)?;
    for (speaker, voice) in assignment.entries() {
        info!(speaker = %speaker, voice = %voice, "assigned voice");
    }

    let synthesis_request = request::build_synthesis_request(&lines, &assignment, &config.model);
    info!(synthesizer = synthesizer.name(), model = %config.model, "synthesizing audio");
    let audio = synthesizer.synthesize(&synthesis_request).await?;

    let path = output::resolve_output_path(output_name, &names);
    let bytes = output::wav::to_wav_bytes(&audio)?;
    output::write_audio(&path, &bytes)?;

    Ok(path)
}
