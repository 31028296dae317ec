//! Voice selection for the two resolved speakers.
//!
//! Selection rules, in order:
//! - both genders known and different: the first catalog voice tagged with
//!   each speaker's gender;
//! - both known and identical: the first two catalog voices tagged with
//!   that gender;
//! - either unknown: one male and one female voice, first speaker male,
//!   in catalog order.
//!
//! Every branch is deterministic and the two chosen voices are always
//! distinct.

use tracing::debug;

use crate::error::Error;
use crate::voice::catalog::{VoiceCatalog, VoiceProfile};
use crate::voice::gender::{Gender, NameGenderIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    pub name: String,
    pub gender: Gender,
}

/// Mapping from speaker name to chosen voice, in speaker order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceAssignment {
    entries: Vec<(String, String)>,
}

impl VoiceAssignment {
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn voice_for(&self, speaker: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == speaker)
            .map(|(_, voice)| voice.as_str())
    }
}

/// Attaches an inferred gender to each extracted speaker name.
pub fn resolve_speakers(names: &[String], index: &NameGenderIndex) -> Vec<Speaker> {
    names
        .iter()
        .map(|name| {
            let gender = index.infer(name);
            debug!(speaker = %name, ?gender, "inferred speaker gender");
            Speaker {
                name: name.clone(),
                gender,
            }
        })
        .collect()
}

pub fn assign_voices(
    speakers: &[Speaker],
    catalog: &VoiceCatalog,
) -> Result<VoiceAssignment, Error> {
    if catalog.is_empty() {
        // Practically unreachable with the builtin catalog; kept because
        // the error taxonomy names it.
        return Err(Error::NoVoiceAvailable("voice catalog is empty".to_string()));
    }

    let [first, second] = speakers else {
        return Err(Error::UnsupportedSpeakerCount {
            count: speakers.len(),
        });
    };

    let (voice_a, voice_b) = match (first.gender, second.gender) {
        (Gender::Male, Gender::Female) => pick_pair(catalog, Gender::Male, Gender::Female)?,
        (Gender::Female, Gender::Male) => pick_pair(catalog, Gender::Female, Gender::Male)?,
        (Gender::Male, Gender::Male) => pick_pair(catalog, Gender::Male, Gender::Male)?,
        (Gender::Female, Gender::Female) => pick_pair(catalog, Gender::Female, Gender::Female)?,
        // At least one unknown: fall back to one male + one female voice.
        _ => pick_pair(catalog, Gender::Male, Gender::Female)?,
    };

    Ok(VoiceAssignment {
        entries: vec![
            (first.name.clone(), voice_a.name.to_string()),
            (second.name.clone(), voice_b.name.to_string()),
        ],
    })
}

/// First catalog voice of `gender_a` and first of `gender_b`; when the two
/// genders coincide, the second pick advances to the next voice of that
/// gender so the pair stays distinct.
fn pick_pair(
    catalog: &VoiceCatalog,
    gender_a: Gender,
    gender_b: Gender,
) -> Result<(VoiceProfile, VoiceProfile), Error> {
    let a = catalog
        .nth_with_gender(gender_a, 0)
        .ok_or_else(|| no_voice(gender_a))?;
    let b_index = usize::from(gender_a == gender_b);
    let b = catalog
        .nth_with_gender(gender_b, b_index)
        .ok_or_else(|| no_voice(gender_b))?;
    Ok((*a, *b))
}

fn no_voice(gender: Gender) -> Error {
    Error::NoVoiceAvailable(format!("catalog has no unused voice tagged {gender:?}"))
}
