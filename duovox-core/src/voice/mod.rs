pub mod assign;
pub mod catalog;
pub mod gender;

pub use assign::{assign_voices, resolve_speakers, Speaker, VoiceAssignment};
pub use catalog::{VoiceCatalog, VoiceProfile};
pub use gender::{Gender, NameGenderIndex};
