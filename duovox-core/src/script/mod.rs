pub mod parser;
pub mod registry;

pub use parser::{ContinuationPolicy, DialogueLine};
pub use registry::extract_speakers;
