//! Dialogue script parsing.
//!
//! A line is dialogue iff the text before its first colon, trimmed, is
//! non-empty: `Name: utterance`. What happens to other lines is an explicit
//! policy (see [`ContinuationPolicy`]), never an accident of the parser.

use tracing::debug;

use crate::error::Error;

/// One attributed utterance, in script order. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

/// What to do with a non-blank line that does not match `Name: text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuationPolicy {
    /// Treat the line as a soft-wrapped continuation of the previous
    /// utterance, joined with a single space. This is the default.
    #[default]
    Append,
    /// Drop the line.
    Skip,
}

/// Parses raw script text into the ordered dialogue sequence.
///
/// Blank lines are always dropped, as are non-matching lines appearing
/// before the first dialogue line (there is nothing to continue yet).
/// Fails if the script contains zero recognizable dialogue lines.
pub fn parse(text: &str, policy: ContinuationPolicy) -> Result<Vec<DialogueLine>, Error> {
    let mut lines: Vec<DialogueLine> = Vec::new();

    for raw in text.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some((speaker, utterance)) = split_dialogue(trimmed) {
            lines.push(DialogueLine {
                speaker: speaker.to_string(),
                text: utterance.to_string(),
            });
            continue;
        }

        match policy {
            ContinuationPolicy::Append => match lines.last_mut() {
                Some(last) => {
                    if !last.text.is_empty() {
                        last.text.push(' ');
                    }
                    last.text.push_str(trimmed);
                }
                None => {
                    debug!(line = trimmed, "dropping prose before first dialogue line");
                }
            },
            ContinuationPolicy::Skip => {
                debug!(line = trimmed, "skipping non-dialogue line");
            }
        }
    }

    if lines.is_empty() {
        return Err(Error::Parse(
            "script contains no recognizable dialogue lines (expected `Name: text`)".to_string(),
        ));
    }

    Ok(lines)
}

/// Splits on the first colon only, so utterances may themselves contain
/// colons.
fn split_dialogue(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, rest.trim()))
}
