//! Distinct speaker extraction.

use crate::error::Error;
use crate::script::parser::DialogueLine;

/// Returns the distinct speaker names in first-appearance order. Pure;
/// names compare by exact string match.
///
/// The tool's supported mode is exactly two speakers, a product constraint
/// rather than an architectural one: this function and the voice heuristic
/// would generalize to N speakers with an N-way balanced assignment.
pub fn extract_speakers(lines: &[DialogueLine]) -> Result<Vec<String>, Error> {
    let mut seen: Vec<String> = Vec::new();
    for line in lines {
        if !seen.iter().any(|name| name == &line.speaker) {
            seen.push(line.speaker.clone());
        }
    }

    if seen.len() != 2 {
        return Err(Error::UnsupportedSpeakerCount { count: seen.len() });
    }

    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(speaker: &str, text: &str) -> DialogueLine {
        DialogueLine {
            speaker: speaker.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_two_speakers_in_first_appearance_order() {
        let lines = vec![
            line("Bob", "Hello"),
            line("Alice", "Hi"),
            line("Bob", "How are you?"),
        ];
        let speakers = extract_speakers(&lines).unwrap();
        assert_eq!(speakers, vec!["Bob".to_string(), "Alice".to_string()]);
    }

    #[test]
    fn test_names_compare_by_exact_match() {
        // "Bob" and "bob" are different speakers, which trips the count check.
        let lines = vec![line("Bob", "Hello"), line("bob", "Hi"), line("Eve", "Hey")];
        let err = extract_speakers(&lines).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSpeakerCount { count: 3 }));
    }

    #[test]
    fn test_one_speaker_is_unsupported() {
        let lines = vec![line("John", "Hi")];
        let err = extract_speakers(&lines).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSpeakerCount { count: 1 }));
        assert!(err.to_string().starts_with("unsupported speaker count:"));
    }

    #[test]
    fn test_three_speakers_is_unsupported() {
        let lines = vec![line("A", "1"), line("B", "2"), line("C", "3")];
        let err = extract_speakers(&lines).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSpeakerCount { count: 3 }));
    }
}
