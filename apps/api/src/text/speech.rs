//! Text-to-speech preparation.

/// Punctuation that speech engines use for pacing.
const SPOKEN_PUNCTUATION: &str = ".,!?;:'\"-";

/// Drops symbols a speech engine would read aloud or choke on and collapses whitespace.
pub fn prepare_for_speech(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|&c| {
            c.is_alphanumeric()
                || c == '_'
                || c.is_whitespace()
                || SPOKEN_PUNCTUATION.contains(c)
        })
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
