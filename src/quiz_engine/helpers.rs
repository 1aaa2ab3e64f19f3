//! Shared builder functions used by every mode generator.
//!
//! All modes finish a question the same way: collect distractor candidates,
//! drop anything that would read the same as the correct answer, draw three,
//! shuffle them in with the correct answer and record where it landed.

use rand::Rng;
use crate::quiz_engine::{
    models::{Question, CHOICE_COUNT},
    random::{sample_distinct, shuffle},
};

/// Marker appended to truncated display text.
pub const ELLIPSIS: &str = "...";

/// Cut `text` to `max_chars` characters, appending [`ELLIPSIS`] when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Build the four choices for a question.
///
/// Candidates equal to `correct` are dropped and the rest are de-duplicated
/// before three are drawn, so the result never holds two identical strings.
/// Returns `None` when fewer than three usable distractors exist.
pub fn assemble_choices<R: Rng + ?Sized>(
    rng: &mut R,
    correct: &str,
    candidates: impl IntoIterator<Item = String>,
) -> Option<([String; CHOICE_COUNT], usize)> {
    let mut pool: Vec<String> = Vec::new();
    for c in candidates {
        if c != correct && !pool.contains(&c) {
            pool.push(c);
        }
    }

    let distractors = sample_distinct(rng, &pool, CHOICE_COUNT - 1);
    if distractors.len() < CHOICE_COUNT - 1 {
        return None;
    }

    let mut ordered = Vec::with_capacity(CHOICE_COUNT);
    ordered.push(correct.to_string());
    ordered.extend(distractors);
    let choices = shuffle(rng, &ordered);
    let correct_index = choices.iter().position(|c| c == correct)?;
    let choices: [String; CHOICE_COUNT] = choices.try_into().ok()?;
    Some((choices, correct_index))
}

/// Assemble the final [`Question`] from all its parts.
pub fn question(
    id: usize,
    prompt: impl Into<String>,
    hint: Option<String>,
    (choices, correct_index): ([String; CHOICE_COUNT], usize),
    collection_name: impl Into<String>,
    audio_url: Option<String>,
) -> Question {
    Question {
        id,
        prompt: prompt.into(),
        hint,
        choices,
        correct_index,
        collection_name: collection_name.into(),
        audio_url,
    }
}
