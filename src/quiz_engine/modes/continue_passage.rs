use rand::Rng;
use crate::quiz_engine::{
    config::EngineConfig,
    helpers::{assemble_choices, question, truncate},
    models::{Collection, Passage, Question},
};

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    collections: &[Collection],
    config: &EngineConfig,
) -> Vec<Question> {
    let mut questions = Vec::with_capacity(config.round_size);
    if collections.is_empty() {
        return questions;
    }

    let pool: Vec<&Passage> = collections.iter().flat_map(|c| &c.passages).collect();
    let len = config.continue_truncate_len;

    for slot in 0..config.round_size {
        let collection = &collections[slot % collections.len()];
        if collection.len() < 2 {
            continue;
        }

        let idx = rng.gen_range(0..=collection.len() - 2);
        let current = &collection.passages[idx];
        let next = &collection.passages[idx + 1];
        let correct = truncate(&next.text, len);

        // Compare full text so a repeated verse elsewhere is never offered as "wrong".
        let candidates = pool
            .iter()
            .filter(|p| p.text != next.text)
            .map(|p| truncate(&p.text, len));
        let Some(choices) = assemble_choices(rng, &correct, candidates) else {
            continue;
        };

        questions.push(question(
            questions.len(),
            current.text.clone(),
            Some(format!("{} : {}, what comes next?", collection.name, current.number)),
            choices,
            collection.name.clone(),
            current.audio_url.clone(),
        ));
    }

    questions.truncate(config.round_size);
    questions
}
