use rand::Rng;
use crate::quiz_engine::{
    config::EngineConfig,
    helpers::{assemble_choices, question, truncate},
    models::{Collection, Passage, Question},
    random::sample_distinct,
};

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    collections: &[Collection],
    config: &EngineConfig,
) -> Vec<Question> {
    let pool: Vec<&Passage> = collections.iter().flat_map(|c| &c.passages).collect();
    let selected = sample_distinct(rng, &pool, config.round_size);
    let len = config.meaning_truncate_len;

    let mut questions = Vec::with_capacity(selected.len());
    for passage in selected {
        let correct = truncate(&passage.translation, len);
        let candidates = pool
            .iter()
            .filter(|p| p.translation != passage.translation)
            .map(|p| truncate(&p.translation, len));
        let Some(choices) = assemble_choices(rng, &correct, candidates) else {
            continue;
        };

        questions.push(question(
            questions.len(),
            passage.text.clone(),
            Some(passage.collection_name.clone()),
            choices,
            passage.collection_name.clone(),
            passage.audio_url.clone(),
        ));
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::fixtures::collections;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn asks_distinct_passages_for_their_translation() {
        let sampled = collections(&[4, 6, 3, 5, 8, 2]);
        let mut rng = StdRng::seed_from_u64(11);
        let qs = generate(&mut rng, &sampled, &EngineConfig::default());
        assert_eq!(qs.len(), 10);

        let mut prompts: Vec<&str> = qs.iter().map(|q| q.prompt.as_str()).collect();
        prompts.sort_unstable();
        prompts.dedup();
        assert_eq!(prompts.len(), 10, "a passage was asked twice");

        for q in &qs {
            let passage = sampled
                .iter()
                .flat_map(|c| &c.passages)
                .find(|p| p.text == q.prompt)
                .unwrap();
            assert_eq!(q.correct_choice(), passage.translation);
            assert_eq!(q.hint.as_deref(), Some(passage.collection_name.as_str()));
        }
    }

    #[test]
    fn small_pool_gives_a_short_round() {
        let sampled = collections(&[2, 3]);
        let mut rng = StdRng::seed_from_u64(11);
        let qs = generate(&mut rng, &sampled, &EngineConfig::default());
        assert_eq!(qs.len(), 5);
    }

    #[test]
    fn shared_translation_is_never_a_distractor() {
        let mut sampled = collections(&[3, 3]);
        sampled[1].passages[0].translation = sampled[0].passages[0].translation.clone();
        for seed in 0..10u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for q in generate(&mut rng, &sampled, &EngineConfig::default()) {
                let unique: std::collections::HashSet<_> = q.choices.iter().collect();
                assert_eq!(unique.len(), 4);
            }
        }
    }
}
