use rand::Rng;
use crate::quiz_engine::{
    config::EngineConfig,
    helpers::{assemble_choices, question},
    models::{Collection, Question},
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

    for slot in 0..config.round_size {
        // Cycle so every sampled collection is asked about.
        let correct = &collections[slot % collections.len()];
        if correct.is_empty() {
            continue;
        }

        // Opening passages are the ones a beginner is most likely to know.
        let window = correct.len().min(config.opening_window);
        let passage = &correct.passages[rng.gen_range(0..window)];

        let candidates = collections
            .iter()
            .filter(|c| c.id != correct.id)
            .map(|c| c.name.clone());
        let Some(choices) = assemble_choices(rng, &correct.name, candidates) else {
            continue;
        };

        questions.push(question(
            questions.len(),
            passage.text.clone(),
            Some(format!("Verse {}", passage.number)),
            choices,
            correct.name.clone(),
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
    fn full_round_with_collection_names_as_answers() {
        let sampled = collections(&[7, 3, 12, 5, 8, 4, 6, 20]);
        let config = EngineConfig::default();
        for seed in [1u64, 42, 999] {
            let mut rng = StdRng::seed_from_u64(seed);
            let qs = generate(&mut rng, &sampled, &config);
            assert_eq!(qs.len(), 10);
            for (i, q) in qs.iter().enumerate() {
                assert_eq!(q.id, i);
                assert_eq!(q.correct_choice(), q.collection_name);
                let source = sampled.iter().find(|c| c.name == q.collection_name).unwrap();
                let passage = source.passages.iter().find(|p| p.text == q.prompt).unwrap();
                assert!(passage.number <= 5, "passage outside the opening window");
                for choice in &q.choices {
                    assert!(sampled.iter().any(|c| &c.name == choice));
                }
            }
        }
    }

    #[test]
    fn slots_cycle_through_sampled_collections() {
        let sampled = collections(&[5, 5, 5, 5, 5]);
        let mut rng = StdRng::seed_from_u64(3);
        let qs = generate(&mut rng, &sampled, &EngineConfig::default());
        let names: Vec<&str> = qs.iter().map(|q| q.collection_name.as_str()).collect();
        assert_eq!(names[0], names[5]);
        assert_eq!(names[4], names[9]);
        assert_ne!(names[0], names[1]);
    }

    #[test]
    fn fewer_than_four_collections_cannot_make_questions() {
        let sampled = collections(&[5, 5, 5]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&mut rng, &sampled, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn empty_collections_are_skipped() {
        let sampled = collections(&[5, 0, 5, 5, 5]);
        let mut rng = StdRng::seed_from_u64(3);
        let qs = generate(&mut rng, &sampled, &EngineConfig::default());
        assert_eq!(qs.len(), 8);
        assert!(qs.iter().all(|q| q.collection_name != "Collection 101"));
    }
}
