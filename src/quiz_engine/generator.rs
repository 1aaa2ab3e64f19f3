use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::quiz_engine::{
    config::EngineConfig,
    corpus::CorpusSource,
    error::QuizError,
    models::{Collection, GameMode, Question},
    modes,
    sampler::{draw_distinct_ids, fetch_distinct_collections},
};

/// Core dispatch: routes already-sampled collections to the mode's generator.
pub fn generate_questions<R: Rng + ?Sized>(
    rng: &mut R,
    mode: GameMode,
    collections: &[Collection],
    config: &EngineConfig,
) -> Vec<Question> {
    match mode {
        GameMode::IdentifySource =>
            modes::source_collection::generate(rng, collections, config),

        GameMode::ContinuePassage =>
            modes::continue_passage::generate(rng, collections, config),

        GameMode::IdentifyMeaning =>
            modes::meaning::generate(rng, collections, config),
    }
}

/// Sample the corpus and build one round of questions for `mode`.
///
/// Fails without a partial result when any fetch fails or when the sampled
/// material cannot produce a single question.
pub async fn generate_round<C: CorpusSource>(
    corpus: &C,
    config: &EngineConfig,
    mode: GameMode,
    mut rng: StdRng,
) -> Result<Vec<Question>, QuizError> {
    let ids = draw_distinct_ids(&mut rng, &config.allowed_collections, config.collections_for(mode))?;
    let collections = fetch_distinct_collections(corpus, ids).await?;
    let questions = generate_questions(&mut rng, mode, &collections, config);
    debug!(mode = mode.slug(), count = questions.len(), "generated questions");

    if questions.is_empty() {
        return Err(QuizError::EmptyRound { mode });
    }
    Ok(questions)
}
