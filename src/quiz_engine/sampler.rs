//! Corpus sampler: pick `n` distinct collections from the allowed id range and
//! fetch them concurrently. Any single failed fetch fails the whole sample.

use std::ops::RangeInclusive;

use futures_util::future::try_join_all;
use rand::Rng;
use tracing::debug;

use crate::quiz_engine::{
    corpus::CorpusSource,
    error::{ConfigError, QuizError},
    models::Collection,
    random::random_int,
};

/// Number of ids in `range`; zero when it is empty.
pub fn id_span(range: &RangeInclusive<u32>) -> usize {
    let (start, end) = (*range.start(), *range.end());
    if end < start {
        0
    } else {
        (end - start) as usize + 1
    }
}

/// Draw `n` distinct ids from `range` by rejection sampling, in draw order.
pub fn draw_distinct_ids<R: Rng + ?Sized>(
    rng: &mut R,
    range: &RangeInclusive<u32>,
    n: usize,
) -> Result<Vec<u32>, QuizError> {
    let (start, end) = (*range.start(), *range.end());
    if n > id_span(range) {
        return Err(ConfigError::Invalid(format!(
            "cannot draw {n} distinct ids from {start}..={end}"
        ))
        .into());
    }

    let mut ids = Vec::with_capacity(n);
    while ids.len() < n {
        let id = random_int(rng, i64::from(start), i64::from(end))? as u32;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Fetch `n` distinct collections. Order of the result is not meaningful.
pub async fn fetch_distinct_collections<C: CorpusSource>(
    corpus: &C,
    ids: Vec<u32>,
) -> Result<Vec<Collection>, QuizError> {
    debug!(?ids, "sampling collections");
    let collections = try_join_all(ids.into_iter().map(|id| corpus.fetch_collection(id))).await?;
    Ok(collections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{corpus::StaticCorpus, error::CorpusError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus(ids: RangeInclusive<u32>) -> StaticCorpus {
        StaticCorpus::new(ids.map(|id| Collection { id, name: format!("C{id}"), passages: vec![] }))
    }

    #[test]
    fn draws_exactly_n_distinct_ids_in_range() {
        for seed in [1u64, 42, 999] {
            let mut rng = StdRng::seed_from_u64(seed);
            let ids = draw_distinct_ids(&mut rng, &(78..=114), 8).unwrap();
            assert_eq!(ids.len(), 8);
            let unique: std::collections::HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), 8);
            assert!(ids.iter().all(|id| (78..=114).contains(id)));
        }
    }

    #[test]
    fn span_counts_inclusive_ids() {
        assert_eq!(id_span(&(78..=114)), 37);
        assert_eq!(id_span(&(5..=5)), 1);
        assert_eq!(id_span(&RangeInclusive::new(5, 4)), 0);
    }

    #[test]
    fn whole_range_can_be_drawn() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut ids = draw_distinct_ids(&mut rng, &(1..=4), 4).unwrap();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn oversized_draw_is_rejected_instead_of_looping() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!(matches!(
            draw_distinct_ids(&mut rng, &(1..=3), 4),
            Err(QuizError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[tokio::test]
    async fn fetches_every_drawn_collection() {
        let corpus = corpus(78..=114);
        let collections = fetch_distinct_collections(&corpus, vec![80, 90, 100]).await.unwrap();
        let mut ids: Vec<u32> = collections.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![80, 90, 100]);
    }

    #[tokio::test]
    async fn one_failed_fetch_fails_the_sample() {
        let corpus = corpus(78..=80);
        let result = fetch_distinct_collections(&corpus, vec![78, 200]).await;
        assert!(matches!(result, Err(QuizError::Corpus(CorpusError::NotFound(200)))));
    }
}
