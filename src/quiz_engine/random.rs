use rand::Rng;
use crate::quiz_engine::error::RandomError;

/// Return a uniformly shuffled copy of `items`; the input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();

    // Fisher-Yates shuffle
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }

    out
}

/// Take the first `k` elements of a shuffled copy.
///
/// Saturates: when `k` exceeds the input length the whole shuffled input is returned.
pub fn sample_distinct<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], k: usize) -> Vec<T> {
    let mut out = shuffle(rng, items);
    out.truncate(k);
    out
}

/// Uniform integer in `[min, max]`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64, RandomError> {
    if max < min {
        return Err(RandomError::InvalidRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}
