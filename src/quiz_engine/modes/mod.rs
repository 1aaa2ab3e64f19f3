//! Question generators, one per game mode.
//!
//! Every generator follows the same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng + ?Sized>(
//!     rng: &mut R,
//!     collections: &[Collection],
//!     config: &EngineConfig,
//! ) -> Vec<Question>
//! ```
//!
//! and returns at most `config.round_size` questions. A generator returns fewer
//! when the sampled material cannot support a full round; it never emits a
//! question without four distinct choices.

/// Which collection is this passage from?
pub mod source_collection;
/// Which passage comes next?
pub mod continue_passage;
/// What does this passage mean?
pub mod meaning;
