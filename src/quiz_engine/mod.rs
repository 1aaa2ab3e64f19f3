//! Core quiz engine: corpus sampling, question generation, scoring and the session.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: passages, collections, questions, modes, narrators |
//! | `config`    | `EngineConfig`: round size, id range, truncation lengths, seed |
//! | `error`     | Error types for every fallible layer |
//! | `random`    | Fisher-Yates shuffle, distinct sampling, bounded integers |
//! | `corpus`    | `CorpusSource` trait with in-memory and remote implementations |
//! | `sampler`   | Distinct collection sampling with concurrent fetch |
//! | `helpers`   | Truncation and choice assembly shared by the modes |
//! | `modes`     | One question generator per game mode |
//! | `generator` | `generate_round()`: sample, then dispatch to the mode |
//! | `scoring`   | Streak scoring and star rating |
//! | `session`   | `SessionController`: the round state machine |
//! | `store`     | Best-score persistence |
//! | `view`      | JSON snapshot for clients |

pub mod config;
pub mod corpus;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod modes;
pub mod random;
pub mod sampler;
pub mod scoring;
pub mod session;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export the public API surface so callers can use
// `quiz_engine::SessionController` without reaching into sub-modules.
pub use config::EngineConfig;
pub use corpus::{CorpusSource, RemoteCorpus, StaticCorpus, Transport};
pub use error::{ConfigError, CorpusError, QuizError, RandomError, StoreError};
pub use generator::{generate_questions, generate_round};
pub use models::{Collection, GameMode, Narrator, Passage, Question, CHOICE_COUNT};
pub use scoring::Tally;
pub use session::{
    AnswerOutcome, GameState, RoundOutcome, RoundStatus, RoundSummary, SessionController,
    SessionState,
};
pub use store::{JsonFileScoreStore, MemoryScoreStore, ScoreStore};
pub use view::client_state;
