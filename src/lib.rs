//! # verse_quiz
//!
//! A client-local quiz engine over a corpus of scripture verses.
//!
//! Each round samples a handful of short chapters from a remote corpus and turns
//! them into ten multiple-choice questions in one of three modes:
//!
//! - **Guess the Chapter**: which chapter does this verse come from?
//! - **Continue the Verse**: which verse follows this one?
//! - **Guess the Meaning**: which translation matches this verse?
//!
//! ## How it works
//!
//! 1. Build a [`SessionController`] from a [`CorpusSource`], a [`ScoreStore`]
//!    and an [`EngineConfig`].
//! 2. `start_round(mode).await` draws distinct collection ids, fetches them
//!    concurrently and generates the questions. Every question has four
//!    distinct choices and a `correct_index` pointing at the right one.
//! 3. Drive the round with `submit_answer`, `next_question` and `reset_round`;
//!    observe it with `snapshot`, `current_question` and `summary`.
//!
//! Scoring is 10 points per correct answer plus 5 once a streak reaches three.
//! The best score per mode is persisted when a round finishes.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use verse_quiz::{EngineConfig, GameMode, MemoryScoreStore, SessionController, StaticCorpus};
//!
//! # async fn run(corpus: StaticCorpus) -> Result<(), verse_quiz::QuizError> {
//! let engine = SessionController::new(corpus, MemoryScoreStore::new(), EngineConfig::with_seed(42))?;
//! engine.start_round(GameMode::IdentifySource).await?;
//!
//! while let Some(q) = engine.current_question() {
//!     println!("{}", q.prompt);
//!     engine.submit_answer(0);
//!     if engine.next_question() == Some(verse_quiz::RoundStatus::Finished) {
//!         break;
//!     }
//! }
//! println!("{:?}", engine.summary());
//! # Ok(())
//! # }
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `verse_quiz::SessionController`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    client_state, generate_questions, generate_round, AnswerOutcome, Collection, CorpusError,
    CorpusSource, EngineConfig, GameMode, GameState, JsonFileScoreStore, MemoryScoreStore,
    Narrator, Passage, Question, QuizError, RemoteCorpus, RoundOutcome, RoundStatus,
    RoundSummary, ScoreStore, SessionController, SessionState, StaticCorpus, StoreError, Tally,
    Transport, CHOICE_COUNT,
};
