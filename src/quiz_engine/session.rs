//! Session controller: owns the single active round.
//!
//! ## States
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Idle` | no round yet, or the round was reset |
//! | `Loading` | a `start_round` call is in flight |
//! | `Active(Playing)` | waiting for an answer to the current question |
//! | `Active(Answered)` | answer recorded, waiting for `next_question` |
//! | `Active(Finished)` | terminal until `reset_round` or a new round |
//!
//! Operations that arrive in the wrong state are ignored rather than reported,
//! so a UI racing its own transitions cannot corrupt the round.
//!
//! ## Overlapping round starts
//!
//! Each `start_round` takes a generation token. Only the most recently issued
//! token may install its questions; results carrying an older token are dropped
//! whether they resolve before or after the newer call.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::quiz_engine::{
    config::EngineConfig,
    corpus::CorpusSource,
    error::QuizError,
    generator::generate_round,
    models::{GameMode, Question, CHOICE_COUNT},
    scoring::{star_rating, Tally},
    store::{record_best, ScoreStore},
};

// ---------------------------------------------------------------------------
// Round state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundStatus {
    Playing,
    Answered { selected: usize },
    Finished,
}

/// One round in progress (or just finished).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub tally: Tally,
    /// Parallel to `questions`; `None` until that question is answered.
    pub answers: Vec<Option<bool>>,
    pub status: RoundStatus,
}

/// Result of a single accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub awarded: u32,
}

impl GameState {
    /// Fresh round positioned on the first question.
    pub fn new(mode: GameMode, questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        GameState {
            mode,
            questions,
            current_index: 0,
            tally: Tally::default(),
            answers,
            status: RoundStatus::Playing,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Record an answer for the current question. `None` unless playing.
    pub fn submit(&mut self, choice: usize) -> Option<AnswerOutcome> {
        if self.status != RoundStatus::Playing || choice >= CHOICE_COUNT {
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        let correct = question.is_correct(choice);
        let correct_index = question.correct_index;

        let awarded = self.tally.apply(correct);
        self.answers[self.current_index] = Some(correct);
        self.status = RoundStatus::Answered { selected: choice };
        Some(AnswerOutcome { correct, correct_index, awarded })
    }

    /// Move past an answered question. Returns the new status, `None` unless answered.
    pub fn advance(&mut self) -> Option<RoundStatus> {
        if !matches!(self.status, RoundStatus::Answered { .. }) {
            return None;
        }
        let next = self.current_index + 1;
        if next >= self.questions.len() {
            self.status = RoundStatus::Finished;
        } else {
            self.current_index = next;
            self.status = RoundStatus::Playing;
        }
        Some(self.status)
    }

    pub fn is_finished(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| **a == Some(true)).count()
    }
}

/// Everything a caller can observe about the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Loading { mode: GameMode },
    Active(GameState),
}

/// End-of-round report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub mode: GameMode,
    pub score: u32,
    pub best_streak: u32,
    pub correct: usize,
    pub total: usize,
    pub stars: u8,
    /// Best score ever recorded for this mode, this round included.
    pub high_score: u32,
    pub new_high_score: bool,
}

/// What became of a `start_round` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Started { questions: usize },
    /// A newer `start_round` or a reset took over while this one was loading.
    Superseded,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Pending {
    token: u64,
    mode: GameMode,
}

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    pending: Option<Pending>,
    round: Option<GameState>,
    summary: Option<RoundSummary>,
}

pub struct SessionController<C, S> {
    corpus: C,
    store: S,
    config: EngineConfig,
    rng: Mutex<StdRng>,
    inner: Mutex<Inner>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<C: CorpusSource, S: ScoreStore> SessionController<C, S> {
    pub fn new(corpus: C, store: S, config: EngineConfig) -> Result<Self, QuizError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(SessionController {
            corpus,
            store,
            config,
            rng: Mutex::new(rng),
            inner: Mutex::new(Inner::default()),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn corpus(&self) -> &C {
        &self.corpus
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sample the corpus and begin a new round of `mode`.
    ///
    /// On failure the session is left exactly as it was before the call.
    pub async fn start_round(&self, mode: GameMode) -> Result<RoundOutcome, QuizError> {
        let (token, rng) = {
            let mut inner = lock(&self.inner);
            inner.generation += 1;
            let token = inner.generation;
            inner.pending = Some(Pending { token, mode });
            let rng = StdRng::seed_from_u64(lock(&self.rng).next_u64());
            (token, rng)
        };
        info!(mode = mode.slug(), token, "starting round");

        let result = generate_round(&self.corpus, &self.config, mode, rng).await;

        let mut inner = lock(&self.inner);
        if inner.pending.as_ref().map(|p| p.token) != Some(token) {
            debug!(mode = mode.slug(), token, "discarding superseded round");
            return Ok(RoundOutcome::Superseded);
        }
        inner.pending = None;

        match result {
            Ok(questions) => {
                let count = questions.len();
                if count < self.config.round_size {
                    warn!(mode = mode.slug(), count, "short round");
                }
                inner.round = Some(GameState::new(mode, questions));
                inner.summary = None;
                Ok(RoundOutcome::Started { questions: count })
            }
            Err(e) => {
                warn!(mode = mode.slug(), error = %e, "round generation failed");
                Err(e)
            }
        }
    }

    /// Answer the current question. Ignored unless a question is awaiting an answer.
    pub fn submit_answer(&self, choice: usize) -> Option<AnswerOutcome> {
        let mut inner = lock(&self.inner);
        if inner.pending.is_some() {
            return None;
        }
        let outcome = inner.round.as_mut()?.submit(choice);
        if let Some(o) = &outcome {
            debug!(choice, correct = o.correct, awarded = o.awarded, "answer recorded");
        }
        outcome
    }

    /// Advance past an answered question, finishing the round after the last one.
    pub fn next_question(&self) -> Option<RoundStatus> {
        let mut inner = lock(&self.inner);
        if inner.pending.is_some() {
            return None;
        }
        let status = inner.round.as_mut()?.advance()?;
        if status == RoundStatus::Finished {
            let summary = inner.round.as_ref().map(|round| self.finish(round));
            inner.summary = summary;
        }
        Some(status)
    }

    /// Drop the round (and any in-flight start) and return to idle.
    pub fn reset_round(&self) {
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        inner.pending = None;
        inner.round = None;
        inner.summary = None;
    }

    pub fn snapshot(&self) -> SessionState {
        let inner = lock(&self.inner);
        match (&inner.pending, &inner.round) {
            (Some(p), _) => SessionState::Loading { mode: p.mode },
            (None, Some(round)) => SessionState::Active(round.clone()),
            (None, None) => SessionState::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.inner).pending.is_some()
    }

    pub fn current_question(&self) -> Option<Question> {
        let inner = lock(&self.inner);
        if inner.pending.is_some() {
            return None;
        }
        inner.round.as_ref()?.current_question().cloned()
    }

    /// Summary of the finished round, if the current round is finished.
    pub fn summary(&self) -> Option<RoundSummary> {
        let inner = lock(&self.inner);
        if inner.pending.is_some() {
            return None;
        }
        inner.summary.clone()
    }

    /// Best score persisted for `mode`; zero when the store cannot be read.
    pub fn high_score(&self, mode: GameMode) -> u32 {
        self.store.best_score(mode).unwrap_or_else(|e| {
            warn!(mode = mode.slug(), error = %e, "failed to read best score");
            0
        })
    }

    fn finish(&self, round: &GameState) -> RoundSummary {
        let score = round.tally.score;
        let new_high_score = record_best(&self.store, round.mode, score).unwrap_or_else(|e| {
            warn!(mode = round.mode.slug(), error = %e, "failed to persist best score");
            false
        });
        let high_score = self.high_score(round.mode).max(score);
        info!(mode = round.mode.slug(), score, high_score, "round finished");

        RoundSummary {
            mode: round.mode,
            score,
            best_streak: round.tally.best_streak,
            correct: round.correct_count(),
            total: round.questions.len(),
            stars: star_rating(score, round.questions.len()),
            high_score,
            new_high_score,
        }
    }
}
