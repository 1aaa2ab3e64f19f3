//! Engine configuration.
//!
//! Every tunable that shapes a round lives here so multiple engines (and tests)
//! can run side by side with different settings.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::ConfigError,
    models::{GameMode, Narrator, CHOICE_COUNT},
    sampler::id_span,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Questions per round.
    pub round_size: usize,
    /// Collection ids eligible for sampling (the short, beginner-friendly chapters).
    pub allowed_collections: RangeInclusive<u32>,
    /// Mode A draws its passage from this many opening passages of a collection.
    pub opening_window: usize,
    /// Display length for "continue the passage" choices.
    pub continue_truncate_len: usize,
    /// Display length for "identify the meaning" choices.
    pub meaning_truncate_len: usize,
    pub identify_source_collections: usize,
    pub continue_passage_collections: usize,
    pub identify_meaning_collections: usize,
    /// Reciter whose audio is attached to questions.
    pub narrator: Narrator,
    /// `None` seeds from OS entropy; `Some` makes every round reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            round_size: 10,
            allowed_collections: 78..=114,
            opening_window: 5,
            continue_truncate_len: 60,
            meaning_truncate_len: 80,
            identify_source_collections: 8,
            continue_passage_collections: 6,
            identify_meaning_collections: 6,
            narrator: Narrator::default(),
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(seed: u64) -> Self {
        EngineConfig { rng_seed: Some(seed), ..Self::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// How many distinct collections a round of `mode` samples.
    pub fn collections_for(&self, mode: GameMode) -> usize {
        match mode {
            GameMode::IdentifySource  => self.identify_source_collections,
            GameMode::ContinuePassage => self.continue_passage_collections,
            GameMode::IdentifyMeaning => self.identify_meaning_collections,
        }
    }

    /// Number of ids in the allowed range.
    pub fn allowed_span(&self) -> usize {
        id_span(&self.allowed_collections)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_size == 0 {
            return Err(ConfigError::Invalid("round_size must be at least 1".into()));
        }
        if self.opening_window == 0 {
            return Err(ConfigError::Invalid("opening_window must be at least 1".into()));
        }
        if self.continue_truncate_len == 0 || self.meaning_truncate_len == 0 {
            return Err(ConfigError::Invalid("truncation lengths must be positive".into()));
        }
        let span = self.allowed_span();
        if span == 0 {
            return Err(ConfigError::Invalid("allowed_collections is empty".into()));
        }
        for mode in GameMode::ALL {
            let n = self.collections_for(mode);
            // Rejection sampling only terminates when the range holds n distinct ids.
            if n > span {
                return Err(ConfigError::Invalid(format!(
                    "{} samples {n} collections but only {span} ids are allowed",
                    mode.slug()
                )));
            }
            if n < CHOICE_COUNT && mode == GameMode::IdentifySource {
                return Err(ConfigError::Invalid(format!(
                    "{} needs at least {CHOICE_COUNT} collections, got {n}",
                    mode.slug()
                )));
            }
            if n == 0 {
                return Err(ConfigError::Invalid(format!("{} samples no collections", mode.slug())));
            }
        }
        Ok(())
    }
}
