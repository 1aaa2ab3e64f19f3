use std::fmt;
use serde::{Deserialize, Serialize};

/// Number of choices on every question: one correct answer plus three distractors.
pub const CHOICE_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Corpus primitives
// ---------------------------------------------------------------------------

/// One verse: source-script text, its translation and an optional recitation URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Ordinal position within the parent collection (1-based, as published).
    pub number: u32,
    pub collection_id: u32,
    pub collection_name: String,
    pub text: String,
    pub translation: String,
    pub audio_url: Option<String>,
}

/// A named, ordered group of passages (one chapter of the corpus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u32,
    pub name: String,
    pub passages: Vec<Passage>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

/// The six reciters the corpus publishes audio for, keyed "01".."06".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Narrator {
    #[serde(rename = "01")]
    AbdullahAlJuhany,
    #[serde(rename = "02")]
    AbdulMuhsinAlQasim,
    #[serde(rename = "03")]
    AbdurrahmanAsSudais,
    #[serde(rename = "04")]
    IbrahimAlDossari,
    #[default]
    #[serde(rename = "05")]
    MisyariRasyidAlAfasy,
    #[serde(rename = "06")]
    YasserAlDosari,
}

impl Narrator {
    /// Key used by the corpus audio map.
    pub fn key(self) -> &'static str {
        match self {
            Narrator::AbdullahAlJuhany     => "01",
            Narrator::AbdulMuhsinAlQasim   => "02",
            Narrator::AbdurrahmanAsSudais  => "03",
            Narrator::IbrahimAlDossari     => "04",
            Narrator::MisyariRasyidAlAfasy => "05",
            Narrator::YasserAlDosari       => "06",
        }
    }
}

impl fmt::Display for Narrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Narrator::AbdullahAlJuhany     => "Abdullah Al-Juhany",
            Narrator::AbdulMuhsinAlQasim   => "Abdul Muhsin Al-Qasim",
            Narrator::AbdurrahmanAsSudais  => "Abdurrahman As-Sudais",
            Narrator::IbrahimAlDossari     => "Ibrahim Al-Dossari",
            Narrator::MisyariRasyidAlAfasy => "Misyari Rasyid Al-Afasy",
            Narrator::YasserAlDosari       => "Yasser Al-Dosari",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Game modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Which collection does this passage come from?
    IdentifySource,
    /// Which passage comes next?
    ContinuePassage,
    /// What does this passage mean?
    IdentifyMeaning,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::IdentifySource,
        GameMode::ContinuePassage,
        GameMode::IdentifyMeaning,
    ];

    /// Stable identifier used in persistence keys and client payloads.
    pub fn slug(self) -> &'static str {
        match self {
            GameMode::IdentifySource  => "identify-source",
            GameMode::ContinuePassage => "continue-passage",
            GameMode::IdentifyMeaning => "identify-meaning",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameMode::IdentifySource  => "Which chapter is this verse from?",
            GameMode::ContinuePassage => "Pick the verse that comes next!",
            GameMode::IdentifyMeaning => "What does this verse mean?",
        }
    }

    /// Key under which the best score for this mode is persisted.
    pub fn storage_key(self) -> String {
        format!("game-highscore-{}", self.slug())
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::IdentifySource  => write!(f, "Guess the Chapter"),
            GameMode::ContinuePassage => write!(f, "Continue the Verse"),
            GameMode::IdentifyMeaning => write!(f, "Guess the Meaning"),
        }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One round item. Never mutated after generation; answers are tracked on the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Ordinal within the round.
    pub id: usize,
    pub prompt: String,
    pub hint: Option<String>,
    pub choices: [String; CHOICE_COUNT],
    pub correct_index: usize,
    pub collection_name: String,
    pub audio_url: Option<String>,
}

impl Question {
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_index]
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}
