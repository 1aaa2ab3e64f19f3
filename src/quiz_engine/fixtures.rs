//! Deterministic corpus material shared by the unit tests.

use std::ops::RangeInclusive;

use crate::quiz_engine::{
    corpus::StaticCorpus,
    models::{Collection, Passage},
};

/// A collection whose passage texts and translations are unique per id.
pub fn collection(id: u32, len: u32) -> Collection {
    let name = format!("Collection {id}");
    Collection {
        id,
        name: name.clone(),
        passages: (1..=len)
            .map(|n| Passage {
                number: n,
                collection_id: id,
                collection_name: name.clone(),
                text: format!("text {id}:{n}"),
                translation: format!("meaning {id}:{n}"),
                audio_url: Some(format!("https://audio/{id}/{n}.mp3")),
            })
            .collect(),
    }
}

pub fn collections(lens: &[u32]) -> Vec<Collection> {
    lens.iter().enumerate().map(|(i, &len)| collection(100 + i as u32, len)).collect()
}

/// Every id in `ids` present, lengths varying between 3 and 10 passages.
pub fn corpus(ids: RangeInclusive<u32>) -> StaticCorpus {
    StaticCorpus::new(ids.map(|id| collection(id, 3 + id % 8)))
}
