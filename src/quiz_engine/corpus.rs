//! Retrieval of collections from the verse corpus.
//!
//! The engine only depends on [`CorpusSource`]. Two sources ship with the crate:
//! [`StaticCorpus`] keeps collections in memory, [`RemoteCorpus`] decodes the
//! public corpus API over a caller-supplied [`Transport`].

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::quiz_engine::{
    error::CorpusError,
    models::{Collection, Narrator, Passage},
};

/// Anything that can hand back a fully hydrated collection by id.
pub trait CorpusSource: Send + Sync {
    fn fetch_collection(&self, id: u32)
        -> impl Future<Output = Result<Collection, CorpusError>> + Send;
}

// ---------------------------------------------------------------------------
// In-memory corpus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    collections: HashMap<u32, Collection>,
}

impl StaticCorpus {
    pub fn new(collections: impl IntoIterator<Item = Collection>) -> Self {
        StaticCorpus {
            collections: collections.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Load a JSON array of collections.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let raw = std::fs::read(path).map_err(|e| CorpusError::Transport(e.to_string()))?;
        let collections: Vec<Collection> = serde_json::from_slice(&raw)?;
        Ok(Self::new(collections))
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl CorpusSource for StaticCorpus {
    async fn fetch_collection(&self, id: u32) -> Result<Collection, CorpusError> {
        self.collections.get(&id).cloned().ok_or(CorpusError::NotFound(id))
    }
}

// ---------------------------------------------------------------------------
// Remote corpus
// ---------------------------------------------------------------------------

/// Byte transport for [`RemoteCorpus`], e.g. an HTTP client rooted at the API base URL.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, CorpusError>> + Send;
}

#[derive(Debug, Clone)]
pub struct RemoteCorpus<T> {
    transport: T,
    narrator: Narrator,
}

impl<T: Transport> RemoteCorpus<T> {
    pub fn new(transport: T, narrator: Narrator) -> Self {
        RemoteCorpus { transport, narrator }
    }

    pub fn collection_path(id: u32) -> String {
        format!("/surat/{id}")
    }
}

impl<T: Transport> CorpusSource for RemoteCorpus<T> {
    async fn fetch_collection(&self, id: u32) -> Result<Collection, CorpusError> {
        let path = Self::collection_path(id);
        debug!(%path, "fetching collection");
        let body = self.transport.get(&path).await?;
        decode_collection(&body, self.narrator)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: u16,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCollection {
    nomor: u32,
    nama_latin: String,
    #[serde(default)]
    ayat: Vec<WirePassage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePassage {
    nomor_ayat: u32,
    teks_arab: String,
    teks_indonesia: String,
    #[serde(default)]
    audio: HashMap<String, String>,
}

/// Decode one collection response, picking `narrator`'s audio for each passage.
pub fn decode_collection(body: &[u8], narrator: Narrator) -> Result<Collection, CorpusError> {
    let envelope: Envelope<WireCollection> = serde_json::from_slice(body)?;
    if !(200..300).contains(&envelope.code) {
        return Err(CorpusError::Status { code: envelope.code, message: envelope.message });
    }
    let wire = envelope.data.ok_or_else(|| CorpusError::Status {
        code: envelope.code,
        message: "response carried no data".into(),
    })?;

    let passages = wire
        .ayat
        .into_iter()
        .map(|mut a| Passage {
            number: a.nomor_ayat,
            collection_id: wire.nomor,
            collection_name: wire.nama_latin.clone(),
            text: a.teks_arab,
            translation: a.teks_indonesia,
            audio_url: a.audio.remove(narrator.key()),
        })
        .collect();

    Ok(Collection { id: wire.nomor, name: wire.nama_latin, passages })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "code": 200,
        "message": "Data retrieved successfully",
        "data": {
            "nomor": 112,
            "nama": "الإخلاص",
            "namaLatin": "Al-Ikhlas",
            "jumlahAyat": 2,
            "ayat": [
                {
                    "nomorAyat": 1,
                    "teksArab": "قُلْ هُوَ اللّٰهُ اَحَدٌۚ",
                    "teksLatin": "qul huwallāhu aḥad",
                    "teksIndonesia": "Katakanlah (Nabi Muhammad), Dialah Allah Yang Maha Esa.",
                    "audio": { "01": "https://cdn/01/112001.mp3", "05": "https://cdn/05/112001.mp3" }
                },
                {
                    "nomorAyat": 2,
                    "teksArab": "اَللّٰهُ الصَّمَدُۚ",
                    "teksLatin": "allāhuṣ-ṣamad",
                    "teksIndonesia": "Allah tempat meminta segala sesuatu.",
                    "audio": { "01": "https://cdn/01/112002.mp3" }
                }
            ]
        }
    }"#;

    #[test]
    fn decodes_collection_with_selected_narrator() {
        let c = decode_collection(BODY.as_bytes(), Narrator::MisyariRasyidAlAfasy).unwrap();
        assert_eq!(c.id, 112);
        assert_eq!(c.name, "Al-Ikhlas");
        assert_eq!(c.len(), 2);
        assert_eq!(c.passages[0].number, 1);
        assert_eq!(c.passages[0].collection_name, "Al-Ikhlas");
        assert_eq!(c.passages[0].audio_url.as_deref(), Some("https://cdn/05/112001.mp3"));
        assert_eq!(c.passages[1].audio_url, None);
    }

    #[test]
    fn non_success_code_is_a_status_error() {
        let body = r#"{ "code": 404, "message": "Surat tidak ditemukan", "data": null }"#;
        match decode_collection(body.as_bytes(), Narrator::default()) {
            Err(CorpusError::Status { code, message }) => {
                assert_eq!(code, 404);
                assert_eq!(message, "Surat tidak ditemukan");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            decode_collection(b"<html>", Narrator::default()),
            Err(CorpusError::Decode(_))
        ));
    }

    struct CannedTransport;

    impl Transport for CannedTransport {
        async fn get(&self, path: &str) -> Result<Vec<u8>, CorpusError> {
            match path {
                "/surat/112" => Ok(BODY.as_bytes().to_vec()),
                _ => Err(CorpusError::Transport(format!("no route for {path}"))),
            }
        }
    }

    #[tokio::test]
    async fn remote_corpus_routes_by_collection_id() {
        let corpus = RemoteCorpus::new(CannedTransport, Narrator::AbdullahAlJuhany);
        let c = corpus.fetch_collection(112).await.unwrap();
        assert_eq!(c.passages[1].audio_url.as_deref(), Some("https://cdn/01/112002.mp3"));
        assert!(matches!(corpus.fetch_collection(1).await, Err(CorpusError::Transport(_))));
    }

    #[tokio::test]
    async fn static_corpus_reports_missing_ids() {
        let corpus = StaticCorpus::new(vec![Collection { id: 1, name: "One".into(), passages: vec![] }]);
        assert_eq!(corpus.fetch_collection(1).await.unwrap().name, "One");
        assert!(matches!(corpus.fetch_collection(2).await, Err(CorpusError::NotFound(2))));
    }
}
