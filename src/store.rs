use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::pipeline::traits::LyricsStore;
use crate::types::Token;

/// External lyric provider, e.g. a music-service client. Returns the raw
/// lyric text, or `None` when the service has no lyric for the song.
pub trait LyricsSource: Send + Sync {
    fn fetch(&self, title: &str, artist: &str) -> Result<Option<String>, ScoringError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredLyric {
    title: String,
    artist: String,
    words: Vec<String>,
    fetched_at: String,
}

/// JSON-file lyrics store keyed by lower-cased title.
///
/// Writes follow an append-if-absent discipline: a title already present is
/// never appended again, so two requests racing on the same missing lyric
/// cannot produce duplicate rows.
pub struct JsonLyricsStore {
    path: PathBuf,
    source: Option<Box<dyn LyricsSource>>,
}

impl JsonLyricsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: None,
        }
    }

    pub fn with_source(path: impl Into<PathBuf>, source: Box<dyn LyricsSource>) -> Self {
        Self {
            path: path.into(),
            source: Some(source),
        }
    }

    fn load_entries(&self) -> Result<Vec<StoredLyric>, ScoringError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)
            .map_err(|e| ScoringError::io("read lyrics store", e))?;
        serde_json::from_str(&data).map_err(|e| ScoringError::json("parse lyrics store", e))
    }

    fn save_entries(&self, entries: &[StoredLyric]) -> Result<(), ScoringError> {
        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| ScoringError::json("serialize lyrics store", e))?;
        std::fs::write(&self.path, data).map_err(|e| ScoringError::io("write lyrics store", e))
    }

    fn find(entries: &[StoredLyric], title: &str) -> Option<Vec<Token>> {
        let key = title.to_lowercase();
        entries
            .iter()
            .find(|entry| entry.title.to_lowercase() == key)
            .map(|entry| entry.words.iter().map(Token::new).collect())
    }
}

impl LyricsStore for JsonLyricsStore {
    fn lookup(&self, title: &str) -> Result<Option<Vec<Token>>, ScoringError> {
        let entries = self.load_entries()?;
        Ok(Self::find(&entries, title))
    }

    fn fetch_and_store(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Option<Vec<Token>>, ScoringError> {
        let mut entries = self.load_entries()?;
        // Append-if-absent: somebody may have stored it since our lookup.
        if let Some(existing) = Self::find(&entries, title) {
            return Ok(Some(existing));
        }

        let Some(source) = self.source.as_deref() else {
            tracing::warn!(title, "no lyrics source configured, cannot fetch");
            return Ok(None);
        };

        let Some(lyric) = source.fetch(title, artist)? else {
            tracing::debug!(title, artist, "lyric not available from source");
            return Ok(None);
        };

        let words = split_lyric_words(&lyric);
        if words.is_empty() {
            return Ok(None);
        }

        entries.push(StoredLyric {
            title: title.to_string(),
            artist: artist.to_string(),
            words: words.clone(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
        });
        self.save_entries(&entries)?;

        Ok(Some(words.into_iter().map(Token::new).collect()))
    }
}

/// Splits a lyric into word tokens, keeping contractions ("don't") as one
/// word but dropping other punctuation.
fn split_lyric_words(lyric: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = lyric.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            current.push(c);
        } else if c == '\''
            && !current.is_empty()
            && chars.peek().is_some_and(|next| next.is_alphanumeric())
        {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        lyric: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn new(lyric: Option<&'static str>) -> Self {
            Self {
                lyric,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl LyricsSource for FixedSource {
        fn fetch(&self, _title: &str, _artist: &str) -> Result<Option<String>, ScoringError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.lyric.map(str::to_string))
        }
    }

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("lyrics.json")
    }

    #[test]
    fn lookup_on_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLyricsStore::new(store_path(&dir));
        assert!(store.lookup("The Search").unwrap().is_none());
    }

    #[test]
    fn fetch_and_store_persists_and_is_found_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLyricsStore::with_source(
            store_path(&dir),
            Box::new(FixedSource::new(Some("Oh, don't stop now"))),
        );

        let words = store.fetch_and_store("The Search", "NF").unwrap().unwrap();
        let texts: Vec<&str> = words.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Oh", "don't", "stop", "now"]);

        let reread = JsonLyricsStore::new(store_path(&dir));
        assert!(reread.lookup("the search").unwrap().is_some());
    }

    #[test]
    fn fetch_and_store_deduplicates_by_title() {
        let dir = tempfile::tempdir().unwrap();
        let source = FixedSource::new(Some("first version"));
        let store = JsonLyricsStore::with_source(store_path(&dir), Box::new(source));

        store.fetch_and_store("Song", "A").unwrap().unwrap();
        // Second fetch must hit the stored entry, not the source again.
        store.fetch_and_store("song", "A").unwrap().unwrap();

        let data = std::fs::read_to_string(store_path(&dir)).unwrap();
        let entries: Vec<StoredLyric> = serde_json::from_str(&data).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn fetch_without_source_or_lyric_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLyricsStore::new(store_path(&dir));
        assert!(store.fetch_and_store("Song", "A").unwrap().is_none());

        let store = JsonLyricsStore::with_source(
            store_path(&dir),
            Box::new(FixedSource::new(None)),
        );
        assert!(store.fetch_and_store("Song", "A").unwrap().is_none());
    }

    #[test]
    fn split_keeps_contractions_and_drops_punctuation() {
        assert_eq!(
            split_lyric_words("don't stop! me-now... rock'n'roll"),
            ["don't", "stop", "me", "now", "rock'n'roll"]
        );
        assert!(split_lyric_words("...!?").is_empty());
    }

    #[test]
    fn corrupt_store_file_surfaces_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, "not json").unwrap();
        let store = JsonLyricsStore::new(path);
        assert!(matches!(store.lookup("x"), Err(ScoringError::Json { .. })));
    }
}
