//! Looking up verbs from free text queries.

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, ErrorKind};
use crate::romaji::{self, Hepburn, Romanizer};
use crate::verb::RawVerb;
use crate::{Result, VerbEntry};

/// A repository of verbs.
pub trait Lexicon {
    /// Find verbs matching `query`, which may be written in kanji, kana or
    /// romaji.
    fn lookup(&self, query: &str) -> Vec<&VerbEntry>;
}

#[derive(Deserialize)]
struct LexiconFile {
    #[serde(default)]
    verb: Vec<RawVerb>,
}

/// A lexicon held in memory.
///
/// # Examples
///
/// ```
/// use katsuyou_lib::{Lexicon, MemoryLexicon};
///
/// let lexicon = MemoryLexicon::from_toml(r#"
/// [[verb]]
/// kanji = "書く"
/// kana = "かく"
/// class = "v5k"
/// "#)?;
///
/// assert_eq!(lexicon.lookup("kaku").len(), 1);
/// assert_eq!(lexicon.lookup("カク").len(), 1);
/// # Ok::<_, katsuyou_lib::Error>(())
/// ```
#[derive(Default)]
pub struct MemoryLexicon {
    entries: Vec<VerbEntry>,
    index: HashMap<String, Vec<usize>>,
}

impl MemoryLexicon {
    /// Construct a lexicon out of the given entries.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = VerbEntry>,
    {
        let mut lexicon = Self::default();

        for entry in entries {
            lexicon.insert(entry);
        }

        lexicon
    }

    /// Parse a lexicon in TOML format.
    ///
    /// Entries with an unknown verb class or a reading which is too short
    /// are skipped with a warning.
    pub fn from_toml(input: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(input)?;
        Ok(Self::from_raw(file.verb))
    }

    /// Parse a lexicon in JSON format.
    pub fn from_json(input: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(input)?;
        Ok(Self::from_raw(file.verb))
    }

    /// Load a lexicon from a file, which is parsed as JSON if it has a
    /// `.json` extension and as TOML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let input = fs::read_to_string(path).map_err(|error| {
            Error::new(ErrorKind::Io {
                path: path.into(),
                error,
            })
        })?;

        let lexicon = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&input)?
        } else {
            Self::from_toml(&input)?
        };

        tracing::debug!(path = %path.display(), entries = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    fn from_raw(rows: Vec<RawVerb>) -> Self {
        let mut lexicon = Self::default();

        for (n, row) in rows.into_iter().enumerate() {
            match VerbEntry::try_from(row) {
                Ok(entry) => lexicon.insert(entry),
                Err(error) => {
                    tracing::warn!("Skipping verb #{n}: {error}");
                }
            }
        }

        lexicon
    }

    /// Insert an entry into the lexicon.
    pub fn insert(&mut self, entry: VerbEntry) {
        let n = self.entries.len();
        let mut keys = BTreeSet::new();

        if !entry.kanji().is_empty() {
            keys.insert(entry.kanji().to_owned());
        }

        keys.insert(entry.kana().to_owned());
        keys.insert(romaji::to_hiragana(entry.kana()));

        for hepburn in [Hepburn::traditional(), Hepburn::modified()] {
            match hepburn.transliterate(entry.kana()) {
                Ok(romaji) => {
                    keys.insert(fold(&romaji));
                }
                Err(error) => {
                    tracing::trace!(kana = entry.kana(), "Not indexing romaji: {error}");
                }
            }
        }

        for key in keys {
            self.index.entry(key).or_default().push(n);
        }

        self.entries.push(entry);
    }

    /// Number of entries in the lexicon.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if the lexicon is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &VerbEntry> {
        self.entries.iter()
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, query: &str) -> Vec<&VerbEntry> {
        let query = query.trim();

        if query.is_empty() {
            return Vec::new();
        }

        let mut found = BTreeSet::new();

        for key in [query.to_owned(), romaji::to_hiragana(query), fold(query)] {
            if let Some(indexes) = self.index.get(&key) {
                found.extend(indexes.iter().copied());
            }
        }

        found.into_iter().map(|n| &self.entries[n]).collect()
    }
}

/// Fold romaji so that long vowels match regardless of whether they are
/// written with macrons, circumflexes or doubled.
fn fold(romaji: &str) -> String {
    let mut output = String::with_capacity(romaji.len());

    for c in romaji.chars().flat_map(char::to_lowercase) {
        let c = match c {
            'ā' | 'â' => 'a',
            'ī' | 'î' => 'i',
            'ū' | 'û' => 'u',
            'ē' | 'ê' => 'e',
            'ō' | 'ô' => 'o',
            '\'' | '-' | ' ' => continue,
            c => c,
        };

        match (output.chars().next_back(), c) {
            (Some('o'), 'o' | 'u') | (Some('u'), 'u') => continue,
            _ => output.push(c),
        }
    }

    output
}
