use std::io;
use std::path::Path;

use crate::{Slot, VerbClass};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// The kind of error raised.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Unknown verb class `{0}`")]
    UnknownVerbClass(Box<str>),
    #[error("Reading `{kana}` is too short for verb class `{class}`")]
    ReadingTooShort { kana: Box<str>, class: VerbClass },
    #[error("Verb class `{class}` has no {slot} syllable")]
    UnsupportedConjugation { class: VerbClass, slot: Slot },
    #[error("Cannot romanize `{input}` at byte {at}")]
    Romanize { input: Box<str>, at: usize },
    #[error("Failed to read `{}`", .path.display())]
    Io {
        path: Box<Path>,
        #[source]
        error: io::Error,
    },
    #[error("Failed to parse TOML lexicon")]
    Toml(
        #[from]
        #[source]
        toml::de::Error,
    ),
    #[error("Failed to parse JSON lexicon")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}
