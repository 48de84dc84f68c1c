use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::inflection::group::Script;
use crate::text;
use crate::{Result, VerbClass};

/// A verb lexeme.
///
/// The kana spelling is always long enough to strip the dictionary ending of
/// its class. The kanji spelling may be empty, in which case the kana
/// spelling is used in its place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVerb")]
pub struct VerbEntry {
    kanji: String,
    kana: String,
    class: VerbClass,
}

impl VerbEntry {
    /// Construct a new verb entry.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::ReadingTooShort`] if `kana` is shorter than
    /// the dictionary ending of `class`.
    pub fn new<K, R>(kanji: K, kana: R, class: VerbClass) -> Result<Self>
    where
        K: Into<String>,
        R: Into<String>,
    {
        let kana = kana.into();

        if text::char_len(&kana) < class.ending_len() {
            return Err(Error::new(ErrorKind::ReadingTooShort {
                kana: kana.into(),
                class,
            }));
        }

        Ok(Self {
            kanji: kanji.into(),
            kana,
            class,
        })
    }

    /// Construct a new verb entry from a JMdict class keyword such as `v5k`.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::UnknownVerbClass`] if `tag` is not a known
    /// verb class.
    pub fn from_tag<K, R>(kanji: K, kana: R, tag: &str) -> Result<Self>
    where
        K: Into<String>,
        R: Into<String>,
    {
        let class = tag.parse::<VerbClass>()?;
        Self::new(kanji, kana, class)
    }

    /// The kanji spelling, which might be empty.
    #[inline]
    pub fn kanji(&self) -> &str {
        &self.kanji
    }

    /// The kana spelling.
    #[inline]
    pub fn kana(&self) -> &str {
        &self.kana
    }

    /// The grammatical class of the verb.
    #[inline]
    pub fn class(&self) -> VerbClass {
        self.class
    }

    /// Spelling in the given script, falling back to kana for verbs which
    /// are not written with kanji.
    pub(crate) fn spelling(&self, script: Script) -> &str {
        match script {
            Script::Kanji if !self.kanji.is_empty() => &self.kanji,
            _ => &self.kana,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct RawVerb {
    #[serde(default)]
    pub(crate) kanji: String,
    pub(crate) kana: String,
    pub(crate) class: String,
}

impl TryFrom<RawVerb> for VerbEntry {
    type Error = Error;

    #[inline]
    fn try_from(raw: RawVerb) -> Result<Self> {
        VerbEntry::from_tag(raw.kanji, raw.kana, &raw.class)
    }
}
