//! The irregular kuru, suru and zuru conjugations.

use crate::inflection::group::{Conjugate, Script, Selection, Table};
use crate::inflection::{tables, LanguageForm, Slot, VerbalForm};
use crate::text;
use crate::{Result, VerbEntry};

use VerbalForm::*;

/// Kana rows of 来る.
pub(super) static KURU: Table = Table {
    row: row!["こ", "き", "くる", "くる", "くれ" / "これ", "こい" / "こよ"],
    selection: Selection::every(&[Potential]),
    suffixes: &tables::ICHIDAN,
};

/// する, where the potential is expressed through できる.
pub(super) static SURU: Table = Table {
    row: row!["し" / "さ", "し", "する", "する", "すれ" / "でき", "しろ" / "せよ"],
    selection: Selection::every(&[Potential, Passive, Causative, CausativeAlt, CausativePassive]),
    suffixes: &tables::SURU,
};

/// ずる, as in 信ずる.
pub(super) static ZURU: Table = Table {
    row: row!["じ" / "ぜ", "じ", "ずる", "ずる", "ずれ" / "じられ", "じろ" / "ぜよ"],
    selection: Selection::every(&[Potential, Passive, Causative, CausativeAlt, CausativePassive]),
    suffixes: &tables::ICHIDAN,
};

/// The kuru verb, either on its own or at the end of a compound like
/// 持って来る.
pub(crate) struct Kuru<'a> {
    entry: &'a VerbEntry,
    /// Kanji stem when the verb is spelled with 来, which already carries
    /// the reading of the leading syllable.
    kanji: Option<&'a str>,
}

impl<'a> Kuru<'a> {
    pub(crate) fn new(entry: &'a VerbEntry) -> Self {
        let stem = text::trim_end(entry.kanji(), 1);

        let kanji = match text::last_char(stem) {
            Some('来' | '來') => Some(stem),
            _ => None,
        };

        Self { entry, kanji }
    }
}

impl Conjugate for Kuru<'_> {
    fn stem(&self, script: Script, _: VerbalForm, _: LanguageForm) -> &str {
        match (script, self.kanji) {
            (Script::Kanji, Some(stem)) => stem,
            _ => text::trim_end(self.entry.spelling(script), 2),
        }
    }

    fn conjugation(
        &self,
        script: Script,
        slot: Slot,
        form: VerbalForm,
        lang: LanguageForm,
    ) -> Result<&str> {
        let syllable = KURU.syllable(self.entry.class(), slot, form, lang)?;

        if script == Script::Kanji && self.kanji.is_some() {
            return Ok(text::trim_start(syllable, 1));
        }

        Ok(syllable)
    }

    #[inline]
    fn suffix(&self, form: VerbalForm, lang: LanguageForm) -> Option<&str> {
        KURU.suffix(form, lang)
    }
}

/// A suru or zuru verb, depending on the table it's constructed with.
pub(crate) struct Suru<'a> {
    entry: &'a VerbEntry,
    table: &'static Table,
}

impl<'a> Suru<'a> {
    pub(crate) fn new(entry: &'a VerbEntry, table: &'static Table) -> Self {
        Self { entry, table }
    }
}

impl Conjugate for Suru<'_> {
    #[inline]
    fn stem(&self, script: Script, _: VerbalForm, _: LanguageForm) -> &str {
        text::trim_end(self.entry.spelling(script), 2)
    }

    #[inline]
    fn conjugation(
        &self,
        _: Script,
        slot: Slot,
        form: VerbalForm,
        lang: LanguageForm,
    ) -> Result<&str> {
        self.table.syllable(self.entry.class(), slot, form, lang)
    }

    #[inline]
    fn suffix(&self, form: VerbalForm, lang: LanguageForm) -> Option<&str> {
        self.table.suffix(form, lang)
    }
}
