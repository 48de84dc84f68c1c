//! Conjugation groups, and the tables which drive them.

use crate::error::{Error, ErrorKind};
use crate::inflection::godan::{self, Godan};
use crate::inflection::{irregular, tables, LanguageForm, Slot, VerbalForm};
use crate::text;
use crate::{Result, VerbClass, VerbEntry};

/// The script a stem or a syllable is spelled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Script {
    Kanji,
    Kana,
}

/// A cell in a row of conjugated syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Syllable {
    pub(crate) primary: &'static str,
    pub(crate) alternative: Option<&'static str>,
}

impl Syllable {
    pub(crate) const fn new(primary: &'static str, alternative: Option<&'static str>) -> Self {
        Self {
            primary,
            alternative,
        }
    }

    /// Select the syllable to use. Selecting an alternative which doesn't
    /// exist gives the primary syllable.
    #[inline]
    pub(crate) fn select(&self, alternative: bool) -> &'static str {
        match self.alternative {
            Some(syllable) if alternative => syllable,
            _ => self.primary,
        }
    }
}

/// Conjugated syllables indexed by [`Slot`].
pub(crate) type Row = [Option<Syllable>; Slot::COUNT];

/// Suffixes indexed by [`VerbalForm`] and [`LanguageForm`].
pub(crate) type Suffixes = [[Option<&'static str>; LanguageForm::COUNT]; VerbalForm::COUNT];

/// A set of cells, stored as one bitset of verbal forms per language form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Selection {
    forms: [u16; LanguageForm::COUNT],
}

impl Selection {
    /// Select the given cells.
    pub(crate) const fn new(cells: &[(VerbalForm, LanguageForm)]) -> Self {
        let mut forms = [0; LanguageForm::COUNT];
        let mut n = 0;

        while n < cells.len() {
            let (form, lang) = cells[n];
            forms[lang as usize] = forms[lang as usize] | (1 << form as usize);
            n += 1;
        }

        Self { forms }
    }

    /// Select every language form of the given verbal forms.
    pub(crate) const fn every(verbal: &[VerbalForm]) -> Self {
        let mut bits = 0u16;
        let mut n = 0;

        while n < verbal.len() {
            bits |= 1 << verbal[n] as usize;
            n += 1;
        }

        Self {
            forms: [bits; LanguageForm::COUNT],
        }
    }

    #[inline]
    pub(crate) fn contains(&self, form: VerbalForm, lang: LanguageForm) -> bool {
        self.forms[lang as usize] & (1 << form as usize) != 0
    }
}

/// The syllables and suffixes of a conjugation.
#[derive(Debug)]
pub(crate) struct Table {
    pub(crate) row: Row,
    /// Cells which take the alternative syllable.
    pub(crate) selection: Selection,
    pub(crate) suffixes: &'static Suffixes,
}

impl Table {
    /// Look up the syllable used in the given cell.
    pub(crate) fn syllable(
        &self,
        class: VerbClass,
        slot: Slot,
        form: VerbalForm,
        lang: LanguageForm,
    ) -> Result<&'static str> {
        lookup(&self.row, &self.selection, class, slot, form, lang)
    }

    #[inline]
    pub(crate) fn suffix(&self, form: VerbalForm, lang: LanguageForm) -> Option<&'static str> {
        self.suffixes[form as usize][lang as usize]
    }
}

pub(crate) fn lookup(
    row: &Row,
    selection: &Selection,
    class: VerbClass,
    slot: Slot,
    form: VerbalForm,
    lang: LanguageForm,
) -> Result<&'static str> {
    let Some(syllable) = &row[slot as usize] else {
        return Err(Error::new(ErrorKind::UnsupportedConjugation { class, slot }));
    };

    Ok(syllable.select(selection.contains(form, lang)))
}

/// The operations every conjugation group provides.
///
/// The verbal and language form are passed along so that irregular verbs
/// can adjust individual cells.
pub(crate) trait Conjugate {
    /// The spelling with its dictionary ending removed.
    fn stem(&self, script: Script, form: VerbalForm, lang: LanguageForm) -> &str;

    /// The conjugated syllable placed between the stem and the suffix.
    fn conjugation(
        &self,
        script: Script,
        slot: Slot,
        form: VerbalForm,
        lang: LanguageForm,
    ) -> Result<&str>;

    /// The suffix of the cell, or `None` if it's inapplicable.
    fn suffix(&self, form: VerbalForm, lang: LanguageForm) -> Option<&str>;
}

/// A conjugation group, picked by the class of a verb.
pub(crate) enum Group<'a> {
    Ichidan(Ichidan<'a>),
    Godan(Godan<'a>),
    Kuru(irregular::Kuru<'a>),
    Suru(irregular::Suru<'a>),
    Zuru(irregular::Suru<'a>),
}

impl<'a> Group<'a> {
    pub(crate) fn new(entry: &'a VerbEntry) -> Self {
        let class = entry.class();

        tracing::debug!(?class, kanji = entry.kanji(), kana = entry.kana(), "Conjugating");

        match class {
            VerbClass::Ichidan => Group::Ichidan(Ichidan::new(entry, &ICHIDAN)),
            VerbClass::GodanK => Group::Godan(Godan::new(entry, &godan::KU)),
            VerbClass::GodanKS => Group::Godan(Godan::new(entry, &godan::IKU)),
            VerbClass::GodanG => Group::Godan(Godan::new(entry, &godan::GU)),
            VerbClass::GodanS => Group::Godan(Godan::new(entry, &godan::SU)),
            VerbClass::GodanT => Group::Godan(Godan::new(entry, &godan::TSU)),
            VerbClass::GodanN => Group::Godan(Godan::new(entry, &godan::NU)),
            VerbClass::GodanB => Group::Godan(Godan::new(entry, &godan::BU)),
            VerbClass::GodanM => Group::Godan(Godan::new(entry, &godan::MU)),
            VerbClass::GodanR | VerbClass::GodanRI => Group::Godan(Godan::new(entry, &godan::RU)),
            VerbClass::GodanAru => Group::Godan(Godan::new(entry, &godan::ARU)),
            VerbClass::GodanU | VerbClass::GodanUS => Group::Godan(Godan::new(entry, &godan::U)),
            VerbClass::IrregularKuru => Group::Kuru(irregular::Kuru::new(entry)),
            VerbClass::IrregularSuruGeneral | VerbClass::IrregularSuruSpecial => {
                Group::Suru(irregular::Suru::new(entry, &irregular::SURU))
            }
            VerbClass::IrregularZuru => Group::Zuru(irregular::Suru::new(entry, &irregular::ZURU)),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $group:ident => $expr:expr) => {
        match $self {
            Group::Ichidan($group) => $expr,
            Group::Godan($group) => $expr,
            Group::Kuru($group) => $expr,
            Group::Suru($group) | Group::Zuru($group) => $expr,
        }
    };
}

impl Conjugate for Group<'_> {
    #[inline]
    fn stem(&self, script: Script, form: VerbalForm, lang: LanguageForm) -> &str {
        dispatch!(self, group => group.stem(script, form, lang))
    }

    #[inline]
    fn conjugation(
        &self,
        script: Script,
        slot: Slot,
        form: VerbalForm,
        lang: LanguageForm,
    ) -> Result<&str> {
        dispatch!(self, group => group.conjugation(script, slot, form, lang))
    }

    #[inline]
    fn suffix(&self, form: VerbalForm, lang: LanguageForm) -> Option<&str> {
        dispatch!(self, group => group.suffix(form, lang))
    }
}

/// The ichidan conjugation.
pub(crate) static ICHIDAN: Table = Table {
    row: row!["", "", "る", "る", "れ" / "られ", "ろ" / "よ"],
    selection: Selection::every(&[VerbalForm::Potential]),
    suffixes: &tables::ICHIDAN,
};

/// An ichidan verb, such as 食べる.
pub(crate) struct Ichidan<'a> {
    entry: &'a VerbEntry,
    table: &'static Table,
}

impl<'a> Ichidan<'a> {
    pub(crate) fn new(entry: &'a VerbEntry, table: &'static Table) -> Self {
        Self { entry, table }
    }
}

impl Conjugate for Ichidan<'_> {
    #[inline]
    fn stem(&self, script: Script, _: VerbalForm, _: LanguageForm) -> &str {
        text::trim_end(self.entry.spelling(script), 1)
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
