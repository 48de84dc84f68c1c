use std::borrow::Cow;

use crate::inflection::group::{self, Conjugate, Row, Script, Selection, Suffixes};
use crate::inflection::{tables, LanguageForm, Slot, VerbalForm};
use crate::text;
use crate::{Result, VerbClass, VerbEntry};

use LanguageForm::*;
use VerbalForm::*;

/// The KU godan row.
pub(super) static KU: Row = row!["か" / "こ", "き" / "い", "く", "く", "け", "け"];
/// The IKU/YUKU godan row.
pub(super) static IKU: Row = row!["か" / "こ", "き" / "っ", "く", "く", "け", "け"];
/// The GU godan row.
pub(super) static GU: Row = row!["が" / "ご", "ぎ" / "い", "ぐ", "ぐ", "げ", "げ"];
/// The SU godan row.
pub(super) static SU: Row = row!["さ" / "そ", "し", "す", "す", "せ", "せ"];
/// The TSU godan row.
pub(super) static TSU: Row = row!["た" / "と", "ち" / "っ", "つ", "つ", "て", "て"];
/// The NU godan row.
pub(super) static NU: Row = row!["な" / "の", "に" / "ん", "ぬ", "ぬ", "ね", "ね"];
/// The BU godan row.
pub(super) static BU: Row = row!["ば" / "ぼ", "び" / "ん", "ぶ", "ぶ", "べ", "べ"];
/// The MU godan row.
pub(super) static MU: Row = row!["ま" / "も", "み" / "ん", "む", "む", "め", "め"];
/// The RU godan row.
pub(super) static RU: Row = row!["ら" / "ろ", "り" / "っ", "る", "る", "れ", "れ"];
/// The honorific -ARU godan row, as in いらっしゃる.
pub(super) static ARU: Row = row!["ら" / "ろ", "い" / "っ", "る", "る", "れ", "い"];
/// The U godan row.
pub(super) static U: Row = row!["わ" / "お", "い" / "っ", "う", "う", "え", "え"];

/// Cells using the euphonic or volitional syllable.
static SELECTION: Selection = Selection::new(&[
    (Past, Plain),
    (Te, Plain),
    (Conditional, Plain),
    (Imperative, Polite),
    (Volitional, Plain),
]);

/// Cells where ある drops its stem and syllable entirely.
static RI: Selection = Selection::new(&[
    (NonPast, PlainNegative),
    (Past, PlainNegative),
    (ProvisionalConditional, PlainNegative),
    (Conditional, PlainNegative),
    (Imperative, PoliteNegative),
]);

/// Suffixes which voice after the euphonic syllable of ぐ and ぶ.
static VOICED: [(VerbalForm, LanguageForm, &str); 4] = [
    (Past, Plain, "だ"),
    (Te, Plain, "で"),
    (Conditional, Plain, "だら"),
    (Imperative, Polite, "でください"),
];

/// A godan verb, driven by the row of its dictionary ending.
pub(crate) struct Godan<'a> {
    entry: &'a VerbEntry,
    row: &'static Row,
    suffixes: Cow<'static, Suffixes>,
    ri: bool,
}

impl<'a> Godan<'a> {
    pub(crate) fn new(entry: &'a VerbEntry, row: &'static Row) -> Self {
        let suffixes = match entry.class() {
            VerbClass::GodanG | VerbClass::GodanB => {
                let mut suffixes = tables::GODAN;

                for (form, lang, suffix) in VOICED {
                    suffixes[form as usize][lang as usize] = Some(suffix);
                }

                Cow::Owned(suffixes)
            }
            _ => Cow::Borrowed(&tables::GODAN),
        };

        Self {
            entry,
            row,
            suffixes,
            ri: entry.class() == VerbClass::GodanRI,
        }
    }

    #[inline]
    fn is_ri(&self, form: VerbalForm, lang: LanguageForm) -> bool {
        self.ri && RI.contains(form, lang)
    }
}

impl Conjugate for Godan<'_> {
    fn stem(&self, script: Script, form: VerbalForm, lang: LanguageForm) -> &str {
        let n = if self.is_ri(form, lang) { 2 } else { 1 };
        text::trim_end(self.entry.spelling(script), n)
    }

    fn conjugation(
        &self,
        _: Script,
        slot: Slot,
        form: VerbalForm,
        lang: LanguageForm,
    ) -> Result<&str> {
        let syllable = group::lookup(self.row, &SELECTION, self.entry.class(), slot, form, lang)?;

        if self.is_ri(form, lang) {
            return Ok(text::trim_start(syllable, 1));
        }

        Ok(syllable)
    }

    #[inline]
    fn suffix(&self, form: VerbalForm, lang: LanguageForm) -> Option<&str> {
        self.suffixes[form as usize][lang as usize]
    }
}
