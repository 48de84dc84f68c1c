//! Module which performs verb inflection, based on a verbs class.

#[macro_use]
mod macros;

pub(crate) mod group;
mod godan;
mod irregular;
mod tables;


use std::borrow::Cow;
use std::fmt;

use fixed_map::{Key, Map};
use serde::{Deserialize, Serialize};

use crate::romaji::Romanizer;
use crate::text;
use crate::{Result, VerbEntry};

use self::group::{Conjugate, Group, Script};

macro_rules! form {
    ($vis:vis enum $name:ident { $({$variant:ident, $keyword:literal, $describe:literal, $title:literal $(,)?}),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize, Key)]
        #[key(bitset)]
        #[serde(rename_all = "kebab-case")]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            $vis const ALL: [$name; 15] = [
                $($name::$variant,)*
            ];

            /// Number of verbal forms.
            $vis const COUNT: usize = $name::ALL.len();

            /// Keyword used to select the form.
            $vis fn keyword(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)*
                }
            }

            /// Describe the form.
            $vis fn describe(&self) -> &'static str {
                match self {
                    $($name::$variant => $describe,)*
                }
            }

            /// Longer title for the form.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            /// Parse the form from its keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($keyword => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    }
}

form! {
    pub enum VerbalForm {
        {NonPast, "non-past", "non-past", "non-past, present or future"},
        {Past, "past", "past", "過去形 (かこけい) past tense"},
        {Te, "te", "～て", "～te form, joins clauses and acts as a soft command"},
        {Potential, "potential", "pot", "potential, can do ~"},
        {Passive, "passive", "psv", "～られる, passive, ~ was done to someone or something"},
        {Causative, "causative", "caus", "causative, make ~ do something, let / allow ~"},
        {CausativeAlt, "causative-alt", "caus (short)", "～す, shortened causative"},
        {CausativePassive, "causative-passive", "caus psv", "～させられる, to be made to do ~"},
        {ProvisionalConditional, "provisional-conditional", "～ば", "～ば, provisional conditional, if ~"},
        {Conditional, "conditional", "～たら", "～たら, conditional, if ~, when ~"},
        {Imperative, "imperative", "imp", "imperative, do ~ / don't do ~"},
        {Command, "command", "～なさい", "～なさい, soft command"},
        {Volitional, "volitional", "vol", "～よう, volitional / presumptive, let's do ~"},
        {Gerund, "gerund", "～ながら", "～ながら, simultaneous, while ~"},
        {Optative, "optative", "～たい", "～たい, expressing desire"},
    }
}

impl fmt::Display for VerbalForm {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.keyword().fmt(f)
    }
}

/// Politeness and polarity of an inflected form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageForm {
    Plain,
    Polite,
    PlainNegative,
    PoliteNegative,
}

impl LanguageForm {
    pub const ALL: [LanguageForm; 4] = [
        LanguageForm::Plain,
        LanguageForm::Polite,
        LanguageForm::PlainNegative,
        LanguageForm::PoliteNegative,
    ];

    /// Number of language forms.
    pub const COUNT: usize = LanguageForm::ALL.len();

    /// Index of the language form in four-column tables.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            LanguageForm::Plain => "plain",
            LanguageForm::Polite => "polite",
            LanguageForm::PlainNegative => "plain-negative",
            LanguageForm::PoliteNegative => "polite-negative",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LanguageForm::Plain => "plain",
            LanguageForm::Polite => "敬語 polite",
            LanguageForm::PlainNegative => "not",
            LanguageForm::PoliteNegative => "敬語 not",
        }
    }
}

/// One of the six conjugation bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    /// 未然形, irrealis base.
    Mizenkei,
    /// 連用形, continuative base.
    Renyoukei,
    /// 終止形, terminal base.
    Shuushikei,
    /// 連体形, attributive base.
    Rentaikei,
    /// 仮定形, hypothetical base.
    Kateikei,
    /// 命令形, imperative base.
    Meireikei,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Mizenkei,
        Slot::Renyoukei,
        Slot::Shuushikei,
        Slot::Rentaikei,
        Slot::Kateikei,
        Slot::Meireikei,
    ];

    /// Number of conjugation bases.
    pub const COUNT: usize = Slot::ALL.len();

    pub fn name(&self) -> &'static str {
        match self {
            Slot::Mizenkei => "mizenkei",
            Slot::Renyoukei => "renyoukei",
            Slot::Shuushikei => "shuushikei",
            Slot::Rentaikei => "rentaikei",
            Slot::Kateikei => "kateikei",
            Slot::Meireikei => "meireikei",
        }
    }
}

impl fmt::Display for Slot {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

type Rules = [[Option<Slot>; LanguageForm::COUNT]; VerbalForm::COUNT];

/// Which conjugation base each cell is built from, regardless of class.
#[rustfmt::skip]
static RULES: Rules = rules! {
    NonPast => [Shuushikei, Renyoukei, Mizenkei, Renyoukei],
    Past => [Renyoukei, Renyoukei, Mizenkei, Renyoukei],
    Te => [Renyoukei, Renyoukei, Mizenkei, Renyoukei],
    Potential => [Kateikei, Kateikei, Kateikei, Kateikei],
    Passive => [Mizenkei, Mizenkei, Mizenkei, Mizenkei],
    Causative => [Mizenkei, Mizenkei, Mizenkei, Mizenkei],
    CausativeAlt => [Mizenkei, Mizenkei, Mizenkei, Mizenkei],
    CausativePassive => [Mizenkei, Mizenkei, Mizenkei, Mizenkei],
    ProvisionalConditional => [Kateikei, _, Mizenkei, _],
    Conditional => [Renyoukei, Renyoukei, Mizenkei, Renyoukei],
    Imperative => [Meireikei, Renyoukei, Shuushikei, Mizenkei],
    Command => [Renyoukei, Renyoukei, Renyoukei, _],
    Volitional => [Mizenkei, Renyoukei, Shuushikei, Renyoukei],
    Gerund => [Renyoukei, _, Mizenkei, _],
    Optative => [Renyoukei, Renyoukei, Renyoukei, Renyoukei],
};

/// The conjugation base used for the given cell, or `None` if the cell is
/// grammatically inapplicable.
#[inline]
pub fn rule(form: VerbalForm, lang: LanguageForm) -> Option<Slot> {
    RULES[form as usize][lang as usize]
}

/// A single inflected form of a verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InflectedForm {
    pub kanji: String,
    pub kana: String,
    pub romaji: String,
}

/// The inflections produced for a verb.
///
/// Only contains the verbal forms which were requested, and iterates over
/// them in [`VerbalForm`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inflections {
    forms: Map<VerbalForm, [Option<InflectedForm>; LanguageForm::COUNT]>,
}

impl Inflections {
    fn new() -> Self {
        Self { forms: Map::new() }
    }

    /// Get all language forms of the given verbal form, if it was requested.
    #[inline]
    pub fn get(&self, form: VerbalForm) -> Option<&[Option<InflectedForm>; LanguageForm::COUNT]> {
        self.forms.get(form)
    }

    /// Get a single cell. Returns `None` if the form wasn't requested or the
    /// cell is inapplicable.
    pub fn cell(&self, form: VerbalForm, lang: LanguageForm) -> Option<&InflectedForm> {
        self.forms.get(form)?[lang as usize].as_ref()
    }

    /// Iterate over requested forms in order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (VerbalForm, &[Option<InflectedForm>; LanguageForm::COUNT])> {
        self.forms.iter()
    }

    /// Number of verbal forms in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Test if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Inflect `entry` into each of the requested verbal `forms`.
///
/// # Errors
///
/// Errors if a conjugation table lacks a base required by [`rule`], or if
/// the romanizer fails on a produced form. Either aborts the whole call.
pub fn inflect<I, R>(entry: &VerbEntry, forms: I, romanizer: &R) -> Result<Inflections>
where
    I: IntoIterator<Item = VerbalForm>,
    R: ?Sized + Romanizer,
{
    let group = Group::new(entry);
    let mut inflections = Inflections::new();

    for form in forms {
        if inflections.forms.contains_key(form) {
            continue;
        }

        let mut cells: [Option<InflectedForm>; LanguageForm::COUNT] = Default::default();

        for lang in LanguageForm::ALL {
            cells[lang as usize] = cell(&group, form, lang, romanizer)?;
        }

        inflections.forms.insert(form, cells);
    }

    Ok(inflections)
}

/// Inflect `entry` into every verbal form.
#[inline]
pub fn inflect_all<R>(entry: &VerbEntry, romanizer: &R) -> Result<Inflections>
where
    R: ?Sized + Romanizer,
{
    inflect(entry, VerbalForm::ALL, romanizer)
}

fn cell<C, R>(
    group: &C,
    form: VerbalForm,
    lang: LanguageForm,
    romanizer: &R,
) -> Result<Option<InflectedForm>>
where
    C: ?Sized + Conjugate,
    R: ?Sized + Romanizer,
{
    let Some(slot) = rule(form, lang) else {
        return Ok(None);
    };

    let kanji_stem = group.stem(Script::Kanji, form, lang);
    let kana_stem = group.stem(Script::Kana, form, lang);
    let kanji_conjugation = group.conjugation(Script::Kanji, slot, form, lang)?;
    let kana_conjugation = group.conjugation(Script::Kana, slot, form, lang)?;

    let Some(suffix) = group.suffix(form, lang) else {
        return Ok(None);
    };

    let suffix = assimilate(kanji_conjugation, suffix);

    let kanji = [kanji_stem, kanji_conjugation, suffix.as_ref()].concat();
    let kana = [kana_stem, kana_conjugation, suffix.as_ref()].concat();
    let romaji = romanizer.transliterate(&kana)?;

    tracing::trace!(?form, ?lang, ?slot, %kanji, %kana, %romaji, "inflected");

    Ok(Some(InflectedForm {
        kanji,
        kana,
        romaji,
    }))
}

/// Voice a leading `た` or `て` in the suffix when the conjugated syllable
/// ends in `ん`.
pub(crate) fn assimilate<'a>(conjugation: &str, suffix: &'a str) -> Cow<'a, str> {
    if text::last_char(conjugation) != Some('ん') {
        return Cow::Borrowed(suffix);
    }

    let mut chars = suffix.chars();

    let voiced = match chars.next() {
        Some('た') => 'だ',
        Some('て') => 'で',
        _ => return Cow::Borrowed(suffix),
    };

    let mut output = String::with_capacity(suffix.len());
    output.push(voiced);
    output.push_str(chars.as_str());
    Cow::Owned(output)
}
