//! Rule driven conjugation of Japanese verbs.
//!
//! A [`VerbEntry`] is inflected into every combination of [`VerbalForm`] and
//! [`LanguageForm`] through [`inflect`], and each produced form is romanized
//! with a [`Romanizer`].
//!
//! ```
//! use katsuyou_lib::{Hepburn, LanguageForm, VerbClass, VerbEntry, VerbalForm};
//!
//! let entry = VerbEntry::new("書く", "かく", VerbClass::GodanK)?;
//! let inflections = katsuyou_lib::inflect(&entry, [VerbalForm::Past], &Hepburn::traditional())?;
//!
//! let past = inflections.cell(VerbalForm::Past, LanguageForm::Plain).unwrap();
//! assert_eq!(past.kanji, "書いた");
//! assert_eq!(past.romaji, "kaita");
//! # Ok::<_, katsuyou_lib::Error>(())
//! ```

pub use self::error::{Error, ErrorKind};
mod error;

pub use self::entities::VerbClass;
mod entities;

pub use self::verb::VerbEntry;
mod verb;

pub use self::inflection::{
    inflect, inflect_all, rule, InflectedForm, Inflections, LanguageForm, Slot, VerbalForm,
};
pub mod inflection;

pub use self::romaji::{Hepburn, Romanizer};
pub mod romaji;

pub use self::lexicon::{Lexicon, MemoryLexicon};
pub mod lexicon;

pub mod text;

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
