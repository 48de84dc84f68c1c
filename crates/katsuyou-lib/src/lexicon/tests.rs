use crate::{ErrorKind, VerbClass, VerbEntry};

use super::{fold, Lexicon, MemoryLexicon};

const TOML: &str = r#"
[[verb]]
kanji = "書く"
kana = "かく"
class = "v5k"

[[verb]]
kanji = "思う"
kana = "おもう"
class = "v5u"

[[verb]]
kana = "する"
class = "vs-i"

[[verb]]
kanji = "新聞る"
kana = "しんぶんる"
class = "v1"

[[verb]]
kanji = "壊れ"
kana = "こわれ"
class = "v9"

[[verb]]
kanji = "来る"
kana = "る"
class = "vk"
"#;

fn kana(entries: Vec<&VerbEntry>) -> Vec<&str> {
    entries.into_iter().map(VerbEntry::kana).collect()
}

#[test]
fn skips_bad_rows() {
    let lexicon = MemoryLexicon::from_toml(TOML).unwrap();
    assert_eq!(lexicon.len(), 4);

    let classes = lexicon.iter().map(VerbEntry::class).collect::<Vec<_>>();

    assert_eq!(
        classes,
        [
            VerbClass::GodanK,
            VerbClass::GodanU,
            VerbClass::IrregularSuruGeneral,
            VerbClass::Ichidan
        ]
    );
}

#[test]
fn lookup() {
    let lexicon = MemoryLexicon::from_toml(TOML).unwrap();

    assert_eq!(kana(lexicon.lookup("書く")), ["かく"]);
    assert_eq!(kana(lexicon.lookup("かく")), ["かく"]);
    assert_eq!(kana(lexicon.lookup("カク")), ["かく"]);
    assert_eq!(kana(lexicon.lookup("kaku")), ["かく"]);
    assert_eq!(kana(lexicon.lookup(" KAKU ")), ["かく"]);
    assert_eq!(kana(lexicon.lookup("する")), ["する"]);
    assert_eq!(kana(lexicon.lookup("suru")), ["する"]);
    assert!(lexicon.lookup("").is_empty());
    assert!(lexicon.lookup("はしる").is_empty());
}

#[test]
fn lookup_long_vowels() {
    let lexicon = MemoryLexicon::from_toml(TOML).unwrap();

    assert_eq!(kana(lexicon.lookup("omou")), ["おもう"]);
    assert_eq!(kana(lexicon.lookup("omō")), ["おもう"]);
    assert_eq!(kana(lexicon.lookup("omoo")), ["おもう"]);
    assert_eq!(kana(lexicon.lookup("omô")), ["おもう"]);
}

#[test]
fn lookup_syllabic_n() {
    let lexicon = MemoryLexicon::from_toml(TOML).unwrap();

    assert_eq!(kana(lexicon.lookup("shimbunru")), ["しんぶんる"]);
    assert_eq!(kana(lexicon.lookup("shinbunru")), ["しんぶんる"]);
}

#[test]
fn from_json() {
    let lexicon = MemoryLexicon::from_json(
        r#"{"verb": [{"kanji": "食べる", "kana": "たべる", "class": "v1"}, {"kana": "ある", "class": "v5r-i"}]}"#,
    )
    .unwrap();

    assert_eq!(lexicon.len(), 2);
    assert_eq!(kana(lexicon.lookup("taberu")), ["たべる"]);
    assert_eq!(kana(lexicon.lookup("aru")), ["ある"]);
}

#[test]
fn parse_errors() {
    let error = MemoryLexicon::from_toml("[[verb]\n").err().unwrap();
    assert!(matches!(error.kind(), ErrorKind::Toml(..)));

    let error = MemoryLexicon::from_json("{").err().unwrap();
    assert!(matches!(error.kind(), ErrorKind::Json(..)));
}

#[test]
fn folding() {
    assert_eq!(fold("Kyōto"), "kyoto");
    assert_eq!(fold("kyouto"), "kyoto");
    assert_eq!(fold("kin'en"), "kinen");
    assert_eq!(fold("kūki"), "kuki");
}
