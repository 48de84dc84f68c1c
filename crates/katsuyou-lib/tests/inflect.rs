use katsuyou_lib::{
    inflect, inflect_all, rule, text, ErrorKind, Hepburn, LanguageForm, Result, Romanizer,
    VerbClass, VerbEntry, VerbalForm,
};

/// Romanizer which leaves its input untouched.
struct Identity;

impl Romanizer for Identity {
    fn transliterate(&self, kana: &str) -> Result<String> {
        Ok(kana.to_owned())
    }
}

fn entries() -> Vec<VerbEntry> {
    let entries = [
        ("食べる", "たべる", "v1"),
        ("焼く", "やく", "v5k"),
        ("行く", "いく", "v5k-s"),
        ("泳ぐ", "およぐ", "v5g"),
        ("話す", "はなす", "v5s"),
        ("待つ", "まつ", "v5t"),
        ("死ぬ", "しぬ", "v5n"),
        ("遊ぶ", "あそぶ", "v5b"),
        ("読む", "よむ", "v5m"),
        ("帰る", "かえる", "v5r"),
        ("いらっしゃる", "いらっしゃる", "v5aru"),
        ("有る", "ある", "v5r-i"),
        ("買う", "かう", "v5u"),
        ("問う", "とう", "v5u-s"),
        ("来る", "くる", "vk"),
        ("勉強する", "べんきょうする", "vs-i"),
        ("", "する", "vs-s"),
        ("信ずる", "しんずる", "vz"),
    ];

    entries
        .into_iter()
        .map(|(kanji, kana, tag)| VerbEntry::from_tag(kanji, kana, tag).unwrap())
        .collect()
}

#[test]
fn scenarios() {
    let hepburn = Hepburn::traditional();

    macro_rules! test {
        ($($kanji:literal, $kana:literal, $class:ident, $form:ident, $lang:ident => $expected:literal),* $(,)?) => {
            $({
                let entry = VerbEntry::new($kanji, $kana, VerbClass::$class).unwrap();
                let inflections = inflect(&entry, [VerbalForm::$form], &hepburn).unwrap();
                let cell = inflections.cell(VerbalForm::$form, LanguageForm::$lang).unwrap();
                assert_eq!(cell.kana, $expected, "{} {:?} {:?}", $kana, VerbalForm::$form, LanguageForm::$lang);
            })*
        };
    }

    test! {
        "焼く", "やく", GodanK, NonPast, Plain => "やく",
        "焼く", "やく", GodanK, Past, Plain => "やいた",
        "焼く", "やく", GodanK, Te, Plain => "やいて",
        "焼く", "やく", GodanK, Volitional, Plain => "やこう",
        "泳ぐ", "およぐ", GodanG, Past, Plain => "およいだ",
        "泳ぐ", "およぐ", GodanG, Te, Plain => "およいで",
        "来る", "くる", IrregularKuru, NonPast, Plain => "くる",
        "来る", "くる", IrregularKuru, Imperative, Plain => "こい",
        "来る", "くる", IrregularKuru, Potential, Plain => "これる",
        "", "する", IrregularSuruGeneral, Potential, Plain => "できる",
        "", "する", IrregularSuruGeneral, Potential, Polite => "できます",
        "", "する", IrregularSuruGeneral, Potential, PlainNegative => "できない",
        "", "する", IrregularSuruGeneral, Potential, PoliteNegative => "できません",
        "有る", "ある", GodanRI, NonPast, PlainNegative => "ない",
    }
}

#[test]
fn romaji() {
    let hepburn = Hepburn::traditional();

    let entry = VerbEntry::from_tag("書く", "かく", "v5k").unwrap();
    let inflections = inflect_all(&entry, &hepburn).unwrap();

    let cell = |form, lang| {
        inflections
            .cell(form, lang)
            .map(|cell| cell.romaji.as_str())
    };

    assert_eq!(cell(VerbalForm::Volitional, LanguageForm::Polite), Some("kakimashō"));
    assert_eq!(cell(VerbalForm::Past, LanguageForm::Plain), Some("kaita"));

    let entry = VerbEntry::from_tag("死ぬ", "しぬ", "v5n").unwrap();
    let inflections = inflect(&entry, [VerbalForm::Past], &hepburn).unwrap();
    let past = inflections.cell(VerbalForm::Past, LanguageForm::Plain).unwrap();
    assert_eq!(past.romaji, "shinda");

    let entry = VerbEntry::from_tag("切る", "きる", "v5r").unwrap();
    let inflections = inflect(&entry, [VerbalForm::Te], &hepburn).unwrap();
    let te = inflections.cell(VerbalForm::Te, LanguageForm::Plain).unwrap();
    assert_eq!(te.romaji, "kitte");
}

#[test]
fn deterministic() {
    for entry in entries() {
        let a = inflect_all(&entry, &Hepburn::traditional()).unwrap();
        let b = inflect_all(&entry, &Hepburn::traditional()).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn null_cells() {
    for entry in entries() {
        let inflections = inflect_all(&entry, &Identity).unwrap();
        assert_eq!(inflections.len(), VerbalForm::COUNT);

        for (form, cells) in inflections.iter() {
            for lang in LanguageForm::ALL {
                assert_eq!(
                    rule(form, lang).is_none(),
                    cells[lang.index()].is_none(),
                    "{entry:?}: {form:?} / {lang:?}"
                );
            }
        }
    }
}

#[test]
fn assimilation() {
    for entry in entries() {
        let inflections = inflect_all(&entry, &Identity).unwrap();

        for (_, cells) in inflections.iter() {
            for cell in cells.iter().flatten() {
                assert!(!cell.kana.contains("んた"), "{}", cell.kana);
                assert!(!cell.kana.contains("んて"), "{}", cell.kana);
            }
        }
    }
}

#[test]
fn concatenation() {
    for entry in entries() {
        let inflections = inflect_all(&entry, &Identity).unwrap();
        let ending = entry.class().ending_len();
        let kana_stem = text::trim_end(entry.kana(), ending);

        for (form, cells) in inflections.iter() {
            for cell in cells.iter().flatten() {
                // ある drops its stem in a handful of negative forms.
                if entry.class() == VerbClass::GodanRI && cell.kana.starts_with('な') {
                    continue;
                }

                assert!(
                    cell.kana.starts_with(kana_stem),
                    "{form:?}: {} does not start with {kana_stem}",
                    cell.kana
                );

                assert_eq!(cell.romaji, cell.kana);
            }
        }
    }
}

#[test]
fn kana_only_verbs() {
    let entry = VerbEntry::from_tag("", "いらっしゃる", "v5aru").unwrap();
    let inflections = inflect_all(&entry, &Hepburn::traditional()).unwrap();

    for (_, cells) in inflections.iter() {
        for cell in cells.iter().flatten() {
            assert_eq!(cell.kanji, cell.kana);
        }
    }

    let polite = inflections
        .cell(VerbalForm::NonPast, LanguageForm::Polite)
        .unwrap();

    assert_eq!(polite.kana, "いらっしゃいます");
    assert_eq!(polite.romaji, "irasshaimasu");
}

#[test]
fn errors() {
    let error = VerbEntry::from_tag("書く", "かく", "v5x").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnknownVerbClass(tag) if &**tag == "v5x"));

    let error = VerbEntry::from_tag("来る", "る", "vk").unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorKind::ReadingTooShort {
            class: VerbClass::IrregularKuru,
            ..
        }
    ));

    assert!(VerbEntry::from_tag("", "", "v1").is_err());

    let entry = VerbEntry::from_tag("書く", "書く", "v5k").unwrap();
    let error = inflect_all(&entry, &Hepburn::traditional()).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Romanize { at: 0, .. }));
}

#[test]
fn serialize() {
    let entry = VerbEntry::from_tag("食べる", "たべる", "v1").unwrap();
    let inflections = inflect(&entry, [VerbalForm::ProvisionalConditional], &Hepburn::traditional()).unwrap();

    let json = serde_json::to_value(&inflections).unwrap();
    let cells = &json["provisional-conditional"];

    assert_eq!(cells[0]["kana"], "たべれば");
    assert!(cells[1].is_null());
    assert_eq!(cells[2]["romaji"], "tabenakereba");

    let entry: VerbEntry =
        serde_json::from_str(r#"{"kanji": "食べる", "kana": "たべる", "class": "v1"}"#).unwrap();

    assert_eq!(entry.class(), VerbClass::Ichidan);
    assert!(serde_json::from_str::<VerbEntry>(r#"{"kana": "たべる", "class": "v0"}"#).is_err());
}
