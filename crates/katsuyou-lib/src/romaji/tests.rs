use crate::ErrorKind;

use super::{analyze, to_hiragana, Hepburn, Romanizer};

#[test]
fn segmentations() {
    assert_eq!(
        analyze("ひゃくりょく").collect::<Vec<_>>(),
        ["ひゃ", "く", "りょ", "く"]
    );

    assert_eq!(
        analyze("ファイル").collect::<Vec<_>>(),
        ["ファ", "イ", "ル"]
    );

    assert_eq!(analyze("っちゃ").collect::<Vec<_>>(), ["っ", "ちゃ"]);
    assert_eq!(analyze("んゃ").collect::<Vec<_>>(), ["ん", "ゃ"]);
}

#[test]
fn offsets() {
    let offsets = analyze("かきゃく")
        .map(|segment| segment.offset())
        .collect::<Vec<_>>();

    assert_eq!(offsets, [0, 3, 9]);
}

#[test]
fn romanization() {
    macro_rules! test {
        ($(($hira:literal, $kata:literal, $romaji:literal),)*) => {
            $(assert_eq!(
                analyze($hira).map(|segment| segment.romanize()).collect::<Vec<_>>(),
                [Some($romaji)]
            );)*

            $(assert_eq!(
                analyze($kata).map(|segment| segment.romanize()).collect::<Vec<_>>(),
                [Some($romaji)]
            );)*
        };
    }

    romaji_table!(test);
}

#[test]
fn hiragana() {
    macro_rules! test {
        ($(($hira:literal, $kata:literal, $romaji:literal),)*) => {
            $(
                assert_eq!(to_hiragana($kata), $hira);
                assert_eq!(to_hiragana($hira), $hira);
            )*
        };
    }

    romaji_table!(test);

    assert_eq!(to_hiragana("コーヒー"), "こーひー");
}

#[test]
fn katakana() {
    macro_rules! test {
        ($(($hira:literal, $kata:literal, $romaji:literal),)*) => {
            $(assert_eq!(
                analyze($hira).map(|segment| segment.katakana()).collect::<String>(),
                $kata
            );)*
        };
    }

    romaji_table!(test);
}

#[test]
fn hepburn() {
    macro_rules! test {
        ($hepburn:expr, $($kana:literal => $romaji:literal),* $(,)?) => {
            $(assert_eq!($hepburn.transliterate($kana).unwrap(), $romaji, "romanizing {}", $kana);)*
        };
    }

    test! {
        Hepburn::traditional(),
        "かきましょう" => "kakimashō",
        "しんだ" => "shinda",
        "きって" => "kitte",
        "まっちゃ" => "matcha",
        "きんえん" => "kin'en",
        "こんや" => "kon'ya",
        "しんぶん" => "shimbun",
        "さんぽ" => "sampo",
        "おおきい" => "ōkii",
        "きゅうり" => "kyūri",
        "コーヒー" => "kōhī",
        "ほんをよむ" => "honwoyomu",
        "おもう" => "omō",
        "" => "",
    }

    test! {
        Hepburn::modified(),
        "しんぶん" => "shinbun",
        "ほんをよむ" => "hon'oyomu",
        "きんえん" => "kin'en",
    }

    test! {
        Hepburn::traditional().with_macrons(false),
        "かきましょう" => "kakimashou",
        "コーヒー" => "koohii",
    }
}

#[test]
fn hepburn_errors() {
    let error = Hepburn::traditional().transliterate("か書く").unwrap_err();

    match error.kind() {
        ErrorKind::Romanize { input, at } => {
            assert_eq!(&**input, "か書く");
            assert_eq!(*at, 3);
        }
        kind => panic!("unexpected error: {kind}"),
    }

    assert!(Hepburn::traditional().transliterate("ーか").is_err());
}
