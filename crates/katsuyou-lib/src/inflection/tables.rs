//! Suffix tables.

use crate::inflection::group::Suffixes;
use crate::inflection::{LanguageForm, VerbalForm};

#[rustfmt::skip]
const GODAN_BASE: Suffixes = suffixes!([[None; LanguageForm::COUNT]; VerbalForm::COUNT], {
    NonPast => ["", "ます", "ない", "ません"],
    Past => ["た", "ました", "なかった", "ませんでした"],
    Te => ["て", "まして", "なくて", "ませんで"],
    Potential => ["る", "ます", "ない", "ません"],
    Passive => ["れる", "れます", "れない", "れません"],
    Causative => ["せる", "せます", "せない", "せません"],
    CausativeAlt => ["す", "します", "さない", "しません"],
    CausativePassive => ["せられる", "せられます", "せられない", "せられません"],
    ProvisionalConditional => ["ば", _, "なければ", _],
    Conditional => ["たら", "ましたら", "なかったら", "ませんでしたら"],
    Imperative => ["", "てください", "な", "ないでください"],
    Command => ["なさい", "なさいませ", "なさるな", _],
    Volitional => ["う", "ましょう", "まい", "ますまい"],
    Gerund => ["ながら", _, "ないで", _],
    Optative => ["たい", "たいです", "たくない", "たくありません"],
});

/// Suffixes of godan verbs.
pub(crate) static GODAN: Suffixes = GODAN_BASE;

/// Suffixes of ichidan verbs, also used by kuru and zuru.
#[rustfmt::skip]
pub(crate) static ICHIDAN: Suffixes = suffixes!(GODAN_BASE, {
    Passive => ["られる", "られます", "られない", "られません"],
    Causative => ["させる", "させます", "させない", "させません"],
    CausativeAlt => ["さす", "さします", "ささない", "さしません"],
    CausativePassive => ["させられる", "させられます", "させられない", "させられません"],
    Volitional => ["よう", "ましょう", "まい", "ますまい"],
});

/// Suffixes of suru verbs.
#[rustfmt::skip]
pub(crate) static SURU: Suffixes = suffixes!(GODAN_BASE, {
    Volitional => ["よう", "ましょう", "まい", "ますまい"],
});
