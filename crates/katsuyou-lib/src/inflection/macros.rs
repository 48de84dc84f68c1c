//! Macros to construct the static conjugation tables.

/// Build the table of conjugation bases used by each cell.
macro_rules! rules {
    (@slot _) => {
        None
    };

    (@slot $slot:ident) => {
        Some($crate::inflection::Slot::$slot)
    };

    ($($form:ident => [$($slot:tt),* $(,)?]),* $(,)?) => {{
        let mut table = [[None; $crate::inflection::LanguageForm::COUNT]; $crate::inflection::VerbalForm::COUNT];
        $(table[$crate::inflection::VerbalForm::$form as usize] = [$(rules!(@slot $slot)),*];)*
        table
    }};
}

/// Build a suffix table on top of `$base`, replacing the listed rows.
macro_rules! suffixes {
    (@cell _) => {
        None
    };

    (@cell $suffix:literal) => {
        Some($suffix)
    };

    ($base:expr, { $($form:ident => [$($cell:tt),* $(,)?]),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut table: $crate::inflection::group::Suffixes = $base;
        $(table[$crate::inflection::VerbalForm::$form as usize] = [$(suffixes!(@cell $cell)),*];)*
        table
    }};
}

/// Build a row of conjugated syllables, one per conjugation base. An
/// alternative syllable is written after a slash.
macro_rules! row {
    (@alt) => {
        None
    };

    (@alt $alternative:literal) => {
        Some($alternative)
    };

    ($($primary:literal $(/ $alternative:literal)?),* $(,)?) => {
        [$(Some($crate::inflection::group::Syllable::new($primary, row!(@alt $($alternative)?))),)*]
    };
}
