use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

macro_rules! entity {
    (
        $test:ident,

        $(#[$($meta:meta)*])*
        $vis:vis enum $name:ident {
            $(<$variant:ident $entity:literal $doc:literal>)*
        }
    ) => {
        $(#[$($meta)*])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        $vis enum $name {
            $(
                #[doc = $doc]
                #[serde(rename = $entity)]
                $variant,
            )*
        }

        impl $name {
            $vis const VALUES: &'static [$name] = &[
                $($name::$variant,)*
            ];

            /// Name of the variant.
            $vis fn variant(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                }
            }

            /// The JMdict keyword of the entity.
            $vis fn keyword(&self) -> &'static str {
                match self {
                    $($name::$variant => $entity,)*
                }
            }

            /// Human readable help for the entity.
            $vis fn help(&self) -> &'static str {
                match self {
                    $($name::$variant => $doc,)*
                }
            }

            /// Parse the entity from its keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($entity => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        #[test]
        fn $test() {
            $(
                assert_eq!($name::parse_keyword($entity), Some($name::$variant), "Failed to parse `{}`", $entity);
                assert_eq!($name::$variant.keyword(), $entity);
            )*
        }
    }
}

entity! {
    test_verb_class,

    /// The grammatical class of a verb, which decides how it conjugates.
    pub enum VerbClass {
        <Ichidan "v1" "Ichidan verb">
        <GodanK "v5k" "Godan verb with 'ku' ending">
        <GodanKS "v5k-s" "Godan verb - Iku/Yuku special class">
        <GodanG "v5g" "Godan verb with 'gu' ending">
        <GodanS "v5s" "Godan verb with 'su' ending">
        <GodanT "v5t" "Godan verb with 'tsu' ending">
        <GodanN "v5n" "Godan verb with 'nu' ending">
        <GodanB "v5b" "Godan verb with 'bu' ending">
        <GodanM "v5m" "Godan verb with 'mu' ending">
        <GodanR "v5r" "Godan verb with 'ru' ending">
        <GodanAru "v5aru" "Godan verb - -aru special class">
        <GodanRI "v5r-i" "Godan verb with 'ru' ending (irregular verb)">
        <GodanU "v5u" "Godan verb with 'u' ending">
        <GodanUS "v5u-s" "Godan verb with 'u' ending (special class)">
        <IrregularKuru "vk" "Kuru verb - special class">
        <IrregularSuruGeneral "vs-i" "suru verb - included">
        <IrregularSuruSpecial "vs-s" "suru verb - special class">
        <IrregularZuru "vz" "Ichidan verb - zuru verb (alternative form of -jiru verbs)">
    }
}

impl VerbClass {
    /// Number of trailing characters making up the dictionary ending, which
    /// is stripped to form the stem.
    pub fn ending_len(&self) -> usize {
        match self {
            VerbClass::IrregularKuru
            | VerbClass::IrregularSuruGeneral
            | VerbClass::IrregularSuruSpecial
            | VerbClass::IrregularZuru => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for VerbClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.keyword().fmt(f)
    }
}

impl FromStr for VerbClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match VerbClass::parse_keyword(s) {
            Some(class) => Ok(class),
            None => Err(Error::new(ErrorKind::UnknownVerbClass(s.into()))),
        }
    }
}
