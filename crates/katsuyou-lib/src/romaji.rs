//! Types to segment kana and transliterate it into romaji.

#[macro_use]
mod table;

#[cfg(test)]
mod tests;

use std::iter::Peekable;
use std::mem;

use crate::error::{Error, ErrorKind};
use crate::Result;

/// Something which converts a finished kana surface form into Latin script.
pub trait Romanizer: Sync {
    /// Transliterate `kana`.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::Romanize`] if the input contains something
    /// which is not kana.
    fn transliterate(&self, kana: &str) -> Result<String>;
}

/// Perform an analysis.
pub fn analyze(input: &str) -> Analysis<'_> {
    Analysis { input, offset: 0 }
}

/// Convert any katakana in `input` into hiragana.
///
/// ```
/// assert_eq!(katsuyou_lib::romaji::to_hiragana("カク"), "かく");
/// assert_eq!(katsuyou_lib::romaji::to_hiragana("書く"), "書く");
/// ```
pub fn to_hiragana(input: &str) -> String {
    analyze(input).map(|segment| segment.hiragana()).collect()
}

/// A string being analyzed.
pub struct Analysis<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Iterator for Analysis<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut it = self.input.chars();
        let a = it.next()?;
        let mut n = a.len_utf8();

        if let Some(b) = it.next() {
            let m = n + b.len_utf8();

            if is_small(b) && !is_small(a) && lookup(&self.input[..m]).is_some() {
                n = m;
            }
        }

        let (string, tail) = self.input.split_at(n);

        let segment = Segment {
            string,
            offset: self.offset,
        };

        self.input = tail;
        self.offset += n;
        Some(segment)
    }
}

/// A section that can be restructured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    string: &'a str,
    offset: usize,
}

impl<'a> Segment<'a> {
    /// The segment as it appears in the input.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.string
    }

    /// Byte offset of the segment in the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Convert the analyzed segment into hiragana.
    pub fn hiragana(&self) -> &'a str {
        macro_rules! implement_match {
            ($(($hira:literal, $kata:literal, $romaji:literal),)*) => {
                match self.string {
                    $($kata => $hira,)*
                    string => string,
                }
            }
        }

        romaji_table!(implement_match)
    }

    /// Convert the analyzed segment into katakana.
    pub fn katakana(&self) -> &'a str {
        macro_rules! implement_match {
            ($(($hira:literal, $kata:literal, $romaji:literal),)*) => {
                match self.string {
                    $($hira => $kata,)*
                    string => string,
                }
            }
        }

        romaji_table!(implement_match)
    }

    /// Romanize the analyzed segment, if it's a kana syllable.
    ///
    /// `っ`, `ん` and `ー` depend on their neighbours and are left to the
    /// [`Romanizer`].
    #[inline]
    pub fn romanize(&self) -> Option<&'static str> {
        lookup(self.string)
    }
}

impl PartialEq<str> for Segment<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.string == other
    }
}

impl PartialEq<&str> for Segment<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.string == *other
    }
}

fn lookup(string: &str) -> Option<&'static str> {
    macro_rules! implement_match {
        ($(($hira:literal, $kata:literal, $romaji:literal),)*) => {
            match string {
                $($hira | $kata => Some($romaji),)*
                _ => None,
            }
        }
    }

    romaji_table!(implement_match)
}

/// Small kana which combine with the preceeding kana.
#[inline]
fn is_small(c: char) -> bool {
    matches!(
        c,
        'ぁ' | 'ぃ'
            | 'ぅ'
            | 'ぇ'
            | 'ぉ'
            | 'ゃ'
            | 'ゅ'
            | 'ょ'
            | 'ゎ'
            | 'ァ'
            | 'ィ'
            | 'ゥ'
            | 'ェ'
            | 'ォ'
            | 'ャ'
            | 'ュ'
            | 'ョ'
            | 'ヮ'
    )
}

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn macron(vowel: char) -> Option<char> {
    Some(match vowel {
        'a' => 'ā',
        'i' => 'ī',
        'u' => 'ū',
        'e' => 'ē',
        'o' => 'ō',
        _ => return None,
    })
}

/// The Hepburn romanization system.
///
/// ```
/// use katsuyou_lib::{Hepburn, Romanizer};
///
/// let hepburn = Hepburn::traditional();
/// assert_eq!(hepburn.transliterate("しんぶん")?, "shimbun");
/// assert_eq!(hepburn.transliterate("かきましょう")?, "kakimashō");
///
/// let hepburn = Hepburn::modified();
/// assert_eq!(hepburn.transliterate("しんぶん")?, "shinbun");
/// # Ok::<_, katsuyou_lib::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hepburn {
    macrons: bool,
    labial_m: bool,
    wo: bool,
}

impl Hepburn {
    /// Traditional Hepburn, which writes `ん` as `m` before labials and `を`
    /// as `wo`.
    pub const fn traditional() -> Self {
        Self {
            macrons: true,
            labial_m: true,
            wo: true,
        }
    }

    /// Modified Hepburn, which always writes `ん` as `n` and `を` as `o`.
    pub const fn modified() -> Self {
        Self {
            macrons: true,
            labial_m: false,
            wo: false,
        }
    }

    /// Configure whether long vowels are written with macrons. If disabled
    /// they are written out in full, as in `kakimashou`.
    pub const fn with_macrons(self, macrons: bool) -> Self {
        Self { macrons, ..self }
    }

    fn romanize(&self, segment: &Segment<'_>) -> Option<&'static str> {
        match segment.as_str() {
            "を" | "ヲ" if !self.wo => Some("o"),
            _ => segment.romanize(),
        }
    }

    fn syllabic_n<'a, I>(&self, output: &mut String, segments: &mut Peekable<I>)
    where
        I: Iterator<Item = Segment<'a>>,
    {
        let next = segments
            .peek()
            .and_then(|segment| self.romanize(segment))
            .and_then(|romaji| romaji.chars().next());

        match next {
            Some('b' | 'm' | 'p') if self.labial_m => output.push('m'),
            Some('a' | 'i' | 'u' | 'e' | 'o' | 'y') => output.push_str("n'"),
            _ => output.push('n'),
        }
    }

    /// Merge `romaji` into the preceeding vowel if they form a long vowel.
    fn long_vowel(&self, output: &mut String, romaji: &str) -> bool {
        if !self.macrons {
            return false;
        }

        let long = match (output.chars().next_back(), romaji) {
            (Some('o'), "u" | "o") => 'ō',
            (Some('u'), "u") => 'ū',
            _ => return false,
        };

        output.pop();
        output.push(long);
        true
    }
}

impl Default for Hepburn {
    #[inline]
    fn default() -> Self {
        Self::traditional()
    }
}

impl Romanizer for Hepburn {
    fn transliterate(&self, kana: &str) -> Result<String> {
        let error = |at| {
            Error::new(ErrorKind::Romanize {
                input: kana.into(),
                at,
            })
        };

        let mut output = String::with_capacity(kana.len());
        let mut segments = analyze(kana).peekable();
        let mut sokuon = false;

        while let Some(segment) = segments.next() {
            match segment.as_str() {
                "っ" | "ッ" => {
                    sokuon = true;
                }
                "ん" | "ン" => {
                    sokuon = false;
                    self.syllabic_n(&mut output, &mut segments);
                }
                "ー" => {
                    let Some(vowel) = output.pop().filter(|c| is_vowel(*c)) else {
                        return Err(error(segment.offset()));
                    };

                    match macron(vowel) {
                        Some(long) if self.macrons => output.push(long),
                        _ => {
                            output.push(vowel);
                            output.push(vowel);
                        }
                    }
                }
                _ => {
                    let Some(romaji) = self.romanize(&segment) else {
                        return Err(error(segment.offset()));
                    };

                    if mem::take(&mut sokuon) {
                        match romaji.as_bytes() {
                            [b'c', b'h', ..] => output.push('t'),
                            [c, ..] if !is_vowel(char::from(*c)) => output.push(char::from(*c)),
                            _ => {}
                        }
                    }

                    if !self.long_vowel(&mut output, romaji) {
                        output.push_str(romaji);
                    }
                }
            }
        }

        Ok(output)
    }
}
