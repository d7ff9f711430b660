use crate::{
    dictionary::{ConversionTable, Direction, build},
    pattern::{CompiledPattern, PatternCompileError, compile},
    pipeline::{LongVowelStyle, Pipeline, post_processing, pre_processing},
    stage::StageError,
    substitute::{substitute, substitute_runs},
    table::{TableError, TableId, validate_table},
};
use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("malformed table: {0}")]
    MalformedTable(#[from] TableError),

    #[error("cannot compile the {direction} pattern: {source}")]
    Pattern {
        direction: ConversionKind,
        #[source]
        source: PatternCompileError,
    },

    #[error("cannot build phonetic rules: {0}")]
    Rule(#[from] StageError),
}

/// The table-backed conversion directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    HiraganaToKatakana,
    KatakanaToHiragana,
    RomajiToKatakana,
    KatakanaToRomaji,
    RomajiToZenkaku,
}

impl ConversionKind {
    #[inline(always)]
    pub const fn name(self) -> &'static str {
        match self {
            ConversionKind::HiraganaToKatakana => "hiragana→katakana",
            ConversionKind::KatakanaToHiragana => "katakana→hiragana",
            ConversionKind::RomajiToKatakana => "romaji→katakana",
            ConversionKind::KatakanaToRomaji => "katakana→romaji",
            ConversionKind::RomajiToZenkaku => "romaji→zenkaku",
        }
    }

    /// Base table, assist table and insertion direction.
    const fn source(self) -> (TableId, TableId, Direction) {
        match self {
            ConversionKind::HiraganaToKatakana => {
                (TableId::Hiragana, TableId::HiraganaAssist, Direction::Forward)
            }
            ConversionKind::KatakanaToHiragana => {
                (TableId::Hiragana, TableId::KatakanaAssist, Direction::Reverse)
            }
            ConversionKind::RomajiToKatakana => {
                (TableId::Romaji, TableId::RomajiAssist, Direction::Forward)
            }
            ConversionKind::KatakanaToRomaji => {
                (TableId::Romaji, TableId::KanaAssist, Direction::Reverse)
            }
            ConversionKind::RomajiToZenkaku => {
                (TableId::Zenkaku, TableId::ZenkakuAssist, Direction::Forward)
            }
        }
    }
}

impl std::fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A merged table and the pattern matching its keys.
#[derive(Debug, Clone)]
struct Converter {
    table: ConversionTable,
    pattern: CompiledPattern,
}

impl Converter {
    fn build(kind: ConversionKind) -> Result<Self, InitError> {
        let (base, assist, direction) = kind.source();
        let (table, keys) = build(base.table(), assist.table(), direction);
        let pattern = compile(&keys).map_err(|source| InitError::Pattern {
            direction: kind,
            source,
        })?;
        debug!(
            conversion = kind.name(),
            keys = pattern.key_count(),
            "compiled conversion pattern"
        );
        Ok(Self { table, pattern })
    }

    #[inline(always)]
    fn convert<'a>(&self, text: &'a str) -> Cow<'a, str> {
        substitute(&self.pattern, &self.table, text)
    }

    /// Convert, then run `post` over each converted span only.
    #[inline(always)]
    fn convert_with<'a>(&self, text: &'a str, post: &Pipeline) -> Cow<'a, str> {
        substitute_runs(&self.pattern, &self.table, text, post)
    }
}

/// Converts between hiragana, katakana, romaji and zenkaku.
///
/// Build once with [`initialize`] or [`KanaConverter::builder`], then share by
/// reference: every conversion takes `&self` and the converter is
/// `Send + Sync`. Conversions never fail; characters no table knows pass
/// through unchanged.
#[derive(Debug, Clone)]
pub struct KanaConverter {
    hiragana_to_katakana: Converter,
    katakana_to_hiragana: Converter,
    romaji_to_katakana: Converter,
    katakana_to_romaji: Converter,
    romaji_to_zenkaku: Converter,
    pre: Pipeline,
    post: Pipeline,
}

/// Build a converter with the default configuration.
pub fn initialize() -> Result<KanaConverter, InitError> {
    KanaConverter::builder().build()
}

impl KanaConverter {
    pub fn builder() -> KanaConverterBuilder {
        KanaConverterBuilder::default()
    }

    /// `いあん` → `イアン`
    pub fn hiragana_to_katakana<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.hiragana_to_katakana.convert(text)
    }

    /// `イアン` → `いあん`
    pub fn katakana_to_hiragana<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.katakana_to_hiragana.convert(text)
    }

    /// `ian` → `イアン`
    pub fn romaji_to_katakana<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let pre = self.pre.process(Cow::Borrowed(text));
        then(pre, |s| self.romaji_to_katakana.convert(s))
    }

    /// `ian` → `いあん`
    pub fn romaji_to_hiragana<'a>(&self, text: &'a str) -> Cow<'a, str> {
        then(self.romaji_to_katakana(text), |s| {
            self.katakana_to_hiragana(s)
        })
    }

    /// `ian` → `ｉａｎ`. Case is preserved and no phonetic rules run.
    pub fn romaji_to_zenkaku<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.romaji_to_zenkaku.convert(text)
    }

    /// `イアン` → `ian`. Text outside the katakana runs is left as it is.
    pub fn katakana_to_romaji<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.katakana_to_romaji.convert_with(text, &self.post)
    }

    /// `いあん` → `ian`
    pub fn hiragana_to_romaji<'a>(&self, text: &'a str) -> Cow<'a, str> {
        then(self.hiragana_to_katakana(text), |s| {
            self.katakana_to_romaji(s)
        })
    }
}

/// Feed the result of one conversion into the next, staying borrowed when
/// neither step changed anything.
#[inline]
fn then<'a>(first: Cow<'a, str>, next: impl for<'b> Fn(&'b str) -> Cow<'b, str>) -> Cow<'a, str> {
    match first {
        Cow::Borrowed(s) => next(s),
        Cow::Owned(s) => Cow::Owned(next(&s).into_owned()),
    }
}

#[derive(Debug, Default)]
pub struct KanaConverterBuilder {
    long_vowels: LongVowelStyle,
}

impl KanaConverterBuilder {
    /// How long vowels are spelled by the `*_to_romaji` conversions.
    pub fn long_vowels(mut self, style: LongVowelStyle) -> Self {
        self.long_vowels = style;
        self
    }

    pub fn build(self) -> Result<KanaConverter, InitError> {
        for id in TableId::ALL {
            validate_table(id)?;
        }
        let converter = KanaConverter {
            hiragana_to_katakana: Converter::build(ConversionKind::HiraganaToKatakana)?,
            katakana_to_hiragana: Converter::build(ConversionKind::KatakanaToHiragana)?,
            romaji_to_katakana: Converter::build(ConversionKind::RomajiToKatakana)?,
            katakana_to_romaji: Converter::build(ConversionKind::KatakanaToRomaji)?,
            romaji_to_zenkaku: Converter::build(ConversionKind::RomajiToZenkaku)?,
            pre: pre_processing()?,
            post: post_processing(self.long_vowels)?,
        };
        debug!(
            long_vowels = ?self.long_vowels,
            pre = ?converter.pre,
            post = ?converter.post,
            "kana converter ready"
        );
        Ok(converter)
    }
}
