//! Phonetic correction rules for romaji irregularities.
//!
//! Each rule is a regex matcher plus a rewrite. Rules are applied in a fixed
//! order by [`crate::pipeline`]; later rules rely on the shape earlier rules
//! leave behind (e.g. [`small_tsu`] assumes [`labial_nasal`] already turned
//! `mm` into `nm`).
use crate::stage::{Stage, StageError};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// How a match is rewritten.
#[derive(Debug, Clone, Copy)]
pub enum Rewrite {
    /// A `regex` replacement template (`$1` expands to the first group).
    Template(&'static str),
    /// Computed from the captures.
    With(fn(&Captures<'_>) -> String),
}

/// One targeted find/replace step.
#[derive(Debug, Clone)]
pub struct PhoneticRule {
    name: &'static str,
    matcher: Regex,
    rewrite: Rewrite,
}

impl PhoneticRule {
    pub fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Result<Self, StageError> {
        let matcher = Regex::new(pattern).map_err(|e| StageError::Compile(name, e))?;
        Ok(Self {
            name,
            matcher,
            rewrite,
        })
    }

    #[inline(always)]
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }
}

impl Stage for PhoneticRule {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let rewritten = match self.rewrite {
            Rewrite::Template(template) => self.matcher.replace_all(&text, template),
            Rewrite::With(f) => self.matcher.replace_all(&text, f),
        };
        // Detach from `text` before deciding which one to return
        let owned = match rewritten {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        match owned {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Pre-processing: romaji as typed → romaji the romaji table understands
// ─────────────────────────────────────────────────────────────────────────────

/// `m` before a labial is the moraic nasal: `shimbun` → `shinbun`.
pub fn labial_nasal() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new("labial_nasal", "m([bmp])", Rewrite::Template("n$1"))
}

/// A doubled consonant becomes a small tsu: `gakkou` → `gaxtukou`,
/// `matcha` → `maxtucha`.
///
/// `n` is excluded (`nn` is two nasals, not a geminate). `m` is included
/// because [`labial_nasal`] must already have consumed every `mm`.
pub fn small_tsu() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new(
        "small_tsu",
        "tch|bb|cc|dd|ff|gg|hh|jj|kk|mm|pp|rr|ss|tt|vv|ww|yy|zz",
        Rewrite::With(insert_small_tsu),
    )
}

fn insert_small_tsu(caps: &Captures<'_>) -> String {
    let matched = &caps[0];
    let consonant = if matched == "tch" { "ch" } else { &matched[..1] };
    format!("xtu{consonant}")
}

/// Macron and circumflex vowels mark long vowels: `tōkyō` → `to-kyo-`.
pub fn long_vowel() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new("long_vowel", "[āīūēōâîûêô]", Rewrite::With(expand_long_vowel))
}

fn expand_long_vowel(caps: &Captures<'_>) -> String {
    let vowel = match &caps[0] {
        "ā" | "â" => 'a',
        "ī" | "î" => 'i',
        "ū" | "û" => 'u',
        "ē" | "ê" => 'e',
        _ => 'o',
    };
    format!("{vowel}-")
}

// ─────────────────────────────────────────────────────────────────────────────
//  Post-processing: raw table output → readable Hepburn
// ─────────────────────────────────────────────────────────────────────────────

/// A small tsu before a consonant doubles it: `gaxtukou` → `gakkou`.
/// `ch` doubles as `tch`.
pub fn geminate() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new(
        "geminate",
        "xtu([bcdfghjkmprstvwyz])",
        Rewrite::With(double_consonant),
    )
}

fn double_consonant(caps: &Captures<'_>) -> String {
    match &caps[1] {
        "c" => "tc".to_owned(),
        c => c.repeat(2),
    }
}

/// A small tsu with nothing to double (word-final, before a vowel) is
/// spelled out: `axtu` → `axtsu`.
pub fn small_tsu_marker() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new("small_tsu_marker", "xtu", Rewrite::Template("xtsu"))
}

/// A vowel followed by the long-vowel mark takes a macron: `ko-hi-` → `kōhī`.
pub fn long_vowel_mark() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new("long_vowel_mark", "([aiueo])-", Rewrite::With(add_macron))
}

fn add_macron(caps: &Captures<'_>) -> String {
    macron(&caps[1]).to_owned()
}

fn macron(vowel: &str) -> &'static str {
    match vowel {
        "a" => "ā",
        "i" => "ī",
        "u" => "ū",
        "e" => "ē",
        _ => "ō",
    }
}

/// `n'` is what the kana table emits for `ン`. The apostrophe is kept only
/// where `n` would otherwise be read together with the next letter
/// (`kin'en`, `kan'yu`); everywhere else it is dropped (`shinbun`, `ian`).
///
/// The lookahead is an optional group rather than a consumed character, so
/// `n'n'` becomes `nn`.
pub fn syllabic_n() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new("syllabic_n", "n'([aiueoy]?)", Rewrite::With(normalize_n))
}

fn normalize_n(caps: &Captures<'_>) -> String {
    match &caps[1] {
        "" => "n".to_owned(),
        next => format!("n'{next}"),
    }
}

/// Doubled vowels contract: `oo`/`ou` → `ō`, `uu` → `ū`.
pub fn doubled_vowel() -> Result<PhoneticRule, StageError> {
    PhoneticRule::new("doubled_vowel", "oo|ou|uu", Rewrite::With(contract_vowels))
}

fn contract_vowels(caps: &Captures<'_>) -> String {
    macron(&caps[0][..1]).to_owned()
}
