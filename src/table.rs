//! Table store: the static script mappings every conversion is built from.
//!
//! Tables are `phf` ordered maps so that iteration follows declaration order.
//! That order matters only when a table is reversed and several keys share a
//! value: the entry declared last wins.
pub mod data;

use thiserror::Error;

/// A static, insertion-ordered mapping between two scripts.
pub type StaticTable = phf::OrderedMap<&'static str, &'static str>;

/// Which static table an entry came from. Used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Romaji,
    RomajiAssist,
    KanaAssist,
    Hiragana,
    HiraganaAssist,
    KatakanaAssist,
    Zenkaku,
    ZenkakuAssist,
}

impl TableId {
    pub const ALL: [TableId; 8] = [
        TableId::Romaji,
        TableId::RomajiAssist,
        TableId::KanaAssist,
        TableId::Hiragana,
        TableId::HiraganaAssist,
        TableId::KatakanaAssist,
        TableId::Zenkaku,
        TableId::ZenkakuAssist,
    ];

    #[inline(always)]
    pub const fn name(self) -> &'static str {
        match self {
            TableId::Romaji => "romaji",
            TableId::RomajiAssist => "romaji_assist",
            TableId::KanaAssist => "kana_assist",
            TableId::Hiragana => "hiragana",
            TableId::HiraganaAssist => "hiragana_assist",
            TableId::KatakanaAssist => "katakana_assist",
            TableId::Zenkaku => "zenkaku",
            TableId::ZenkakuAssist => "zenkaku_assist",
        }
    }

    #[inline(always)]
    pub fn table(self) -> &'static StaticTable {
        match self {
            TableId::Romaji => &data::ROMAJI,
            TableId::RomajiAssist => &data::ROMAJI_ASSIST,
            TableId::KanaAssist => &data::KANA_ASSIST,
            TableId::Hiragana => &data::HIRAGANA,
            TableId::HiraganaAssist => &data::HIRAGANA_ASSIST,
            TableId::KatakanaAssist => &data::KATAKANA_ASSIST,
            TableId::Zenkaku => &data::ZENKAKU,
            TableId::ZenkakuAssist => &data::ZENKAKU_ASSIST,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table `{0}` has an entry with an empty key")]
    EmptyKey(&'static str),

    #[error("table `{0}` maps `{1}` to an empty value")]
    EmptyValue(&'static str, &'static str),
}

/// Reject entries that would make a table unusable in either direction.
///
/// An empty key compiles into a pattern that matches everywhere, and an empty
/// value becomes an empty key once the table is reversed.
pub fn validate_table(id: TableId) -> Result<(), TableError> {
    validate_entries(id.name(), id.table().entries())
}

pub(crate) fn validate_entries<'t>(
    name: &'static str,
    entries: impl IntoIterator<Item = (&'t &'static str, &'t &'static str)>,
) -> Result<(), TableError> {
    for (key, value) in entries {
        if key.is_empty() {
            return Err(TableError::EmptyKey(name));
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue(name, *key));
        }
    }
    Ok(())
}
