//! Static conversion tables.
//!
//! Every table is written in one orientation and reversed by
//! [`crate::dictionary::build`] when the opposite direction is needed.
//! Where several romaji spellings share a kana, the Hepburn spelling is listed
//! last so it wins when the table is reversed.

use super::StaticTable;
use phf::phf_ordered_map;

/// Romaji syllables to katakana.
pub static ROMAJI: StaticTable = phf_ordered_map! {
    "a" => "ア", "i" => "イ", "u" => "ウ", "e" => "エ", "o" => "オ",
    "ka" => "カ", "ki" => "キ", "ku" => "ク", "ke" => "ケ", "ko" => "コ",
    "si" => "シ", "sa" => "サ", "shi" => "シ", "su" => "ス", "se" => "セ", "so" => "ソ",
    "ti" => "チ", "tu" => "ツ", "ta" => "タ",
    "chi" => "チ",
    "tsu" => "ツ", "te" => "テ", "to" => "ト",
    "na" => "ナ", "ni" => "ニ", "nu" => "ヌ", "ne" => "ネ", "no" => "ノ",
    "hu" => "フ", "ha" => "ハ", "hi" => "ヒ",
    "fu" => "フ",
    "he" => "ヘ", "ho" => "ホ",
    "ma" => "マ", "mi" => "ミ", "mu" => "ム", "me" => "メ", "mo" => "モ",
    "ya" => "ヤ", "yu" => "ユ", "yo" => "ヨ",
    "ra" => "ラ", "ri" => "リ", "ru" => "ル", "re" => "レ", "ro" => "ロ",
    "wa" => "ワ", "wi" => "ヰ", "we" => "ヱ", "wo" => "ヲ",
    "n'" => "ン", "n" => "ン",
    "ga" => "ガ", "gi" => "ギ", "gu" => "グ", "ge" => "ゲ", "go" => "ゴ",
    "zi" => "ジ", "za" => "ザ",
    "ji" => "ジ",
    "zu" => "ズ", "ze" => "ゼ", "zo" => "ゾ",
    "da" => "ダ", "di" => "ヂ", "du" => "ヅ", "de" => "デ", "do" => "ド",
    "ba" => "バ", "bi" => "ビ", "bu" => "ブ", "be" => "ベ", "bo" => "ボ",
    "pa" => "パ", "pi" => "ピ", "pu" => "プ", "pe" => "ペ", "po" => "ポ",
    "va" => "ヴァ", "vi" => "ヴィ", "vu" => "ヴ", "ve" => "ヴェ", "vo" => "ヴォ",
    "kya" => "キャ", "kyu" => "キュ", "kyo" => "キョ",
    "sya" => "シャ", "syu" => "シュ", "syo" => "ショ", "sha" => "シャ", "shu" => "シュ", "sho" => "ショ",
    "tya" => "チャ", "tyu" => "チュ", "tyo" => "チョ",
    "cha" => "チャ", "chu" => "チュ", "cho" => "チョ",
    "nya" => "ニャ", "nyu" => "ニュ", "nyo" => "ニョ",
    "hya" => "ヒャ", "hyu" => "ヒュ", "hyo" => "ヒョ",
    "mya" => "ミャ", "myu" => "ミュ", "myo" => "ミョ",
    "rya" => "リャ", "ryu" => "リュ", "ryo" => "リョ",
    "gya" => "ギャ", "gyu" => "ギュ", "gyo" => "ギョ",
    "zya" => "ジャ", "zyu" => "ジュ", "zyo" => "ジョ",
    "jya" => "ジャ", "jyu" => "ジュ", "jyo" => "ジョ", "ja" => "ジャ", "ju" => "ジュ", "jo" => "ジョ",
    "dya" => "ヂャ", "dyu" => "ヂュ", "dyo" => "ヂョ",
    "bya" => "ビャ", "byu" => "ビュ", "byo" => "ビョ",
    "pya" => "ピャ", "pyu" => "ピュ", "pyo" => "ピョ",
    "she" => "シェ",
    "je" => "ジェ",
    "che" => "チェ",
    "fa" => "ファ", "fi" => "フィ", "fe" => "フェ", "fo" => "フォ",
    "tsa" => "ツァ", "tsi" => "ツィ", "tse" => "ツェ", "tso" => "ツォ", "thi" => "ティ",
    "dhi" => "ディ",
    "la" => "ァ", "li" => "ィ", "lu" => "ゥ", "le" => "ェ", "lo" => "ォ",
    "xa" => "ァ", "xi" => "ィ", "xu" => "ゥ", "xe" => "ェ", "xo" => "ォ",
    "lya" => "ャ", "lyu" => "ュ", "lyo" => "ョ",
    "xya" => "ャ", "xyu" => "ュ", "xyo" => "ョ",
    "ltsu" => "ッ", "ltu" => "ッ",
    "xtsu" => "ッ", "xtu" => "ッ",
    "lwa" => "ヮ",
    "xwa" => "ヮ", "xka" => "ヵ", "xke" => "ヶ",
    "-" => "ー",
};

/// Wāpuro sequences that override or extend [`ROMAJI`] when reading romaji.
pub static ROMAJI_ASSIST: StaticTable = phf_ordered_map! {
    "wi" => "ウィ", "we" => "ウェ", "kwa" => "クァ", "gwa" => "グァ", "thu" => "テュ",
    "dhu" => "デュ", "twu" => "トゥ", "dwu" => "ドゥ", "fyu" => "フュ", "ye" => "イェ",
};

/// Romanizations for kana → romaji that reversing [`ROMAJI`] gets wrong or
/// cannot produce.
///
/// Written romaji → kana like [`ROMAJI`] and always reversed. `ン` and `ッ`
/// get the markers the post-processing rules look for.
pub static KANA_ASSIST: StaticTable = phf_ordered_map! {
    "n'" => "ン", "xtu" => "ッ",
    "wi" => "ウィ", "we" => "ウェ", "kwa" => "クァ", "gwa" => "グァ", "thu" => "テュ",
    "dhu" => "デュ", "twu" => "トゥ", "dwu" => "ドゥ", "fyu" => "フュ", "ye" => "イェ",
};

/// Hiragana to katakana, one character each.
pub static HIRAGANA: StaticTable = phf_ordered_map! {
    "ぁ" => "ァ", "あ" => "ア", "ぃ" => "ィ", "い" => "イ", "ぅ" => "ゥ", "う" => "ウ", "ぇ" => "ェ", "え" => "エ",
    "ぉ" => "ォ", "お" => "オ", "か" => "カ", "が" => "ガ", "き" => "キ", "ぎ" => "ギ", "く" => "ク", "ぐ" => "グ",
    "け" => "ケ", "げ" => "ゲ", "こ" => "コ", "ご" => "ゴ", "さ" => "サ", "ざ" => "ザ", "し" => "シ", "じ" => "ジ",
    "す" => "ス", "ず" => "ズ", "せ" => "セ", "ぜ" => "ゼ", "そ" => "ソ", "ぞ" => "ゾ", "た" => "タ", "だ" => "ダ",
    "ち" => "チ", "ぢ" => "ヂ", "っ" => "ッ", "つ" => "ツ", "づ" => "ヅ", "て" => "テ", "で" => "デ", "と" => "ト",
    "ど" => "ド", "な" => "ナ", "に" => "ニ", "ぬ" => "ヌ", "ね" => "ネ", "の" => "ノ", "は" => "ハ", "ば" => "バ",
    "ぱ" => "パ", "ひ" => "ヒ", "び" => "ビ", "ぴ" => "ピ", "ふ" => "フ", "ぶ" => "ブ", "ぷ" => "プ", "へ" => "ヘ",
    "べ" => "ベ", "ぺ" => "ペ", "ほ" => "ホ", "ぼ" => "ボ", "ぽ" => "ポ", "ま" => "マ", "み" => "ミ", "む" => "ム",
    "め" => "メ", "も" => "モ", "ゃ" => "ャ", "や" => "ヤ", "ゅ" => "ュ", "ゆ" => "ユ", "ょ" => "ョ", "よ" => "ヨ",
    "ら" => "ラ", "り" => "リ", "る" => "ル", "れ" => "レ", "ろ" => "ロ", "ゎ" => "ヮ", "わ" => "ワ", "ゐ" => "ヰ",
    "ゑ" => "ヱ", "を" => "ヲ", "ん" => "ン", "ゔ" => "ヴ", "ゕ" => "ヵ", "ゖ" => "ヶ", "ゝ" => "ヽ", "ゞ" => "ヾ",
};

/// Hiragana digraphs without a single katakana counterpart.
pub static HIRAGANA_ASSIST: StaticTable = phf_ordered_map! {
    "ゟ" => "ヨリ",
};

// Written hiragana → katakana; reversed for katakana → hiragana.
/// Katakana digraphs without a single hiragana counterpart.
pub static KATAKANA_ASSIST: StaticTable = phf_ordered_map! {
    "こと" => "ヿ",
};

/// Printable ASCII to full-width forms.
pub static ZENKAKU: StaticTable = phf_ordered_map! {
    " " => "　", "!" => "！", "\"" => "＂", "#" => "＃", "$" => "＄", "%" => "％", "&" => "＆", "'" => "＇",
    "(" => "（", ")" => "）", "*" => "＊", "+" => "＋", "," => "，", "-" => "－", "." => "．", "/" => "／",
    "0" => "０", "1" => "１", "2" => "２", "3" => "３", "4" => "４", "5" => "５", "6" => "６", "7" => "７",
    "8" => "８", "9" => "９", ":" => "：", ";" => "；", "<" => "＜", "=" => "＝", ">" => "＞", "?" => "？",
    "@" => "＠", "A" => "Ａ", "B" => "Ｂ", "C" => "Ｃ", "D" => "Ｄ", "E" => "Ｅ", "F" => "Ｆ", "G" => "Ｇ",
    "H" => "Ｈ", "I" => "Ｉ", "J" => "Ｊ", "K" => "Ｋ", "L" => "Ｌ", "M" => "Ｍ", "N" => "Ｎ", "O" => "Ｏ",
    "P" => "Ｐ", "Q" => "Ｑ", "R" => "Ｒ", "S" => "Ｓ", "T" => "Ｔ", "U" => "Ｕ", "V" => "Ｖ", "W" => "Ｗ",
    "X" => "Ｘ", "Y" => "Ｙ", "Z" => "Ｚ", "[" => "［", "\\" => "＼", "]" => "］", "^" => "＾", "_" => "＿",
    "`" => "｀", "a" => "ａ", "b" => "ｂ", "c" => "ｃ", "d" => "ｄ", "e" => "ｅ", "f" => "ｆ", "g" => "ｇ",
    "h" => "ｈ", "i" => "ｉ", "j" => "ｊ", "k" => "ｋ", "l" => "ｌ", "m" => "ｍ", "n" => "ｎ", "o" => "ｏ",
    "p" => "ｐ", "q" => "ｑ", "r" => "ｒ", "s" => "ｓ", "t" => "ｔ", "u" => "ｕ", "v" => "ｖ", "w" => "ｗ",
    "x" => "ｘ", "y" => "ｙ", "z" => "ｚ", "{" => "｛", "|" => "｜", "}" => "｝", "~" => "～",
};

/// Typesetting conventions that replace the plain full-width form.
pub static ZENKAKU_ASSIST: StaticTable = phf_ordered_map! {
    "\\" => "￥", "'" => "’", "\"" => "”",
};
