pub mod converter;
pub mod dictionary;
pub mod pattern;
pub mod pipeline;
pub mod stage;
pub mod substitute;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use converter::{ConversionKind, InitError, KanaConverter, KanaConverterBuilder, initialize};
pub use pipeline::LongVowelStyle;
pub use stage::Stage;
