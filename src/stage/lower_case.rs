use crate::stage::Stage;
use std::borrow::Cow;

/// Unicode lower-casing of romaji input, so `IAN` reads like `ian`.
///
/// Zero-copy when lower-casing would not change any character.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        // Titlecase letters such as `ǅ` lower-case without being uppercase
        text.chars().any(|c| !c.to_lowercase().eq(std::iter::once(c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.to_lowercase())
    }
}
