use crate::stage::Stage;
use std::borrow::Cow;

/// Inputs a stage is checked against.
pub struct StageCases {
    /// General samples. They may or may not trigger a rewrite.
    pub samples: &'static [&'static str],
    /// Samples the stage must leave untouched and borrowed.
    pub pass_through: &'static [&'static str],
    /// Expected rewrites.
    pub transform: &'static [(&'static str, &'static str)],
}

impl Default for StageCases {
    fn default() -> Self {
        Self {
            samples: &[
                "Hello World 123",
                "shimbun",
                "gakkou",
                "ko-hi-",
                "kin'en'",
                "tōkyō",
                "イアン",
                "",
            ],
            pass_through: &["hello", "world", "test123", "abc def", "イアン", ""],
            transform: &[],
        }
    }
}

/// Assert that a stage satisfies every contract the pipelines rely on:
///
/// 1. `zero_copy_when_no_changes`: skipped or no-op stages keep the input borrowed
/// 2. `transforms_as_expected`: the listed rewrites happen
/// 3. `stage_is_idempotent`: on the samples, applying twice equals applying once
/// 4. `needs_apply_is_conservative`: `needs_apply == false` means `apply` is a no-op
/// 5. `handles_empty_string`
/// 6. `no_panic_on_mixed_scripts`
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr, $cases:expr) => {{
        let stage = $stage;
        let cases = $cases;
        $crate::testing::stage_contract::zero_copy_when_no_changes(stage, &cases);
        $crate::testing::stage_contract::transforms_as_expected(stage, &cases);
        $crate::testing::stage_contract::stage_is_idempotent(stage, &cases);
        $crate::testing::stage_contract::needs_apply_is_conservative(stage, &cases);
        $crate::testing::stage_contract::handles_empty_string(stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(stage);
    }};
}

pub fn zero_copy_when_no_changes<S: Stage + ?Sized>(stage: &S, cases: &StageCases) {
    for &input in cases.samples {
        let text = Cow::Borrowed(input);
        if !stage.needs_apply(&text) {
            let out = stage.apply(text);
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                "stage `{}` allocated on `{input}` although needs_apply was false",
                stage.name()
            );
        }
    }

    for &input in cases.pass_through {
        assert!(
            !stage.needs_apply(input),
            "stage `{}` wants to rewrite pass-through sample `{input}`",
            stage.name()
        );
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(out, input);
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "zero-copy violated by stage `{}` on pass-through sample `{input}`",
            stage.name()
        );
    }
}

pub fn transforms_as_expected<S: Stage + ?Sized>(stage: &S, cases: &StageCases) {
    for &(input, expected) in cases.transform {
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(
            out.as_ref(),
            expected,
            "stage `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn stage_is_idempotent<S: Stage + ?Sized>(stage: &S, cases: &StageCases) {
    for &input in cases.samples {
        let once = stage.apply(Cow::Borrowed(input)).into_owned();
        let twice = stage.apply(Cow::Borrowed(once.as_str())).into_owned();
        assert_eq!(
            once,
            twice,
            "stage `{}` is not idempotent on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_conservative<S: Stage + ?Sized>(stage: &S, cases: &StageCases) {
    let inputs = cases
        .samples
        .iter()
        .chain(cases.pass_through)
        .copied()
        .chain(cases.transform.iter().map(|&(input, _)| input));
    for input in inputs {
        if stage.needs_apply(input) {
            continue;
        }
        // Owned input so that a stage which always allocates is still compared by value
        let out = stage.apply(Cow::Owned(input.to_owned()));
        assert_eq!(
            out.as_ref(),
            input,
            "stage `{}` rewrote `{input}` although needs_apply was false",
            stage.name()
        );
    }
}

pub fn handles_empty_string<S: Stage + ?Sized>(stage: &S) {
    assert!(!stage.needs_apply(""), "stage `{}` wants to rewrite ``", stage.name());
    assert_eq!(stage.apply(Cow::Borrowed("")), "");
}

pub fn no_panic_on_mixed_scripts<S: Stage + ?Sized>(stage: &S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية ひらがな カタカナ ｚｅｎｋａｋｕ n' xtu ー -",
    ));
}
