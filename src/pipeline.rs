// src/pipeline.rs
use crate::stage::{
    Stage, StageError,
    lower_case::LowerCase,
    phonetic::{
        doubled_vowel, geminate, labial_nasal, long_vowel, long_vowel_mark, small_tsu,
        small_tsu_marker, syllabic_n,
    },
};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

/// How long vowels are written in romaji output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LongVowelStyle {
    /// `コーヒー` → `kōhī`, `トウキョウ` → `tōkyō`.
    #[default]
    Macron,
    /// Leave the raw table output: `コーヒー` → `ko-hi-`, `トウキョウ` → `toukyou`.
    Plain,
}

/// An ordered list of stages. Order is part of the semantics: stages are
/// never reordered or skipped except through `needs_apply`.
#[derive(Default, Clone)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Pipeline {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn process<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&text) {
                continue;
            }
            text = stage.apply(text);
            trace!(stage = stage.name(), "rewrote romaji");
        }
        text
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

/// Romaji as typed → romaji the romaji table understands.
pub fn pre_processing() -> Result<Pipeline, StageError> {
    Ok(Pipeline::new()
        .push(LowerCase)
        .push(labial_nasal()?)
        .push(small_tsu()?)
        .push(long_vowel()?))
}

/// Raw kana table output → readable Hepburn.
pub fn post_processing(style: LongVowelStyle) -> Result<Pipeline, StageError> {
    let pipeline = Pipeline::new()
        .push(geminate()?)
        .push(small_tsu_marker()?);
    let pipeline = match style {
        LongVowelStyle::Macron => pipeline.push(long_vowel_mark()?),
        LongVowelStyle::Plain => pipeline,
    };
    let pipeline = pipeline.push(syllabic_n()?);
    Ok(match style {
        LongVowelStyle::Macron => pipeline.push(doubled_vowel()?),
        LongVowelStyle::Plain => pipeline,
    })
}
