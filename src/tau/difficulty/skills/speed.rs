use crate::{
    any::difficulty::skills::StrainSkill,
    tau::difficulty::{
        evaluators::{RhythmEvaluator, SpeedEvaluator},
        object::TauDifficultyObject,
    },
    util::strains_vec::StrainsVec,
};

use super::strain::TauStrainSkill;

define_skill! {
    #[derive(Clone)]
    pub struct Speed: StrainDecaySkill => [TauDifficultyObject<'a>][TauDifficultyObject<'a>] {
        great_window: f64,
    }
}

impl Speed {
    const SKILL_MULTIPLIER: f64 = 515.0;
    const STRAIN_DECAY_BASE: f64 = 0.3;

    fn strain_value_of(
        &self,
        curr: &TauDifficultyObject<'_>,
        objects: &[TauDifficultyObject<'_>],
    ) -> f64 {
        SpeedEvaluator::evaluate_diff_of(curr, objects, self.great_window)
            * RhythmEvaluator::evaluate_diff_of(curr, objects, self.great_window)
    }

    // Native rather than trait function so that it has priority over
    // `StrainSkill::difficulty_value`
    fn difficulty_value(current_strain_peaks: StrainsVec) -> f64 {
        super::strain::difficulty_value(
            current_strain_peaks,
            Self::REDUCED_SECTION_COUNT,
            Self::REDUCED_STRAIN_BASELINE,
            Self::DECAY_WEIGHT,
        ) * Self::DIFFICULTY_MULTIPLIER
    }
}

impl TauStrainSkill for Speed {
    const REDUCED_SECTION_COUNT: usize = 5;
    const DIFFICULTY_MULTIPLIER: f64 = 1.37;
}
