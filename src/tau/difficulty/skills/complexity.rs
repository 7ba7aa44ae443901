use crate::{
    any::difficulty::skills::StrainSkill,
    tau::difficulty::{evaluators::ComplexityEvaluator, object::TauDifficultyObject},
    util::strains_vec::StrainsVec,
};

use super::strain::TauStrainSkill;

define_skill! {
    #[derive(Clone)]
    pub struct Complexity: StrainDecaySkill => [TauDifficultyObject<'a>][TauDifficultyObject<'a>] {
        evaluator: ComplexityEvaluator = ComplexityEvaluator::new(),
    }
}

impl Complexity {
    const SKILL_MULTIPLIER: f64 = 60.0;
    const STRAIN_DECAY_BASE: f64 = 0.35;

    fn strain_value_of(
        &mut self,
        curr: &TauDifficultyObject<'_>,
        _: &[TauDifficultyObject<'_>],
    ) -> f64 {
        self.evaluator.evaluate_diff_of(curr)
    }

    fn difficulty_value(current_strain_peaks: StrainsVec) -> f64 {
        super::strain::difficulty_value(
            current_strain_peaks,
            Self::REDUCED_SECTION_COUNT,
            Self::REDUCED_STRAIN_BASELINE,
            Self::DECAY_WEIGHT,
        ) * Self::DIFFICULTY_MULTIPLIER
    }
}

impl TauStrainSkill for Complexity {
    const DIFFICULTY_MULTIPLIER: f64 = 1.06;
}
