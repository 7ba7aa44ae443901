use crate::tau::difficulty::{evaluators::AimEvaluator, object::TauDifficultyObject};

define_skill! {
    #[derive(Clone)]
    pub struct Aim: StrainDecaySkill => [TauDifficultyObject<'a>][TauDifficultyObject<'a>] {
        include_sliders: bool,
    }
}

impl Aim {
    const SKILL_MULTIPLIER: f64 = 7.4;
    const STRAIN_DECAY_BASE: f64 = 0.25;

    fn strain_value_of(
        &self,
        curr: &TauDifficultyObject<'_>,
        objects: &[TauDifficultyObject<'_>],
    ) -> f64 {
        AimEvaluator::evaluate_diff_of(curr, objects, self.include_sliders)
    }
}
