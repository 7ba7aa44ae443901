use crate::{
    any::difficulty::object::IDifficultyObject,
    tau::difficulty::object::TauDifficultyObject,
};

pub struct SpeedEvaluator;

impl SpeedEvaluator {
    const SINGLE_SPACING_THRESHOLD: f64 = 125.0;
    const MIN_SPEED_BONUS: f64 = 75.0; // ~200BPM
    const SPEED_BALANCING_FACTOR: f64 = 40.0;

    pub fn evaluate_diff_of<'a>(
        curr: &'a TauDifficultyObject<'a>,
        diff_objects: &'a [TauDifficultyObject<'a>],
        great_window: f64,
    ) -> f64 {
        let prev = curr.previous(0, diff_objects);

        let mut strain_time = curr.strain_time;
        let great_window_full = great_window * 2.0;
        let speed_window_ratio = strain_time / great_window_full;

        // Aim to nerf cheesy rhythms i.e. very fast objects after a slower
        // one by moving the strain time towards the previous one
        if let Some(prev) = prev {
            if strain_time < great_window_full && prev.strain_time > strain_time {
                strain_time = prev.strain_time + (strain_time - prev.strain_time) * speed_window_ratio;
            }
        }

        // Cap the strain time to the great window.
        // 0.93 keeps fast streams on high OD from being nerfed too harshly
        // whilst 0.92 limits the effect of the cap.
        strain_time /= (strain_time / great_window_full / 0.93).max(0.92).max(1.0);

        let speed_bonus = if strain_time < Self::MIN_SPEED_BONUS {
            let base = (Self::MIN_SPEED_BONUS - strain_time) / Self::SPEED_BALANCING_FACTOR;

            1.0 + 0.75 * base * base
        } else {
            1.0
        };

        let distance = match (curr.angled, prev.and_then(|prev| prev.angled)) {
            (Some(curr), Some(prev)) => Self::SINGLE_SPACING_THRESHOLD
                .min(curr.distance.abs() + prev.distance.abs()),
            _ => Self::SINGLE_SPACING_THRESHOLD,
        };

        (speed_bonus + speed_bonus * (distance / Self::SINGLE_SPACING_THRESHOLD).powf(3.5))
            / strain_time
    }
}
