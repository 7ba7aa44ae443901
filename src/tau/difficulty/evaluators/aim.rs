use crate::tau::difficulty::object::TauDifficultyObject;

pub struct AimEvaluator;

impl AimEvaluator {
    const SLIDER_MULTIPLIER: f64 = 1.2;

    /// Evaluates the difficulty of aiming from the previous angled object
    /// towards the current one.
    ///
    /// Returns `0.0` if there is no previous angled object or the angular
    /// distance is within the object's angle range. The travel of the
    /// previous object is considered unless sliders are included and the
    /// previous object is not a slider.
    pub fn evaluate_diff_of<'a>(
        curr: &'a TauDifficultyObject<'a>,
        diff_objects: &'a [TauDifficultyObject<'a>],
        include_sliders: bool,
    ) -> f64 {
        let Some(curr_angled) = curr.angled else {
            return 0.0;
        };

        let Some(last) = curr.last_angled(diff_objects) else {
            return 0.0;
        };

        if curr_angled.distance < curr_angled.angle_range {
            return 0.0;
        }

        let velocity = Self::velocity(curr_angled.distance, curr.strain_time);

        if include_sliders && !last.base.is_slider() {
            return velocity;
        }

        let Some(last_angled) = last.angled else {
            return velocity;
        };

        // Only sliders carry travel, for any other predecessor this adds 0
        let travel_velocity =
            Self::velocity(last_angled.lazy_travel_distance, last_angled.travel_time);

        f64::max(velocity, velocity + travel_velocity)
            + travel_velocity * Self::SLIDER_MULTIPLIER
    }

    /// Angular velocity scaled such that both very short and very long times
    /// are considered easier.
    pub fn velocity(distance: f64, time: f64) -> f64 {
        distance / (f64::powf((f64::powf(time, 1.4) - 77.0) / 100.0, 2.0) * 0.1 + 25.0)
    }
}
