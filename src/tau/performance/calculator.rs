use crate::{
    model::mods::GameMods,
    tau::{TauDifficultyAttributes, TauPerformanceAttributes, TauScoreState},
    util::difficulty::{difficulty_to_performance, norm},
};

pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.12;

pub(super) struct TauPerformanceCalculator<'mods> {
    attrs: TauDifficultyAttributes,
    mods: &'mods GameMods,
    state: TauScoreState,
    effective_miss_count: f64,
}

impl<'a> TauPerformanceCalculator<'a> {
    pub const fn new(
        attrs: TauDifficultyAttributes,
        mods: &'a GameMods,
        state: TauScoreState,
        effective_miss_count: f64,
    ) -> Self {
        Self {
            attrs,
            mods,
            state,
            effective_miss_count,
        }
    }
}

impl TauPerformanceCalculator<'_> {
    pub fn calculate(self) -> TauPerformanceAttributes {
        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        if self.mods.nf() {
            multiplier *= (1.0 - 0.02 * self.effective_miss_count).max(0.9);
        }

        let aim_value = self.compute_aim_value();
        let speed_value = self.compute_speed_value();
        let acc_value = self.compute_accuracy_value();
        let complexity_value = self.compute_complexity_value();

        let pp = norm(1.1, [aim_value, acc_value, speed_value, complexity_value]) * multiplier;

        TauPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_speed: speed_value,
            pp_complexity: complexity_value,
            effective_miss_count: self.effective_miss_count,
        }
    }

    fn compute_aim_value(&self) -> f64 {
        if self.attrs.aim <= 0.0 {
            return 0.0;
        }

        let mut aim_value = difficulty_to_performance(self.attrs.aim);

        let length_bonus = self.length_bonus();
        aim_value *= length_bonus;

        let approach_rate_factor = if self.attrs.ar > 10.33 {
            0.3 * (self.attrs.ar - 10.33)
        } else if self.attrs.ar < 8.0 {
            0.1 * (8.0 - self.attrs.ar)
        } else {
            0.0
        };

        aim_value *= (1.0 + approach_rate_factor) * length_bonus;
        aim_value *= self.miss_penalty(self.effective_miss_count);

        if self.attrs.n_sliders > 0 {
            aim_value *= self.slider_nerf();
        }

        aim_value * self.state.accuracy()
    }

    fn compute_speed_value(&self) -> f64 {
        if self.attrs.speed <= 0.0 {
            return 0.0;
        }

        let mut speed_value = difficulty_to_performance(self.attrs.speed);

        let length_bonus = self.length_bonus();
        speed_value *= length_bonus;
        speed_value *= self.miss_penalty(self.effective_miss_count.powf(0.875));

        if self.attrs.max_combo > 0 && self.state.max_combo > 0 {
            speed_value *= (f64::from(self.state.max_combo).powf(0.8)
                / f64::from(self.attrs.max_combo).powf(0.8))
            .min(1.0);
        }

        let approach_rate_factor = if self.attrs.ar > 10.33 {
            0.3 * (self.attrs.ar - 10.33)
        } else {
            0.0
        };

        speed_value *= 1.0 + approach_rate_factor * length_bonus;

        let od = self.attrs.od;
        speed_value *= (0.95 + od * od / 750.0)
            * self
                .state
                .accuracy()
                .max(1e-9)
                .powf((14.5 - od.max(8.0)) / 2.0);

        speed_value
    }

    fn compute_accuracy_value(&self) -> f64 {
        if self.mods.rx() {
            return 0.0;
        }

        // This percentage only considers beats; sliders and hard beats are
        // assumed to be hit with greats.
        let n_beats = f64::from(self.attrs.n_beats);

        if n_beats <= 0.0 {
            return 0.0;
        }

        let total_hits = f64::from(self.state.total_hits());
        let n_great = f64::from(self.state.n_great);
        let n_ok = f64::from(self.state.n_ok);

        let better_acc_percentage =
            (((n_great - (total_hits - n_beats)) * 3.0 + n_ok) / (n_beats * 3.0)).max(0.0);

        // Lots of arbitrary values from testing.
        // Considering to use derivation from perfect accuracy in a
        // probabilistic manner - assume normal distribution
        let mut acc_value = 1.52163_f64.powf(self.attrs.od) * better_acc_percentage.powi(24) * 2.83;

        // Bonus for many beats - it's harder to keep good accuracy up for
        // longer
        acc_value *= (n_beats / 1000.0).powf(0.3).min(1.15);

        acc_value
    }

    fn compute_complexity_value(&self) -> f64 {
        if self.attrs.complexity <= 0.0 {
            return 0.0;
        }

        difficulty_to_performance(self.attrs.complexity)
            * self.length_bonus()
            * self.miss_penalty(self.effective_miss_count)
    }

    /// Longer maps are worth more.
    fn length_bonus(&self) -> f64 {
        let total_hits = f64::from(self.state.total_hits());

        let bonus = if total_hits > 2000.0 {
            f64::log10(total_hits / 2000.0) * 0.5
        } else {
            0.0
        };

        0.95 + 0.4 * (total_hits / 2000.0).min(1.0) + bonus
    }

    /// Penalize misses by assessing the number of misses relative to the
    /// total hit count. Default a 3% reduction for any number of misses.
    fn miss_penalty(&self, exponent: f64) -> f64 {
        let total_hits = f64::from(self.state.total_hits());

        if self.effective_miss_count <= 0.0 || total_hits <= 0.0 {
            return 1.0;
        }

        let miss_ratio = (self.effective_miss_count / total_hits).min(1.0);

        0.97 * (1.0 - miss_ratio.powf(0.775)).powf(exponent)
    }

    /// Assume 15% of sliders in a map are difficult since there's no way to
    /// tell from the performance calculator.
    fn slider_nerf(&self) -> f64 {
        let estimate_difficult_sliders = f64::from(self.attrs.n_sliders) * 0.15;

        if estimate_difficult_sliders <= 0.0 {
            return 1.0;
        }

        let combo_shortfall =
            f64::from(self.attrs.max_combo) - f64::from(self.state.max_combo);

        let estimate_slider_ends_dropped = f64::from(self.state.n_ok + self.state.misses)
            .min(combo_shortfall)
            .min(estimate_difficult_sliders)
            .max(0.0);

        let slider_factor = self.attrs.slider_factor;

        (1.0 - slider_factor)
            * (1.0 - estimate_slider_ends_dropped / estimate_difficult_sliders).powi(3)
            + slider_factor
    }
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    fn attrs() -> TauDifficultyAttributes {
        TauDifficultyAttributes {
            aim: 2.0,
            aim_no_sliders: 1.8,
            speed: 1.5,
            complexity: 0.8,
            slider_factor: 0.9,
            ar: 9.0,
            od: 8.0,
            n_beats: 800,
            n_sliders: 200,
            max_combo: 1200,
            ..Default::default()
        }
    }

    fn state(misses: u32, max_combo: u32) -> TauScoreState {
        TauScoreState {
            max_combo,
            n_great: 950 - misses,
            n_ok: 50,
            misses,
        }
    }

    fn calculate(attrs: TauDifficultyAttributes, mods: u32, state: TauScoreState) -> TauPerformanceAttributes {
        let mods = GameMods::from(mods);
        let effective_miss_count = f64::from(state.misses);

        TauPerformanceCalculator::new(attrs, &mods, state, effective_miss_count).calculate()
    }

    #[test]
    fn zero_difficulty() {
        let state = TauScoreState {
            max_combo: 0,
            n_great: 0,
            n_ok: 0,
            misses: 10,
        };

        let attrs = TauDifficultyAttributes {
            n_beats: 10,
            max_combo: 10,
            ..Default::default()
        };

        let perf = calculate(attrs, 0, state);

        assert!(perf.pp.eq(0.0));
    }

    #[test]
    fn misses_reduce_pp() {
        let full = calculate(attrs(), 0, state(0, 1200));
        let missed = calculate(attrs(), 0, state(5, 600));

        assert!(full.pp > missed.pp);
        assert!(full.pp_aim > missed.pp_aim);
        assert!(full.pp_speed > missed.pp_speed);
        assert!(full.pp_complexity > missed.pp_complexity);
    }

    #[test]
    fn relax_has_no_accuracy_value() {
        let perf = calculate(attrs(), 128, state(0, 1200));

        assert!(perf.pp_acc.eq(0.0));
    }

    #[test]
    fn no_fail_penalty_is_capped() {
        let attrs = attrs();
        let state = state(10, 600);
        let mods = GameMods::from(1);

        let nomod = calculate(attrs.clone(), 0, state);
        let nofail = TauPerformanceCalculator::new(attrs, &mods, state, 100.0).calculate();
        let nomod_same_misses = {
            let mods = GameMods::from(0);

            TauPerformanceCalculator::new(nofail.difficulty.clone(), &mods, state, 100.0)
                .calculate()
        };

        assert!(nomod.pp > nofail.pp);
        assert!(nofail.pp.eq_relative(0.9 * nomod_same_misses.pp, 1e-9));
    }

    #[test]
    fn slider_nerf_bounds() {
        let attrs = attrs();
        let mods = GameMods::from(0);

        let fc = TauPerformanceCalculator::new(attrs.clone(), &mods, state(0, 1200), 0.0);
        assert!(fc.slider_nerf().eq(1.0));

        let dropped = TauScoreState {
            n_ok: 100,
            ..state(0, 900)
        };
        let calc = TauPerformanceCalculator::new(attrs.clone(), &mods, dropped, 0.0);
        assert!(calc.slider_nerf().eq(attrs.slider_factor));
    }

    #[test]
    fn length_bonus_grows() {
        let mods = GameMods::from(0);
        let short = TauPerformanceCalculator::new(attrs(), &mods, state(0, 1200), 0.0);

        let long_state = TauScoreState {
            n_great: 4000,
            ..state(0, 1200)
        };
        let long = TauPerformanceCalculator::new(attrs(), &mods, long_state, 0.0);

        assert!(short.length_bonus().eq(0.95 + 0.4 * 0.5));
        assert!(long.length_bonus() > 1.35);
    }
}
