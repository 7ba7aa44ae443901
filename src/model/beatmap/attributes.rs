use crate::{
    any::difficulty::{Difficulty, ModsDependent},
    model::mods::GameMods,
    util::difficulty::difficulty_range,
};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate
    pub hp: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The hit windows for approach rate and overall difficulty.
    pub hit_windows: HitWindows,
}

/// AR and OD hit windows
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Hit window for approach rate i.e. `TimePreempt` in milliseconds.
    pub ar: f64,
    /// Hit window for overall difficulty i.e. time to hit a "Great" in
    /// milliseconds.
    pub great: f64,
}

/// A builder for [`BeatmapAttributes`] and [`HitWindows`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    ar: ModsDependent,
    od: ModsDependent,
    cs: ModsDependent,
    hp: ModsDependent,
    mods: GameMods,
    clock_rate: Option<f64>,
}

impl BeatmapAttributesBuilder {
    const PREEMPT_MIN: f64 = 1800.0;
    const PREEMPT_MID: f64 = 1200.0;
    const PREEMPT_MAX: f64 = 450.0;

    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// All attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self {
            ar: ModsDependent::new(5.0),
            od: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            hp: ModsDependent::new(5.0),
            mods: GameMods::DEFAULT,
            clock_rate: None,
        }
    }

    /// Use the given [`Beatmap`]'s attributes.
    pub fn map(self, map: &Beatmap) -> Self {
        Self {
            ar: ModsDependent::new(map.ar),
            od: ModsDependent::new(map.od),
            cs: ModsDependent::new(map.cs),
            hp: ModsDependent::new(map.hp),
            ..self
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn ar(mut self, ar: f32, with_mods: bool) -> Self {
        self.ar = ModsDependent {
            value: ar,
            with_mods,
        };

        self
    }

    /// Specify the overall difficulty.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn od(mut self, od: f32, with_mods: bool) -> Self {
        self.od = ModsDependent {
            value: od,
            with_mods,
        };

        self
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn cs(mut self, cs: f32, with_mods: bool) -> Self {
        self.cs = ModsDependent {
            value: cs,
            with_mods,
        };

        self
    }

    /// Specify the drain rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn hp(mut self, hp: f32, with_mods: bool) -> Self {
        self.hp = ModsDependent {
            value: hp,
            with_mods,
        };

        self
    }

    /// Specify the mods.
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Specify a custom clock rate.
    pub const fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate);

        self
    }

    /// Specify all settings through [`Difficulty`].
    pub fn difficulty(self, difficulty: &Difficulty) -> Self {
        Self {
            ar: difficulty.get_ar().unwrap_or(self.ar),
            od: difficulty.get_od().unwrap_or(self.od),
            cs: difficulty.get_cs().unwrap_or(self.cs),
            hp: difficulty.get_hp().unwrap_or(self.hp),
            mods: difficulty.get_mods().clone(),
            clock_rate: Some(difficulty.get_clock_rate()),
        }
    }

    fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    /// Applies EZ and HR onto the given value.
    fn with_mods(&self, value: f32, hr_multiplier: f64) -> f64 {
        let mut value = f64::from(value);

        if self.mods.ez() {
            value *= 0.5;
        }

        if self.mods.hr() {
            value = f64::min(value * hr_multiplier, 10.0);
        }

        value
    }

    fn mod_adjusted(&self, value: ModsDependent, hr_multiplier: f64) -> f64 {
        if value.with_mods {
            f64::from(value.value)
        } else {
            self.with_mods(value.value, hr_multiplier)
        }
    }

    /// Calculate the AR and OD hit windows.
    pub fn hit_windows(&self) -> HitWindows {
        let clock_rate = self.get_clock_rate();

        let ar = self.mod_adjusted(self.ar, 1.4);
        let od = self.mod_adjusted(self.od, 1.4);

        let preempt = difficulty_range(
            ar,
            Self::PREEMPT_MIN,
            Self::PREEMPT_MID,
            Self::PREEMPT_MAX,
        ) / clock_rate;

        let great = if od <= 5.0 {
            127.0 - 3.0 * od
        } else {
            112.0 - 3.0 * (od - 5.0)
        } / clock_rate;

        HitWindows { ar: preempt, great }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let clock_rate = self.get_clock_rate();
        let hit_windows = self.hit_windows();

        let preempt = hit_windows.ar;

        let ar = if preempt > Self::PREEMPT_MID {
            (Self::PREEMPT_MIN - preempt) / 120.0
        } else {
            (Self::PREEMPT_MID - preempt) / 150.0 + 5.0
        };

        BeatmapAttributes {
            ar,
            od: self.mod_adjusted(self.od, 1.4),
            cs: self.mod_adjusted(self.cs, 1.3),
            hp: self.mod_adjusted(self.hp, 1.4),
            clock_rate,
            hit_windows,
        }
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new().map(map)
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    #[test]
    fn consider_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, false)
            .mods(64)
            .build();

        let expected = 10.0;
        assert!(attrs.ar.eq(expected), "{} != {expected}", attrs.ar);
    }

    #[test]
    fn skip_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, true)
            .mods(16)
            .build();

        let expected = 8.5;
        assert!(attrs.ar.eq(expected), "{} != {expected}", attrs.ar);
    }

    #[test]
    fn map_keeps_mods() {
        let map = Beatmap {
            ar: 8.0,
            od: 9.0,
            ..Beatmap::default()
        };

        let attrs = BeatmapAttributesBuilder::new().mods(16).map(&map).build();

        assert!(attrs.ar.eq(10.0));
        assert!(attrs.od.eq(10.0));
    }

    #[test]
    fn hardrock_caps_at_ten() {
        let attrs = BeatmapAttributesBuilder::new()
            .od(9.0, false)
            .cs(5.0, false)
            .mods(16)
            .build();

        assert!(attrs.od.eq(10.0));
        assert!(attrs.cs.eq(6.5));
    }

    #[test]
    fn easy_halves() {
        let attrs = BeatmapAttributesBuilder::new()
            .od(8.0, false)
            .hp(6.0, false)
            .mods(2)
            .build();

        assert!(attrs.od.eq(4.0));
        assert!(attrs.hp.eq(3.0));
    }

    #[test]
    fn great_window_scales_with_clock_rate() {
        let nomod = BeatmapAttributesBuilder::new().od(5.0, false).hit_windows();
        let dt = BeatmapAttributesBuilder::new()
            .od(5.0, false)
            .mods(64)
            .hit_windows();

        assert!(nomod.great.eq(112.0));
        assert!((dt.great - 112.0 / 1.5).abs() < 1e-9);
        // OD itself is not affected by the clock rate
        assert!(BeatmapAttributesBuilder::new().od(5.0, false).mods(64).build().od.eq(5.0));
    }
}
