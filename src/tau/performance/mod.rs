use std::cmp;

use self::calculator::TauPerformanceCalculator;
pub use self::hitresult_generator::TauHitResultParams;

use crate::{
    any::{hitresult_generator::Fast, Difficulty, HitResultGenerator, HitResultPriority},
    model::mods::GameMods,
    util::map_or_attrs::MapOrAttrs,
    Beatmap,
};

use super::{
    attributes::{TauDifficultyAttributes, TauPerformanceAttributes},
    score_state::{TauHitResults, TauScoreState},
};

mod calculator;
mod hitresult_generator;

/// Performance calculator on tau maps.
///
/// # Example
///
/// ```
/// use tau_pp::{Beatmap, TauPerformance};
/// use tau_pp::model::hit_object::{HitObject, HitObjectKind};
///
/// let map = Beatmap::new(vec![
///     HitObject::new(0.0, HitObjectKind::Beat { angle: 0.0 }),
///     HitObject::new(250.0, HitObjectKind::Beat { angle: 120.0 }),
///     HitObject::new(500.0, HitObjectKind::HardBeat),
/// ]);
///
/// let attrs = TauPerformance::new(&map)
///     .mods(8 + 64) // HDDT
///     .accuracy(98.5)
///     .misses(1)
///     .calculate();
///
/// assert!(attrs.pp.is_finite());
///
/// // Re-use the difficulty attributes for further calculations
/// let max_pp = attrs.performance().mods(8 + 64).calculate().pp;
/// # let _ = max_pp;
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct TauPerformance<'map> {
    pub(crate) map_or_attrs: MapOrAttrs<'map>,
    pub(crate) difficulty: Difficulty,
    pub(crate) acc: Option<f64>,
    pub(crate) combo: Option<u32>,
    pub(crate) n_great: Option<u32>,
    pub(crate) n_ok: Option<u32>,
    pub(crate) misses: Option<u32>,
    pub(crate) hitresult_priority: HitResultPriority,
    pub(crate) hitresult_generator: Option<fn(&TauHitResultParams) -> TauHitResults>,
}

// Manual implementation because of the `hitresult_generator` function pointer
impl PartialEq for TauPerformance<'_> {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            map_or_attrs,
            difficulty,
            acc,
            combo,
            n_great,
            n_ok,
            misses,
            hitresult_priority,
            hitresult_generator: _,
        } = self;

        map_or_attrs == &other.map_or_attrs
            && difficulty == &other.difficulty
            && acc == &other.acc
            && combo == &other.combo
            && n_great == &other.n_great
            && n_ok == &other.n_ok
            && misses == &other.misses
            && hitresult_priority == &other.hitresult_priority
    }
}

impl<'map> TauPerformance<'map> {
    /// Create a new performance calculator for tau maps.
    ///
    /// The argument `map_or_attrs` must be either
    /// - previously calculated attributes ([`TauDifficultyAttributes`]
    ///   or [`TauPerformanceAttributes`])
    /// - a [`Beatmap`] (by reference or value)
    ///
    /// If a map is given, difficulty attributes will need to be calculated
    /// internally which is a costly operation. Hence, passing attributes
    /// should be prefered.
    ///
    /// However, when passing previously calculated attributes, make sure they
    /// have been calculated for the same map and [`Difficulty`] settings.
    /// Otherwise, the final attributes will be incorrect.
    ///
    pub fn new(map_or_attrs: impl Into<MapOrAttrs<'map>>) -> Self {
        Self {
            map_or_attrs: map_or_attrs.into(),
            difficulty: Difficulty::new(),
            acc: None,
            combo: None,
            n_great: None,
            n_ok: None,
            misses: None,
            hitresult_priority: HitResultPriority::DEFAULT,
            hitresult_generator: None,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.difficulty = self.difficulty.mods(mods);

        self
    }

    /// Specify the max combo of the play.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the priority of hitresults.
    ///
    /// `HitResultPriority::BestCase` fills up unspecified judgements with
    /// greats, `HitResultPriority::WorstCase` with oks.
    pub const fn hitresult_priority(mut self, priority: HitResultPriority) -> Self {
        self.hitresult_priority = priority;

        self
    }

    /// Specify how hitresults should be generated from an accuracy.
    ///
    /// Defaults to [`Fast`].
    pub fn hitresult_generator<H: HitResultGenerator<TauHitResultParams>>(mut self) -> Self {
        self.hitresult_generator = Some(H::generate_hitresults);

        self
    }

    /// Specify the amount of greats of a play.
    pub const fn n_great(mut self, n_great: u32) -> Self {
        self.n_great = Some(n_great);

        self
    }

    /// Specify the amount of oks of a play.
    pub const fn n_ok(mut self, n_ok: u32) -> Self {
        self.n_ok = Some(n_ok);

        self
    }

    /// Specify the amount of misses of a play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Use the specified settings of the given [`Difficulty`].
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;

        self
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.difficulty = self.difficulty.passed_objects(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.difficulty = self.difficulty.clock_rate(clock_rate);

        self
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn ar(mut self, ar: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.ar(ar, with_mods);

        self
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn od(mut self, od: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.od(od, with_mods);

        self
    }

    /// Provide parameters through a [`TauScoreState`].
    pub const fn state(mut self, state: TauScoreState) -> Self {
        let TauScoreState {
            max_combo,
            n_great,
            n_ok,
            misses,
        } = state;

        self.combo = Some(max_combo);
        self.n_great = Some(n_great);
        self.n_ok = Some(n_ok);
        self.misses = Some(misses);

        self
    }

    /// Specify the accuracy of a play between `0.0` and `100.0`.
    /// This will be used to generate matching hitresults.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// Create the [`TauScoreState`] that will be used for performance
    /// calculation.
    pub fn generate_state(&mut self) -> TauScoreState {
        let attrs = match self.map_or_attrs {
            MapOrAttrs::Map(ref map) => {
                let attrs = self.difficulty.calculate(map);

                self.map_or_attrs.insert_attrs(attrs)
            }
            MapOrAttrs::Attrs(ref attrs) => attrs,
        };

        let total_hits = cmp::min(
            self.difficulty.get_passed_objects() as u32,
            attrs.n_objects(),
        );

        let misses = self.misses.map_or(0, |n| cmp::min(n, total_hits));
        let n_remaining = total_hits - misses;

        let mut n_great = self.n_great.map_or(0, |n| cmp::min(n, n_remaining));
        let mut n_ok = self.n_ok.map_or(0, |n| cmp::min(n, n_remaining - n_great));

        match (self.n_great, self.n_ok, self.acc) {
            (None, None, Some(acc)) => {
                let params = TauHitResultParams {
                    total_hits,
                    misses,
                    acc,
                };

                let hitresults = match self.hitresult_generator {
                    Some(generator) => generator(&params),
                    None => Fast::generate_hitresults(&params),
                };

                n_great = hitresults.n_great;
                n_ok = hitresults.n_ok;
            }
            (Some(_), None, _) => n_ok = n_remaining - n_great,
            (None, Some(_), _) => n_great = n_remaining - n_ok,
            (None, None, None) => match self.hitresult_priority {
                HitResultPriority::BestCase => n_great = n_remaining,
                HitResultPriority::WorstCase => n_ok = n_remaining,
            },
            (Some(_), Some(_), _) => {
                let remaining = n_remaining - (n_great + n_ok);

                match self.hitresult_priority {
                    HitResultPriority::BestCase => n_great += remaining,
                    HitResultPriority::WorstCase => n_ok += remaining,
                }
            }
        }

        let max_possible_combo = attrs.max_combo.saturating_sub(misses);

        let max_combo = self.combo.map_or(max_possible_combo, |combo| {
            cmp::min(combo, max_possible_combo)
        });

        self.combo = Some(max_combo);
        self.n_great = Some(n_great);
        self.n_ok = Some(n_ok);
        self.misses = Some(misses);

        TauScoreState {
            max_combo,
            n_great,
            n_ok,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(mut self) -> TauPerformanceAttributes {
        let state = self.generate_state();

        let attrs = match self.map_or_attrs {
            MapOrAttrs::Attrs(attrs) => attrs,
            MapOrAttrs::Map(ref map) => self.difficulty.calculate(map),
        };

        let mods = self.difficulty.get_mods();
        let effective_miss_count = effective_miss_count(&attrs, &state);

        tracing::debug!(
            ?state,
            effective_miss_count,
            "calculating tau performance"
        );

        TauPerformanceCalculator::new(attrs, mods, state, effective_miss_count).calculate()
    }
}

macro_rules! from_map_or_attrs {
    ( $( $ty:ty ),* ) => {
        $(
            impl<'map> From<$ty> for TauPerformance<'map> {
                fn from(map_or_attrs: $ty) -> Self {
                    Self::new(map_or_attrs)
                }
            }
        )*
    };
}

from_map_or_attrs!(
    &'map Beatmap,
    Beatmap,
    TauDifficultyAttributes,
    TauPerformanceAttributes
);

/// Misses including an estimation of slider breaks based on the combo.
fn effective_miss_count(attrs: &TauDifficultyAttributes, state: &TauScoreState) -> f64 {
    let mut combo_based_miss_count = 0.0;

    if attrs.n_sliders > 0 {
        let full_combo_threshold = f64::from(attrs.max_combo) - 0.1 * f64::from(attrs.n_sliders);

        if f64::from(state.max_combo) < full_combo_threshold {
            combo_based_miss_count = full_combo_threshold / f64::from(state.max_combo).max(1.0);
        }
    }

    combo_based_miss_count = combo_based_miss_count.min(f64::from(state.total_hits()));

    combo_based_miss_count.max(f64::from(state.misses))
}

#[cfg(test)]
mod test {
    use std::sync::OnceLock;

    use crate::{
        any::hitresult_generator::Closest,
        model::hit_object::{HitObject, HitObjectKind, PolarSliderPath, Slider, SliderNode},
    };

    use super::*;

    static ATTRS: OnceLock<TauDifficultyAttributes> = OnceLock::new();

    const N_OBJECTS: u32 = 120;
    const N_SLIDERS: u32 = 20;

    fn beatmap() -> Beatmap {
        let hit_objects = (0..N_OBJECTS)
            .map(|i| {
                let start_time = f64::from(i) * 300.0;
                let angle = f64::from(i * 67 % 360);

                let kind = match i % 6 {
                    0 => HitObjectKind::Slider(Slider {
                        angle,
                        path: PolarSliderPath::new(vec![
                            SliderNode::new(0.0, angle),
                            SliderNode::new(150.0, angle + 40.0),
                        ]),
                        repeats: 0,
                        hard_head: false,
                    }),
                    3 => HitObjectKind::HardBeat,
                    _ => HitObjectKind::Beat { angle },
                };

                HitObject::new(start_time, kind)
            })
            .collect();

        Beatmap {
            od: 8.0,
            ..Beatmap::new(hit_objects)
        }
    }

    fn attrs() -> TauDifficultyAttributes {
        ATTRS
            .get_or_init(|| {
                let attrs = Difficulty::new().calculate(&beatmap());

                assert_eq!(attrs.n_objects(), N_OBJECTS);
                assert_eq!(attrs.n_sliders, N_SLIDERS);
                assert_eq!(attrs.max_combo, N_OBJECTS + N_SLIDERS);

                attrs
            })
            .to_owned()
    }

    #[test]
    fn hitresults_n_great_misses_best() {
        let state = TauPerformance::from(attrs())
            .combo(100)
            .n_great(80)
            .misses(2)
            .hitresult_priority(HitResultPriority::BestCase)
            .generate_state();

        let expected = TauScoreState {
            max_combo: 100,
            n_great: 80,
            n_ok: 38,
            misses: 2,
        };

        assert_eq!(state, expected);
    }

    #[test]
    fn hitresults_all_specified_worst() {
        let state = TauPerformance::from(attrs())
            .n_great(50)
            .n_ok(10)
            .misses(5)
            .hitresult_priority(HitResultPriority::WorstCase)
            .generate_state();

        let expected = TauScoreState {
            max_combo: N_OBJECTS + N_SLIDERS - 5,
            n_great: 50,
            n_ok: 65,
            misses: 5,
        };

        assert_eq!(state, expected);
    }

    #[test]
    fn hitresults_nothing_specified() {
        let best = TauPerformance::from(attrs()).generate_state();
        assert_eq!(best.n_great, N_OBJECTS);

        let worst = TauPerformance::from(attrs())
            .hitresult_priority(HitResultPriority::WorstCase)
            .generate_state();
        assert_eq!(worst.n_ok, N_OBJECTS);
    }

    #[test]
    fn hitresults_from_accuracy() {
        let state = TauPerformance::from(attrs())
            .accuracy(90.0)
            .misses(3)
            .hitresult_generator::<Closest>()
            .generate_state();

        assert_eq!(state.total_hits(), N_OBJECTS);
        assert_eq!(state.misses, 3);
        assert!((state.accuracy() - 0.9).abs() < 0.01);
    }

    #[test]
    fn counts_are_clamped() {
        let state = TauPerformance::from(attrs())
            .combo(u32::MAX)
            .n_great(1000)
            .misses(1000)
            .generate_state();

        assert_eq!(state.misses, N_OBJECTS);
        assert_eq!(state.n_great, 0);
        assert_eq!(state.max_combo, N_SLIDERS);
    }

    #[test]
    fn map_and_attrs_agree() {
        let map = beatmap();

        let from_map = TauPerformance::new(&map).accuracy(95.0).calculate();
        let from_attrs = TauPerformance::new(attrs()).accuracy(95.0).calculate();

        assert_eq!(from_map, from_attrs);
        assert_eq!(from_map.clone().performance().accuracy(95.0).calculate(), from_map);
    }

    #[test]
    fn effective_misses_from_combo() {
        let attrs = attrs();

        let full_combo = TauScoreState {
            max_combo: attrs.max_combo,
            n_great: N_OBJECTS,
            n_ok: 0,
            misses: 0,
        };

        assert!(effective_miss_count(&attrs, &full_combo) < f64::EPSILON);

        let broken = TauScoreState {
            max_combo: 35,
            ..full_combo
        };

        // (140 - 2) / 35
        assert!((effective_miss_count(&attrs, &broken) - 138.0 / 35.0).abs() < 1e-9);
    }

    #[test]
    fn create() {
        let map = beatmap();

        let _ = TauPerformance::new(TauDifficultyAttributes::default());
        let _ = TauPerformance::new(TauPerformanceAttributes::default());
        let _ = TauPerformance::new(&map);
        let _ = TauPerformance::new(map.clone());

        let _ = TauPerformance::from(TauDifficultyAttributes::default());
        let _ = TauPerformance::from(TauPerformanceAttributes::default());
        let _ = TauPerformance::from(&map);
        let _ = TauPerformance::from(map);

        let _ = TauDifficultyAttributes::default().performance();
        let _ = TauPerformanceAttributes::default().performance();
    }
}
