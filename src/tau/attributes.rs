use crate::{model::mods::GameMods, tau::performance::TauPerformance};

/// The result of a difficulty calculation on a tau map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TauDifficultyAttributes {
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The difficulty of the aim skill without travel velocity of sliders.
    pub aim_no_sliders: f64,
    /// The difficulty of the speed skill.
    pub speed: f64,
    /// The difficulty of the complexity skill.
    pub complexity: f64,
    /// The ratio of the aim strain with and without considering sliders.
    pub slider_factor: f64,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The perceived hit window for a "Great" hit inclusive of rate-adjusting
    /// mods (DT/HT/etc).
    pub great_hit_window: f64,
    /// The amount of beats.
    pub n_beats: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of hard beats, including strict ones.
    pub n_hard_beats: u32,
    /// The amount of slider repeat objects.
    pub n_slider_repeats: u32,
    /// The final star rating.
    pub stars: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// The mods that were used for the calculation.
    pub mods: GameMods,
}

impl TauDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Return the amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_beats + self.n_sliders + self.n_hard_beats + self.n_slider_repeats
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> TauPerformance<'a> {
        self.into()
    }
}

/// The result of a performance calculation on a tau map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TauPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation
    pub difficulty: TauDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
    /// The accuracy portion of the final pp.
    pub pp_acc: f64,
    /// The aim portion of the final pp.
    pub pp_aim: f64,
    /// The speed portion of the final pp.
    pub pp_speed: f64,
    /// The complexity portion of the final pp.
    pub pp_complexity: f64,
    /// Misses including an approximated amount of slider breaks
    pub effective_miss_count: f64,
}

impl TauPerformanceAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.difficulty.stars
    }

    /// Return the performance point value.
    pub const fn pp(&self) -> f64 {
        self.pp
    }

    /// Return the maximum combo of the map.
    pub const fn max_combo(&self) -> u32 {
        self.difficulty.max_combo
    }

    /// Return the amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.difficulty.n_objects()
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> TauPerformance<'a> {
        self.difficulty.into()
    }
}

impl From<TauPerformanceAttributes> for TauDifficultyAttributes {
    fn from(attributes: TauPerformanceAttributes) -> Self {
        attributes.difficulty
    }
}
