use crate::{
    any::difficulty::{skills::StrainSkill, Difficulty},
    model::mods::GameMods,
    tau::{
        attributes::TauDifficultyAttributes,
        object::{TauObject, TauObjectKind},
    },
    util::difficulty::{difficulty_to_performance, norm},
    Beatmap,
};

use self::{object::TauDifficultyObject, skills::TauSkills};

use super::strains::TauStrains;

pub mod evaluators;
pub mod object;
pub mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.0820;
const STAR_RATING_MULTIPLIER: f64 = 0.027;
const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.12;

pub fn difficulty(difficulty: &Difficulty, map: &Beatmap) -> TauDifficultyAttributes {
    let DifficultyValues { skills, mut attrs } = DifficultyValues::calculate(difficulty, map);

    DifficultyValues::eval(&mut attrs, difficulty.get_mods(), &skills);

    attrs
}

pub fn strains(difficulty: &Difficulty, map: &Beatmap) -> TauStrains {
    let DifficultyValues {
        skills:
            TauSkills {
                aim,
                aim_no_sliders,
                speed,
                complexity,
            },
        attrs: _,
    } = DifficultyValues::calculate(difficulty, map);

    TauStrains {
        aim: aim.current_strain_peaks().into_vec(),
        aim_no_sliders: aim_no_sliders.current_strain_peaks().into_vec(),
        speed: speed.current_strain_peaks().into_vec(),
        complexity: complexity.current_strain_peaks().into_vec(),
    }
}

pub struct DifficultyValues {
    pub skills: TauSkills,
    pub attrs: TauDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let take = difficulty.get_passed_objects();
        let map_attrs = map.attributes().difficulty(difficulty).build();

        tracing::debug!(
            n_objects = map.hit_objects.len(),
            passed_objects = take,
            clock_rate = map_attrs.clock_rate,
            mods = ?difficulty.get_mods(),
            "calculating tau difficulty"
        );

        let mut attrs = TauDifficultyAttributes {
            ar: map_attrs.ar,
            od: map_attrs.od,
            hp: map_attrs.hp,
            great_hit_window: map_attrs.hit_windows.great,
            mods: difficulty.get_mods().clone(),
            ..Default::default()
        };

        // Resolving the angle range for every object has to happen before
        // any difficulty object is created
        let tau_objects: Box<[TauObject]> = map
            .hit_objects
            .iter()
            .take(take)
            .map(|h| TauObject::new(h, map_attrs.od))
            .collect();

        for h in tau_objects.iter() {
            match h.kind {
                TauObjectKind::Beat => attrs.n_beats += 1,
                TauObjectKind::HardBeat | TauObjectKind::StrictHardBeat => attrs.n_hard_beats += 1,
                TauObjectKind::Slider { .. } => attrs.n_sliders += 1,
                TauObjectKind::SliderRepeat => attrs.n_slider_repeats += 1,
            }

            attrs.max_combo += h.combo();
        }

        let diff_objects = Self::create_difficulty_objects(&tau_objects, map_attrs.clock_rate);

        let mut skills = TauSkills::new(&map_attrs);
        skills.process_all(&diff_objects);

        Self { skills, attrs }
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(attrs: &mut TauDifficultyAttributes, mods: &GameMods, skills: &TauSkills) {
        // Facet floors alone would already yield stars
        if attrs.n_objects() == 0 {
            attrs.slider_factor = 1.0;

            return;
        }

        let TauSkills {
            aim,
            aim_no_sliders,
            speed,
            complexity,
        } = skills;

        let mut aim_rating = aim.cloned_difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER;
        let mut aim_no_sliders_rating =
            aim_no_sliders.cloned_difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER;
        let mut speed_rating = speed.cloned_difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER;
        let mut complexity_rating =
            complexity.cloned_difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER;

        tracing::trace!(
            aim = aim_rating,
            aim_no_sliders = aim_no_sliders_rating,
            speed = speed_rating,
            complexity = complexity_rating,
            "skill ratings"
        );

        if mods.rx() {
            speed_rating = 0.0;
            complexity_rating = 0.0;
        }

        if mods.ap() {
            aim_rating = 0.0;
            aim_no_sliders_rating = 0.0;
        }

        let slider_factor = if aim_rating > 0.0 {
            aim_no_sliders_rating / aim_rating
        } else {
            1.0
        };

        let base_performance = norm(
            1.1,
            [
                difficulty_to_performance(aim_rating),
                difficulty_to_performance(speed_rating),
                difficulty_to_performance(complexity_rating),
            ],
        );

        attrs.aim = aim_rating;
        attrs.aim_no_sliders = aim_no_sliders_rating;
        attrs.speed = speed_rating;
        attrs.complexity = complexity_rating;
        attrs.slider_factor = slider_factor;
        attrs.stars = calculate_star_rating(base_performance);
    }

    pub fn create_difficulty_objects<'a>(
        tau_objects: &'a [TauObject],
        clock_rate: f64,
    ) -> Vec<TauDifficultyObject<'a>> {
        let Some((mut last, rest)) = tau_objects.split_first() else {
            return Vec::new();
        };

        let mut diff_objects = Vec::with_capacity(rest.len());
        let mut last_angled = None;

        for (idx, h) in rest.iter().enumerate() {
            let diff_object =
                TauDifficultyObject::new(h, last, last_angled, &diff_objects, clock_rate, idx);

            if diff_object.angled.is_some() {
                last_angled = Some(idx);
            }

            last = h;
            diff_objects.push(diff_object);
        }

        diff_objects
    }
}

fn calculate_star_rating(base_performance: f64) -> f64 {
    if base_performance <= 0.00001 {
        return 0.0;
    }

    PERFORMANCE_BASE_MULTIPLIER.cbrt()
        * STAR_RATING_MULTIPLIER
        * ((100_000.0 / 2.0_f64.powf(1.0 / 1.1) * base_performance).cbrt() + 4.0)
}
