use crate::{
    any::difficulty::skills::StrainSkill, model::beatmap::BeatmapAttributes,
};

use self::{aim::Aim, complexity::Complexity, speed::Speed};

use super::object::TauDifficultyObject;

pub mod aim;
pub mod complexity;
pub mod speed;
pub mod strain;

#[derive(Clone)]
pub struct TauSkills {
    pub aim: Aim,
    pub aim_no_sliders: Aim,
    pub speed: Speed,
    pub complexity: Complexity,
}

impl TauSkills {
    pub fn new(map_attrs: &BeatmapAttributes) -> Self {
        Self {
            aim: Aim::new(true),
            aim_no_sliders: Aim::new(false),
            speed: Speed::new(map_attrs.hit_windows.great),
            complexity: Complexity::new(),
        }
    }

    pub fn process(&mut self, curr: &TauDifficultyObject<'_>, objects: &[TauDifficultyObject<'_>]) {
        self.aim.process(curr, objects);
        self.aim_no_sliders.process(curr, objects);
        self.speed.process(curr, objects);
        self.complexity.process(curr, objects);
    }

    /// Processes all objects, each skill on its own thread.
    #[cfg(feature = "parallel")]
    pub fn process_all(&mut self, objects: &[TauDifficultyObject<'_>]) {
        let Self {
            aim,
            aim_no_sliders,
            speed,
            complexity,
        } = self;

        std::thread::scope(|scope| {
            scope.spawn(|| objects.iter().for_each(|curr| aim.process(curr, objects)));
            scope.spawn(|| {
                objects
                    .iter()
                    .for_each(|curr| aim_no_sliders.process(curr, objects));
            });
            scope.spawn(|| objects.iter().for_each(|curr| speed.process(curr, objects)));

            objects
                .iter()
                .for_each(|curr| complexity.process(curr, objects));
        });
    }

    #[cfg(not(feature = "parallel"))]
    pub fn process_all(&mut self, objects: &[TauDifficultyObject<'_>]) {
        for curr in objects {
            self.process(curr, objects);
        }
    }
}
