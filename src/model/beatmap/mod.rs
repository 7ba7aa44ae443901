pub use self::{
    attributes::{BeatmapAttributes, BeatmapAttributesBuilder, HitWindows},
    suspicious::TooSuspicious,
};

use crate::model::hit_object::HitObject;

mod attributes;
mod suspicious;

/// All beatmap data that is relevant for difficulty and performance
/// calculation.
///
/// Decoding a beatmap file into this type is not part of this crate; the
/// hit objects are expected to be sorted by their start time.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    /// The approach rate.
    pub ar: f32,
    /// The overall difficulty.
    pub od: f32,
    /// The circle size.
    pub cs: f32,
    /// The health drain rate.
    pub hp: f32,
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Create a new [`Beatmap`] with all difficulty settings set to `5.0`.
    pub const fn new(hit_objects: Vec<HitObject>) -> Self {
        Self {
            ar: 5.0,
            od: 5.0,
            cs: 5.0,
            hp: 5.0,
            hit_objects,
        }
    }

    /// Create a [`BeatmapAttributesBuilder`] for this map's settings.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Check whether hit objects appear too suspicious for further
    /// calculation.
    ///
    /// Sometimes a [`Beatmap`] isn't created for gameplay but rather to test
    /// the limits of the game. Such maps can lead to very long calculation
    /// times or values without meaning.
    pub fn check_suspicion(&self) -> Result<(), TooSuspicious> {
        match TooSuspicious::new(self) {
            None => Ok(()),
            Some(err) => {
                tracing::warn!(
                    n_objects = self.hit_objects.len(),
                    reason = %err,
                    "beatmap is too suspicious"
                );

                Err(err)
            }
        }
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
