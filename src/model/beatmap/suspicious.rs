use crate::model::hit_object::{HitObject, HitObjectKind};

use super::Beatmap;

/// Resulting error type of [`Beatmap::check_suspicion`].
///
/// If you feel like a [`Beatmap`] is incorrectly flagged as suspicious or if
/// a map should be flagged but isn't, please open an issue so the heuristic
/// can be improved.
///
/// [`Beatmap::check_suspicion`]: crate::model::beatmap::Beatmap::check_suspicion
/// [`Beatmap`]: crate::model::beatmap::Beatmap
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TooSuspicious {
    /// Notes are too dense time-wise.
    #[error("the map seems too suspicious for further calculation (reason=Density)")]
    Density,
    /// The map seems too long.
    #[error("the map seems too suspicious for further calculation (reason=Length)")]
    Length,
    /// A start time, angle, or slider node is not a finite number.
    #[error("the map seems too suspicious for further calculation (reason=NonFinite)")]
    NonFinite,
    /// Too many objects.
    #[error("the map seems too suspicious for further calculation (reason=ObjectCount)")]
    ObjectCount,
    /// Hit objects are not sorted by their start time.
    #[error("the map seems too suspicious for further calculation (reason=Unordered)")]
    Unordered,
}

impl TooSuspicious {
    pub(crate) fn new(map: &Beatmap) -> Option<Self> {
        #[inline]
        const fn too_long(hit_objects: &[HitObject]) -> bool {
            const DAY_MS: u32 = 60 * 60 * 24 * 1000;

            let [first, .., last] = hit_objects else {
                return false;
            };

            (last.start_time - first.start_time) > DAY_MS as f64
        }

        #[inline]
        const fn too_many_objects(hit_objects: &[HitObject]) -> bool {
            const THRESHOLD: usize = 500_000;

            hit_objects.len() > THRESHOLD
        }

        #[inline]
        const fn too_dense(i: usize, curr: &HitObject, hit_objects: &[HitObject]) -> bool {
            const PER_1S: usize = 100; // 100 notes per 1s = 6000BPM
            const PER_10S: usize = 250; // 250 notes per 10s = 1500BPM

            (hit_objects.len() > i + PER_1S
                && hit_objects[i + PER_1S].start_time - curr.start_time < 1000.0)
                || (hit_objects.len() > i + PER_10S
                    && hit_objects[i + PER_10S].start_time - curr.start_time < 10_000.0)
        }

        fn not_finite(h: &HitObject) -> bool {
            if !h.start_time.is_finite() {
                return true;
            }

            match h.kind {
                HitObjectKind::Beat { angle } | HitObjectKind::SliderRepeat { angle, .. } => {
                    !angle.is_finite()
                }
                HitObjectKind::StrictHardBeat { angle, range } => {
                    !angle.is_finite() || !range.is_finite()
                }
                HitObjectKind::Slider(ref slider) => {
                    !slider.angle.is_finite()
                        || slider
                            .path
                            .nodes()
                            .iter()
                            .any(|node| !node.time.is_finite() || !node.angle.is_finite())
                }
                HitObjectKind::HardBeat => false,
            }
        }

        if too_many_objects(&map.hit_objects) {
            return Some(Self::ObjectCount);
        }

        if map.hit_objects.iter().any(not_finite) {
            return Some(Self::NonFinite);
        }

        if map
            .hit_objects
            .windows(2)
            .any(|window| window[1].start_time < window[0].start_time)
        {
            return Some(Self::Unordered);
        }

        if too_long(&map.hit_objects) {
            return Some(Self::Length);
        }

        for (i, h) in map.hit_objects.iter().enumerate() {
            if too_dense(i, h, &map.hit_objects) {
                return Some(Self::Density);
            }
        }

        None
    }
}
