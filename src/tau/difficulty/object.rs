use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    tau::object::TauObject,
    util::angle::delta_angle,
};

pub struct TauDifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a TauObject,
    pub start_time: f64,
    pub delta_time: f64,
    pub strain_time: f64,
    /// Only set if the base object has an angle.
    pub angled: Option<AngledProperties>,
}

/// Properties of a [`TauDifficultyObject`] whose base object has an angle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngledProperties {
    /// Index of the previous angled difficulty object.
    pub last_angled: Option<usize>,
    pub angle_range: f64,
    /// Signed difference towards the angle at which the previous angled
    /// object was left.
    pub angle_delta: f64,
    pub distance: f64,
    pub lazy_travel_distance: f64,
    pub travel_time: f64,
}

impl<'a> TauDifficultyObject<'a> {
    pub const MIN_DELTA_TIME: f64 = 25.0;

    /// `last_angled` must be the index of the previous angled difficulty
    /// object within `diff_objects`.
    pub fn new(
        hit_object: &'a TauObject,
        last_object: &TauObject,
        last_angled: Option<usize>,
        diff_objects: &[TauDifficultyObject<'a>],
        clock_rate: f64,
        idx: usize,
    ) -> Self {
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;
        let start_time = hit_object.start_time / clock_rate;
        let mut strain_time = delta_time.max(Self::MIN_DELTA_TIME);

        let angled = hit_object.angle.map(|angle| {
            let mut angle_delta = 0.0;
            let mut distance = 0.0;

            let last = last_angled.and_then(|idx| diff_objects.get(idx));

            if let Some((last, last_angle)) =
                last.and_then(|last| last.base.angle.map(|angle| (last, angle)))
            {
                angle_delta = delta_angle(angle, last_angle + last.base.offset_angle);
                distance = angle_delta.abs() + last.base.range.unwrap_or(0.0) / 2.0;
                strain_time = strain_time.max(start_time - last.start_time);
            }

            AngledProperties {
                last_angled,
                angle_range: hit_object.angle_range,
                angle_delta,
                distance,
                lazy_travel_distance: hit_object.lazy_travel_distance,
                travel_time: hit_object.travel_time / clock_rate,
            }
        });

        Self {
            idx,
            base: hit_object,
            start_time,
            delta_time,
            strain_time,
            angled,
        }
    }

    /// The previous angled difficulty object, if any.
    pub fn last_angled<'b>(
        &self,
        diff_objects: &'b [TauDifficultyObject<'a>],
    ) -> Option<&'b TauDifficultyObject<'a>> {
        self.angled
            .and_then(|angled| angled.last_angled)
            .and_then(|idx| diff_objects.get(idx))
    }
}

impl IDifficultyObject for TauDifficultyObject<'_> {
    type DifficultyObjects = [Self];

    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for TauDifficultyObject<'_> {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::hit_object::{HitObject, HitObjectKind},
        util::float_ext::FloatExt,
    };

    use super::*;

    fn objects(kinds: &[(f64, HitObjectKind)]) -> Vec<TauObject> {
        kinds
            .iter()
            .map(|(start_time, kind)| TauObject::new(&HitObject::new(*start_time, kind.clone()), 5.0))
            .collect()
    }

    fn diff_objects<'a>(objects: &'a [TauObject], clock_rate: f64) -> Vec<TauDifficultyObject<'a>> {
        let mut diff_objects = Vec::new();
        let mut last_angled = None;

        for (i, pair) in objects.windows(2).enumerate() {
            let obj = TauDifficultyObject::new(
                &pair[1],
                &pair[0],
                last_angled,
                &diff_objects,
                clock_rate,
                i,
            );

            if obj.angled.is_some() {
                last_angled = Some(i);
            }

            diff_objects.push(obj);
        }

        diff_objects
    }

    #[test]
    fn strain_time_has_minimum() {
        let objects = objects(&[
            (0.0, HitObjectKind::HardBeat),
            (10.0, HitObjectKind::HardBeat),
        ]);

        let diff_objects = diff_objects(&objects, 1.0);

        assert!(diff_objects[0].delta_time.eq(10.0));
        assert!(diff_objects[0].strain_time.eq(TauDifficultyObject::MIN_DELTA_TIME));
        assert!(diff_objects[0].angled.is_none());
    }

    #[test]
    fn angles_skip_hard_beats() {
        let objects = objects(&[
            (0.0, HitObjectKind::Beat { angle: 0.0 }),
            (100.0, HitObjectKind::Beat { angle: 350.0 }),
            (200.0, HitObjectKind::HardBeat),
            (300.0, HitObjectKind::Beat { angle: 20.0 }),
        ]);

        let diff_objects = diff_objects(&objects, 1.0);

        let first = diff_objects[0].angled.unwrap();
        assert!(first.last_angled.is_none());
        assert!(first.distance.eq(0.0));

        let last = diff_objects[2].angled.unwrap();
        assert_eq!(last.last_angled, Some(0));
        assert!(last.angle_delta.eq(30.0));
        assert!(last.distance.eq(30.0));

        // Time since the last angled object is longer than the delta time
        assert!(diff_objects[2].strain_time.eq(200.0));
    }

    #[test]
    fn strict_range_extends_distance() {
        let objects = objects(&[
            (0.0, HitObjectKind::HardBeat),
            (
                100.0,
                HitObjectKind::StrictHardBeat {
                    angle: 0.0,
                    range: 20.0,
                },
            ),
            (200.0, HitObjectKind::Beat { angle: 5.0 }),
        ]);

        let diff_objects = diff_objects(&objects, 1.0);
        let angled = diff_objects[1].angled.unwrap();

        assert!(angled.distance.eq(15.0));
    }

    #[test]
    fn clock_rate_scales_times() {
        let objects = objects(&[
            (0.0, HitObjectKind::Beat { angle: 0.0 }),
            (300.0, HitObjectKind::Beat { angle: 90.0 }),
            (600.0, HitObjectKind::Beat { angle: 180.0 }),
        ]);

        let nomod = diff_objects(&objects, 1.0);
        let double = diff_objects(&objects, 2.0);

        for (a, b) in nomod.iter().zip(double.iter()) {
            assert!(b.delta_time.eq(a.delta_time / 2.0));
            assert!(b.strain_time <= a.strain_time);
        }
    }
}
