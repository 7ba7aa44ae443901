use crate::{
    model::hit_object::{HitObject, HitObjectKind},
    util::angle::normalize_angle,
};

/// A [`HitObject`] together with all geometric properties that only depend
/// on the map's settings.
///
/// Built once per calculation before any difficulty object is created so
/// that all skills see the same resolved angle range.
#[derive(Clone, Debug, PartialEq)]
pub struct TauObject {
    pub start_time: f64,
    pub kind: TauObjectKind,
    /// The angle at which the object is hit, `None` for hard beats.
    pub angle: Option<f64>,
    /// Angle that is added onto `angle` when the object is left.
    pub offset_angle: f64,
    /// The object's own angular tolerance.
    pub range: Option<f64>,
    /// Minimum angular distance towards this object that counts as aiming.
    pub angle_range: f64,
    /// `angle + offset_angle` in `[0, 360)`.
    pub normalized_angle: Option<f64>,
    pub lazy_travel_distance: f64,
    /// Duration of the slider path, not yet adjusted to the clock rate.
    pub travel_time: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TauObjectKind {
    Beat,
    HardBeat,
    StrictHardBeat,
    Slider { repeats: usize, hard_head: bool },
    SliderRepeat,
}

impl TauObject {
    pub fn new(h: &HitObject, od: f64) -> Self {
        let kind = match h.kind {
            HitObjectKind::Beat { .. } => TauObjectKind::Beat,
            HitObjectKind::HardBeat => TauObjectKind::HardBeat,
            HitObjectKind::StrictHardBeat { .. } => TauObjectKind::StrictHardBeat,
            HitObjectKind::Slider(ref slider) => TauObjectKind::Slider {
                repeats: slider.repeats,
                hard_head: slider.hard_head,
            },
            HitObjectKind::SliderRepeat { .. } => TauObjectKind::SliderRepeat,
        };

        let angle = h.angle();
        let offset_angle = h.offset_angle();
        let range = h.range();

        let mut angle_range = angle_range(od);

        if let Some(range) = range.filter(|&range| range > 0.0) {
            angle_range = angle_range.max(range * 1.5);
        }

        let (lazy_travel_distance, travel_time) = match h.kind {
            HitObjectKind::Slider(ref slider) => (
                slider.path.calculate_lazy_distance(angle_range / 2.0),
                slider.path.duration(),
            ),
            _ => (0.0, 0.0),
        };

        Self {
            start_time: h.start_time,
            kind,
            angle,
            offset_angle,
            range,
            angle_range,
            normalized_angle: angle.map(|angle| normalize_angle(angle + offset_angle)),
            lazy_travel_distance,
            travel_time,
        }
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, TauObjectKind::Slider { .. })
    }

    /// Whether the object is hit regardless of its angle for pattern
    /// purposes.
    pub const fn has_hard_hit(&self) -> bool {
        matches!(
            self.kind,
            TauObjectKind::HardBeat
                | TauObjectKind::StrictHardBeat
                | TauObjectKind::Slider {
                    hard_head: true,
                    ..
                }
        )
    }

    pub const fn combo(&self) -> u32 {
        match self.kind {
            TauObjectKind::Slider { repeats, .. } => 2 + repeats as u32,
            _ => 1,
        }
    }
}

/// Angle range in degrees below which a change in direction is not
/// considered as aiming.
///
/// OD 0 maps to 14°, OD 5 to 9°, and OD 10 to 5°.
pub fn angle_range(od: f64) -> f64 {
    let od = od.clamp(0.0, 10.0);

    if od <= 5.0 {
        14.0 - 5.0 * (od / 5.0)
    } else {
        9.0 - 4.0 * ((od - 5.0) / 5.0)
    }
}
