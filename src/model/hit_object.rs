use std::cmp::Ordering;

use crate::util::angle::delta_angle;

/// All hitobject related data required for difficulty and performance
/// calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Create a new [`HitObject`].
    pub const fn new(start_time: f64, kind: HitObjectKind) -> Self {
        Self { start_time, kind }
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is one of the hard beat variants.
    pub const fn is_hard(&self) -> bool {
        matches!(
            &self.kind,
            HitObjectKind::HardBeat | HitObjectKind::StrictHardBeat { .. }
        )
    }

    /// The angle of the object in degrees.
    ///
    /// Returns `None` for objects that are hit regardless of the cursor's
    /// position, i.e. [`HitObjectKind::HardBeat`].
    pub const fn angle(&self) -> Option<f64> {
        match self.kind {
            HitObjectKind::Beat { angle }
            | HitObjectKind::StrictHardBeat { angle, .. }
            | HitObjectKind::SliderRepeat { angle, .. } => Some(angle),
            HitObjectKind::Slider(ref slider) => Some(slider.angle),
            HitObjectKind::HardBeat => None,
        }
    }

    /// Angle that is added onto [`HitObject::angle`] to get the angle at
    /// which the object is left.
    pub fn offset_angle(&self) -> f64 {
        match self.kind {
            HitObjectKind::Slider(ref slider) => slider.path.end_angle(),
            HitObjectKind::SliderRepeat { slider_angle, .. } => slider_angle,
            HitObjectKind::Beat { .. }
            | HitObjectKind::HardBeat
            | HitObjectKind::StrictHardBeat { .. } => 0.0,
        }
    }

    /// The object's own angular tolerance in degrees, if any.
    pub const fn range(&self) -> Option<f64> {
        match self.kind {
            HitObjectKind::StrictHardBeat { range, .. } => Some(range),
            _ => None,
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    /// A regular note on the ring.
    Beat { angle: f64 },
    /// A note spanning the whole ring.
    HardBeat,
    /// A hard beat that only spans `range` degrees around `angle`.
    StrictHardBeat { angle: f64, range: f64 },
    /// A note that has to be followed along its path.
    Slider(Slider),
    /// A repeat point of a slider.
    SliderRepeat { angle: f64, slider_angle: f64 },
}

/// A slider.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub angle: f64,
    pub path: PolarSliderPath,
    pub repeats: usize,
    /// Whether the slider starts with a hard beat instead of a regular
    /// beat.
    pub hard_head: bool,
}

/// A node of a [`PolarSliderPath`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SliderNode {
    pub time: f64,
    pub angle: f64,
}

impl SliderNode {
    pub const fn new(time: f64, angle: f64) -> Self {
        Self { time, angle }
    }
}

/// Path of a slider described by angles over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolarSliderPath {
    nodes: Vec<SliderNode>,
}

impl PolarSliderPath {
    /// Create a new path. The nodes will be sorted by their time.
    pub fn new(mut nodes: Vec<SliderNode>) -> Self {
        nodes.sort_by(|a, b| a.time.total_cmp(&b.time));

        Self { nodes }
    }

    pub fn nodes(&self) -> &[SliderNode] {
        &self.nodes
    }

    /// Time between the first and last node.
    pub fn duration(&self) -> f64 {
        match self.nodes.as_slice() {
            [first, .., last] => last.time - first.time,
            _ => 0.0,
        }
    }

    /// The angle of the last node or `0.0` if there are no nodes.
    pub fn end_angle(&self) -> f64 {
        self.nodes.last().map_or(0.0, |node| node.angle)
    }

    /// Total angular distance covered by the path.
    pub fn calculated_distance(&self) -> f64 {
        self.nodes
            .windows(2)
            .map(|window| delta_angle(window[1].angle, window[0].angle).abs())
            .sum()
    }

    /// Angular distance the cursor needs to cover if it stays within
    /// `half_tolerance` degrees of the path.
    pub fn calculate_lazy_distance(&self, half_tolerance: f64) -> f64 {
        let Some(first) = self.nodes.first() else {
            return 0.0;
        };

        let mut length = 0.0;
        let mut lazy_angle = first.angle;

        for node in self.nodes.iter() {
            let delta = delta_angle(node.angle, lazy_angle);

            if delta.abs() > half_tolerance {
                lazy_angle += delta - half_tolerance.copysign(delta);
                length += delta.abs();
            }
        }

        length
    }
}
