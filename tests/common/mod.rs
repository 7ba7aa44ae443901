#![allow(unused)]

use tau_pp::{
    model::hit_object::{HitObject, HitObjectKind, PolarSliderPath, Slider, SliderNode},
    Beatmap,
};

pub const NM: u32 = 0;
pub const NF: u32 = 1;
pub const EZ: u32 = 2;
pub const HR: u32 = 16;
pub const DT: u32 = 64;
pub const RX: u32 = 128;
pub const HT: u32 = 256;
pub const AP: u32 = 8192;

/// Regular beats with the given angles, `spacing` ms apart.
pub fn beats(angles: &[f64], spacing: f64, od: f32) -> Beatmap {
    let hit_objects = angles
        .iter()
        .enumerate()
        .map(|(i, &angle)| HitObject::new(i as f64 * spacing, HitObjectKind::Beat { angle }))
        .collect();

    Beatmap {
        od,
        ..Beatmap::new(hit_objects)
    }
}

pub fn slider(angle: f64, duration: f64, sweep: f64, repeats: usize) -> HitObjectKind {
    HitObjectKind::Slider(Slider {
        angle,
        path: PolarSliderPath::new(vec![
            SliderNode::new(0.0, angle),
            SliderNode::new(duration / 2.0, angle + sweep / 2.0),
            SliderNode::new(duration, angle + sweep),
        ]),
        repeats,
        hard_head: false,
    })
}

/// A map of `n` objects mixing beats, sliders, hard beats, and strict hard
/// beats.
pub fn mixed(n: u32, spacing: f64) -> Beatmap {
    let hit_objects = (0..n)
        .map(|i| {
            let start_time = f64::from(i) * spacing;
            let angle = f64::from((i * 97) % 360);

            let kind = match i % 7 {
                2 => slider(angle, spacing / 2.0, 60.0, (i % 2) as usize),
                4 => HitObjectKind::HardBeat,
                6 => HitObjectKind::StrictHardBeat { angle, range: 30.0 },
                _ => HitObjectKind::Beat { angle },
            };

            HitObject::new(start_time, kind)
        })
        .collect();

    Beatmap {
        ar: 9.0,
        od: 8.0,
        cs: 4.0,
        hp: 5.0,
        hit_objects,
    }
}

pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < f64::EPSILON, "{a} != {b}")
}
