use proptest::prelude::*;
use tau_pp::{
    model::{
        beatmap::TooSuspicious,
        hit_object::{HitObject, HitObjectKind},
    },
    Beatmap, Difficulty,
};

use self::common::*;

mod common;

#[test]
fn empty_map() {
    let attrs = Difficulty::new().calculate(&Beatmap::default());

    assert_eq_float(attrs.stars, 0.0);
    assert_eq_float(attrs.aim, 0.0);
    assert_eq_float(attrs.speed, 0.0);
    assert_eq_float(attrs.complexity, 0.0);
    assert_eq!(attrs.max_combo, 0);
    assert_eq!(attrs.n_objects(), 0);

    let strains = Difficulty::new().strains(&Beatmap::default());
    assert!(strains.aim.iter().all(|&peak| peak == 0.0));
}

#[test]
fn single_object() {
    let map = beats(&[90.0], 0.0, 5.0);
    let attrs = Difficulty::new().calculate(&map);

    assert_eq_float(attrs.aim, 0.0);
    assert_eq_float(attrs.speed, 0.0);
    assert_eq_float(attrs.complexity, 0.0);
    assert!(attrs.stars > 0.0);
    assert_eq!(attrs.max_combo, 1);
    assert_eq!(attrs.n_beats, 1);
}

#[test]
fn small_angle_changes_are_not_aim() {
    let gated = beats(&[0.0, 15.0, 20.0], 500.0, 5.0);
    let attrs = Difficulty::new().calculate(&gated);

    assert_eq_float(attrs.aim, 0.0);
    assert_eq_float(attrs.aim_no_sliders, 0.0);

    let aimed = beats(&[0.0, 15.0, 90.0], 500.0, 5.0);
    let aimed_attrs = Difficulty::new().calculate(&aimed);

    assert!(aimed_attrs.aim > 0.0);
    assert!(aimed_attrs.aim > attrs.aim);
}

#[test]
fn higher_od_narrows_gating() {
    // 7° change is below the OD 5 range of 9° but above the OD 10 range of 5°
    let angles = [0.0, 30.0, 37.0];

    let od5 = Difficulty::new().calculate(&beats(&angles, 300.0, 5.0));
    let od10 = Difficulty::new().calculate(&beats(&angles, 300.0, 10.0));

    assert_eq_float(od5.aim, 0.0);
    assert!(od10.aim > 0.0);
}

#[test]
fn alternating_categories_are_more_complex() {
    let repetitive = beats(&[5.0, 0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0, 5.0], 250.0, 5.0);
    let alternating = beats(
        &[0.0, 70.0, 10.0, 80.0, 15.0, 90.0, 20.0, 100.0, 25.0],
        250.0,
        5.0,
    );

    let repetitive = Difficulty::new().calculate(&repetitive);
    let alternating = Difficulty::new().calculate(&alternating);

    assert_eq_float(repetitive.complexity, 0.0);
    assert!(alternating.complexity > repetitive.complexity);
}

#[test]
fn counts() {
    let attrs = Difficulty::new().calculate(&mixed(70, 300.0));

    assert_eq!(attrs.n_objects(), 70);
    assert_eq!(attrs.n_sliders, 10);
    assert_eq!(attrs.n_hard_beats, 20);
    assert_eq!(attrs.n_beats, 40);
    // Sliders at odd indices have one repeat
    assert_eq!(attrs.max_combo, 60 + 5 * 2 + 5 * 3);
}

#[test]
fn clock_rate_mods() {
    let map = mixed(100, 300.0);

    let nomod = Difficulty::new().calculate(&map);
    let dt = Difficulty::new().mods(DT).calculate(&map);
    let ht = Difficulty::new().mods(HT).calculate(&map);
    let custom = Difficulty::new().clock_rate(1.5).calculate(&map);

    assert!(dt.stars > nomod.stars);
    assert!(ht.stars < nomod.stars);
    assert!(dt.great_hit_window < nomod.great_hit_window);
    assert!(dt.ar > nomod.ar);

    assert_eq_float(custom.stars, dt.stars);
    assert_eq!(custom.max_combo, dt.max_combo);
}

#[test]
fn relax_and_autopilot() {
    let map = mixed(100, 250.0);

    let rx = Difficulty::new().mods(RX).calculate(&map);
    assert!(rx.aim > 0.0);
    assert_eq_float(rx.speed, 0.0);
    assert_eq_float(rx.complexity, 0.0);

    let ap = Difficulty::new().mods(AP).calculate(&map);
    assert_eq_float(ap.aim, 0.0);
    assert_eq_float(ap.aim_no_sliders, 0.0);
    assert_eq_float(ap.slider_factor, 1.0);
    assert!(ap.speed > 0.0);
}

#[test]
fn hardrock_and_easy() {
    let map = mixed(50, 300.0);

    let nomod = Difficulty::new().calculate(&map);
    let hr = Difficulty::new().mods(HR).calculate(&map);
    let ez = Difficulty::new().mods(EZ).calculate(&map);

    assert!(hr.od > nomod.od);
    assert!(ez.od < nomod.od);
    assert!(hr.great_hit_window < ez.great_hit_window);
}

#[test]
fn passed_objects() {
    let map = mixed(100, 300.0);

    let partial = Difficulty::new().passed_objects(40).calculate(&map);

    let truncated = Beatmap {
        hit_objects: map.hit_objects[..40].to_vec(),
        ..map.clone()
    };

    let expected = Difficulty::new().calculate(&truncated);

    assert_eq!(partial, expected);
    assert_eq!(partial.n_objects(), 40);
}

#[test]
fn checked_calculate() {
    let map = mixed(20, 300.0);

    let checked = Difficulty::new().checked_calculate(&map);
    assert_eq!(checked, Ok(Difficulty::new().calculate(&map)));

    let mut unordered = map;
    unordered.hit_objects.swap(3, 4);

    assert_eq!(
        Difficulty::new().checked_calculate(&unordered),
        Err(TooSuspicious::Unordered)
    );
}

#[test]
fn strains_cover_every_section() {
    let map = mixed(100, 300.0);
    let strains = Difficulty::new().strains(&map);

    assert_eq!(strains.aim.len(), strains.aim_no_sliders.len());
    assert_eq!(strains.aim.len(), strains.speed.len());
    assert_eq!(strains.aim.len(), strains.complexity.len());

    // 99 * 300ms starting at 300ms, one section per 400ms
    assert_eq!(strains.speed.len(), 75);
    assert!(strains.speed.iter().any(|&peak| peak > 0.0));
}

#[test]
fn gap_sections_carry_strain() {
    let hit_objects = [(0.0, 0.0), (150.0, 90.0), (300.0, 180.0), (3000.0, 270.0)]
        .into_iter()
        .map(|(start_time, angle)| HitObject::new(start_time, HitObjectKind::Beat { angle }))
        .collect();

    let strains = Difficulty::new().strains(&Beatmap::new(hit_objects));
    let aim = &strains.aim;

    // Sections end at 400, 800, ..., 2800 and the last one holds 3000ms
    assert_eq!(aim.len(), 8);
    assert!(aim[0] > 0.0);

    // The strain is not decayed towards the boundaries inside the gap
    for &peak in &aim[1..7] {
        assert_eq_float(peak, aim[0]);
    }

    assert!(aim[7] > 0.0);
}

#[test]
fn aim_facets_agree_on_sliders() {
    let map = mixed(100, 300.0);
    let attrs = Difficulty::new().calculate(&map);

    assert!(attrs.n_sliders > 0);
    assert!(attrs.aim > 0.0);
    assert_eq_float(attrs.aim_no_sliders, attrs.aim);
    assert_eq_float(attrs.slider_factor, 1.0);

    let strains = Difficulty::new().strains(&map);
    assert_eq!(strains.aim, strains.aim_no_sliders);
}

#[test]
fn hard_beats_have_no_aim() {
    let hit_objects = (0..20)
        .map(|i| HitObject::new(f64::from(i) * 200.0, HitObjectKind::HardBeat))
        .collect();

    let attrs = Difficulty::new().calculate(&Beatmap::new(hit_objects));

    assert_eq_float(attrs.aim, 0.0);
    assert_eq_float(attrs.complexity, 0.0);
    assert!(attrs.speed > 0.0);
}

fn arbitrary_map() -> impl Strategy<Value = Beatmap> {
    let object = (25.0_f64..1000.0, 0.0_f64..360.0, 0_u8..5);

    (prop::collection::vec(object, 0..150), 0.0_f32..=10.0).prop_map(|(objects, od)| {
        let mut start_time = 0.0;

        let hit_objects = objects
            .into_iter()
            .map(|(delta, angle, kind)| {
                start_time += delta;

                let kind = match kind {
                    0 => HitObjectKind::HardBeat,
                    1 => HitObjectKind::StrictHardBeat { angle, range: 25.0 },
                    2 => slider(angle, delta / 2.0, 45.0, 1),
                    _ => HitObjectKind::Beat { angle },
                };

                HitObject::new(start_time, kind)
            })
            .collect();

        Beatmap {
            od,
            ..Beatmap::new(hit_objects)
        }
    })
}

proptest! {
    #[test]
    fn attributes_are_finite(map in arbitrary_map(), mods in prop::sample::select(vec![NM, DT, HT, HR, EZ])) {
        let attrs = Difficulty::new().mods(mods).calculate(&map);

        prop_assert!(attrs.stars.is_finite() && attrs.stars >= 0.0);
        prop_assert!(attrs.aim.is_finite() && attrs.aim >= 0.0);
        prop_assert!(attrs.speed.is_finite() && attrs.speed >= 0.0);
        prop_assert!(attrs.complexity.is_finite() && attrs.complexity >= 0.0);
        prop_assert!((0.0..=1.0).contains(&attrs.slider_factor));
        prop_assert!(attrs.aim_no_sliders <= attrs.aim);
    }
}
