use std::{cmp, f64::consts::PI};

use crate::{
    any::difficulty::object::IDifficultyObject,
    tau::difficulty::object::TauDifficultyObject,
};

pub struct RhythmEvaluator;

impl RhythmEvaluator {
    const HISTORY_TIME_MAX: u32 = 5 * 1000; // 5 seconds
    const HISTORY_OBJECTS_MAX: usize = 32;
    const RHYTHM_MULTIPLIER: f64 = 0.75;
    const MAX_ISLAND_SIZE: usize = 7;

    /// Calculates a rhythm multiplier for the difficulty of the tap
    /// associated with historic data of the current object.
    pub fn evaluate_diff_of<'a>(
        curr: &'a TauDifficultyObject<'a>,
        diff_objects: &'a [TauDifficultyObject<'a>],
        great_window: f64,
    ) -> f64 {
        let mut previous_island_size = 0;
        let mut rhythm_complexity_sum = 0.0;
        let mut island_size = 1;

        // Ratio of the current start of an island to buff for tighter rhythms
        let mut start_ratio = 0.0;
        let mut first_delta_switch = false;

        let historical_note_count = cmp::min(curr.idx, Self::HISTORY_OBJECTS_MAX);

        let mut rhythm_start = 0;

        while curr
            .previous(rhythm_start, diff_objects)
            .filter(|prev| {
                rhythm_start + 2 < historical_note_count
                    && curr.start_time - prev.start_time < f64::from(Self::HISTORY_TIME_MAX)
            })
            .is_some()
        {
            rhythm_start += 1;
        }

        let Some((mut prev_obj, mut last_obj)) = curr
            .previous(rhythm_start, diff_objects)
            .zip(curr.previous(rhythm_start + 1, diff_objects))
        else {
            return Self::multiplier(rhythm_complexity_sum);
        };

        // Go from the furthest object back to the current one
        for i in (1..=rhythm_start).rev() {
            let Some(curr_obj) = curr.previous(i - 1, diff_objects) else {
                break;
            };

            // Scales note 0 to 1 from history to now
            let time_decay = (f64::from(Self::HISTORY_TIME_MAX)
                - (curr.start_time - curr_obj.start_time))
                / f64::from(Self::HISTORY_TIME_MAX);
            let note_decay = (historical_note_count - i) as f64 / historical_note_count as f64;

            // Either limited by time or by object count
            let curr_historical_decay = note_decay.min(time_decay);

            let curr_delta = curr_obj.strain_time;
            let prev_delta = prev_obj.strain_time;
            let last_delta = last_obj.strain_time;

            let curr_ratio = 1.0
                + 6.0
                    * f64::min(
                        0.5,
                        f64::powf(
                            f64::sin(PI / (prev_delta.min(curr_delta) / prev_delta.max(curr_delta))),
                            2.0,
                        ),
                    );

            let window_penalty = f64::min(
                1.0,
                f64::max(0.0, (prev_delta - curr_delta).abs() - great_window * 0.6)
                    / (great_window * 0.6),
            );

            let mut effective_ratio = window_penalty * curr_ratio;

            if first_delta_switch {
                if !(prev_delta > 1.25 * curr_delta || prev_delta * 1.25 < curr_delta) {
                    if island_size < Self::MAX_ISLAND_SIZE {
                        // Island is still progressing
                        island_size += 1;
                    }
                } else {
                    if curr_obj.base.is_slider() {
                        // BPM change is into a slider, this is easy acc window
                        effective_ratio *= 0.125;
                    }

                    if prev_obj.base.is_slider() {
                        // BPM change was from a slider, this is typically
                        // easier than circle -> circle
                        effective_ratio *= 0.25;
                    }

                    if previous_island_size == island_size {
                        // Repeated island size (ex: triplet -> triplet)
                        effective_ratio *= 0.25;
                    }

                    if previous_island_size % 2 == island_size % 2 {
                        // Repeated island polarity (2 -> 4, 3 -> 5)
                        effective_ratio *= 0.5;
                    }

                    if last_delta > prev_delta + 10.0 && prev_delta > curr_delta + 10.0 {
                        // Previous increase happened a note ago, 1/1->1/2-1/4,
                        // don't want to buff this
                        effective_ratio *= 0.125;
                    }

                    rhythm_complexity_sum += (effective_ratio * start_ratio).sqrt()
                        * curr_historical_decay
                        * ((4 + island_size) as f64).sqrt()
                        / 2.0
                        * ((4 + previous_island_size) as f64).sqrt()
                        / 2.0;

                    start_ratio = effective_ratio;
                    previous_island_size = island_size;

                    if prev_delta * 1.25 < curr_delta {
                        // We're slowing down, stop counting
                        // If we're speeding up, this stays true and we keep
                        // counting island size
                        first_delta_switch = false;
                    }

                    island_size = 1;
                }
            } else if prev_delta > 1.25 * curr_delta {
                // We want to be speeding up
                // Begin counting island until we change speed again
                first_delta_switch = true;
                start_ratio = effective_ratio;
                island_size = 1;
            }

            last_obj = prev_obj;
            prev_obj = curr_obj;
        }

        Self::multiplier(rhythm_complexity_sum)
    }

    fn multiplier(rhythm_complexity_sum: f64) -> f64 {
        (4.0 + rhythm_complexity_sum * Self::RHYTHM_MULTIPLIER).sqrt() / 2.0
    }
}
