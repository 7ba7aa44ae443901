use crate::{
    tau::difficulty::object::TauDifficultyObject, util::limited_queue::LimitedQueue,
};

/// Coarse category of an object for mono pattern detection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitType {
    /// Objects within the vertical band or hit regardless of their angle.
    Hard,
    Angled,
}

impl HitType {
    const HARD_BAND: f64 = 45.0;

    pub fn new(curr: &TauDifficultyObject<'_>) -> Self {
        if curr.base.has_hard_hit() {
            return Self::Hard;
        }

        match curr.base.normalized_angle {
            Some(angle) if angle % 180.0 >= Self::HARD_BAND => Self::Angled,
            Some(_) | None => Self::Hard,
        }
    }
}

/// Keeps track of mono patterns, i.e. runs of objects of the same
/// [`HitType`], and rewards switching between them.
#[derive(Clone, Debug)]
pub struct ComplexityEvaluator {
    mono_history: LimitedQueue<usize, { Self::MONO_HISTORY_MAX_LENGTH }>,
    previous_hit_type: Option<HitType>,
    current_mono_length: usize,
}

impl ComplexityEvaluator {
    const MONO_HISTORY_MAX_LENGTH: usize = 5;
    const MOST_RECENT_PATTERNS_TO_COMPARE: usize = 2;
    const RESET_DELTA_TIME: f64 = 1000.0;

    pub fn new() -> Self {
        Self {
            mono_history: LimitedQueue::new(),
            previous_hit_type: None,
            current_mono_length: 0,
        }
    }

    pub fn evaluate_diff_of(&mut self, curr: &TauDifficultyObject<'_>) -> f64 {
        let hit_type = HitType::new(curr);

        if curr.delta_time >= Self::RESET_DELTA_TIME {
            self.mono_history.clear();
            self.current_mono_length = 1;
            self.previous_hit_type = Some(hit_type);

            return 0.0;
        }

        let mut object_strain = 0.0;

        match self.previous_hit_type {
            Some(prev) if prev != hit_type => {
                object_strain = 1.0;

                match self.mono_history.last() {
                    Some(&last) if self.mono_history.len() >= 2 => {
                        if (last + self.current_mono_length) % 2 == 0 {
                            object_strain *= 0.5;
                        } else {
                            object_strain *= 1.5;
                        }
                    }
                    _ => object_strain = 0.0,
                }

                self.mono_history.push(self.current_mono_length);
                object_strain *= self.repetition_penalties();
                self.current_mono_length = 1;
            }
            _ => self.current_mono_length += 1,
        }

        self.previous_hit_type = Some(hit_type);

        object_strain
    }

    /// Penalty for the most recent mono pattern if it already appeared
    /// within the history.
    fn repetition_penalties(&self) -> f64 {
        let len = self.mono_history.len();

        let Some(last_start) = len.checked_sub(Self::MOST_RECENT_PATTERNS_TO_COMPARE + 1) else {
            return 1.0;
        };

        (0..=last_start)
            .rev()
            .find(|&start| self.is_same_pattern(start))
            .map_or(1.0, |start| {
                let notes_since: usize = (start..len).map(|i| self.mono_history[i]).sum();

                Self::repetition_penalty(notes_since)
            })
    }

    fn is_same_pattern(&self, start: usize) -> bool {
        let len = self.mono_history.len();
        let recent_start = len - Self::MOST_RECENT_PATTERNS_TO_COMPARE;

        (0..Self::MOST_RECENT_PATTERNS_TO_COMPARE)
            .all(|i| self.mono_history[start + i] == self.mono_history[recent_start + i])
    }

    fn repetition_penalty(notes_since: usize) -> f64 {
        f64::min(1.0, 0.032 * notes_since as f64)
    }
}

impl Default for ComplexityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
