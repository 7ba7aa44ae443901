use crate::util::strains_vec::StrainsVec;

/// A skill that accumulates strain over time and keeps track of the highest
/// strain per section.
pub trait StrainSkill: Sized {
    type DifficultyObject<'a>;
    type DifficultyObjects<'a>: ?Sized;

    const DECAY_WEIGHT: f64 = 0.9;
    const SECTION_LENGTH: i32 = 400;

    fn process<'a>(
        &mut self,
        curr: &Self::DifficultyObject<'a>,
        objects: &Self::DifficultyObjects<'a>,
    );

    fn save_current_peak(&mut self);

    /// Opens the next section, starting its peak at the carried strain.
    fn start_new_section(&mut self);

    /// The peaks of all closed sections plus the currently open one.
    fn current_strain_peaks(&self) -> StrainsVec;

    fn get_current_strain_peaks(
        mut strain_peaks: StrainsVec,
        current_section_peak: f64,
    ) -> StrainsVec {
        strain_peaks.push(current_section_peak);

        strain_peaks
    }

    fn difficulty_value(current_strain_peaks: StrainsVec) -> f64;

    fn into_difficulty_value(self) -> f64;

    fn cloned_difficulty_value(&self) -> f64;
}

/// A [`StrainSkill`] whose strain decays exponentially between objects.
pub trait StrainDecaySkill: StrainSkill {
    fn calculate_initial_strain(&self) -> f64;

    fn strain_value_at<'a>(
        &mut self,
        curr: &Self::DifficultyObject<'a>,
        objects: &Self::DifficultyObjects<'a>,
    ) -> f64;

    fn strain_decay(ms: f64) -> f64;
}

pub fn difficulty_value(current_strain_peaks: StrainsVec, decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // Sections with 0 strain are excluded to avoid worst-case time
    // complexity of the following sort. They would not contribute anyway.
    let mut peaks = current_strain_peaks;
    peaks.retain_non_zero_and_sort();

    // Weighted sum of the highest strains from every section, highest first
    for strain in peaks.iter() {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}
