/// The result of calculating the strains on a tau map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct TauStrains {
    /// Strain peaks of the aim skill.
    pub aim: Vec<f64>,
    /// Strain peaks of the aim skill without sliders.
    pub aim_no_sliders: Vec<f64>,
    /// Strain peaks of the speed skill.
    pub speed: Vec<f64>,
    /// Strain peaks of the complexity skill.
    pub complexity: Vec<f64>,
}

impl TauStrains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = 400.0;
}
