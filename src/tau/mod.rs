pub use self::{
    attributes::{TauDifficultyAttributes, TauPerformanceAttributes},
    performance::{TauHitResultParams, TauPerformance},
    score_state::{TauHitResults, TauScoreState},
    strains::TauStrains,
};

pub use crate::util::map_or_attrs::MapOrAttrs;

mod attributes;
pub(crate) mod difficulty;
mod object;
mod performance;
mod score_state;
mod strains;
