pub use self::{
    difficulty::{Difficulty, ModsDependent},
    hitresult_generator::HitResultGenerator,
    performance::HitResultPriority,
};

/// Hitresult generators that implement [`HitResultGenerator`].
///
/// [`HitResultGenerator`]: hitresult_generator::HitResultGenerator
pub mod hitresult_generator;

pub(crate) mod difficulty;
mod performance;
