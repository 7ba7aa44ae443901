pub use self::{
    aim::AimEvaluator, complexity::ComplexityEvaluator, rhythm::RhythmEvaluator,
    speed::SpeedEvaluator,
};

mod aim;
mod complexity;
mod rhythm;
mod speed;
