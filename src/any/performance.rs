/// While generating remaining hitresults, decide how they should be distributed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HitResultPriority {
    /// Prioritize good hitresults over bad ones
    #[default]
    BestCase,
    /// Prioritize bad hitresults over good ones
    WorstCase,
}

impl HitResultPriority {
    pub(crate) const DEFAULT: Self = Self::BestCase;
}
