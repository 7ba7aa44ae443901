/// Aggregation for a score's current state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TauScoreState {
    /// Maximum combo that the score has had so far.
    /// **Not** the maximum possible combo of the map so far.
    pub max_combo: u32,
    /// Amount of current greats.
    pub n_great: u32,
    /// Amount of current oks.
    pub n_ok: u32,
    /// Amount of current misses.
    pub misses: u32,
}

impl TauScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            n_great: 0,
            n_ok: 0,
            misses: 0,
        }
    }

    /// The judgement counts of this state.
    pub const fn hitresults(&self) -> TauHitResults {
        TauHitResults {
            n_great: self.n_great,
            n_ok: self.n_ok,
            misses: self.misses,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> u32 {
        self.hitresults().total_hits()
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f64 {
        self.hitresults().accuracy()
    }
}

/// Judgement counts of a score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TauHitResults {
    pub n_great: u32,
    pub n_ok: u32,
    pub misses: u32,
}

impl TauHitResults {
    /// Saturates at `u32::MAX`.
    pub const fn total_hits(&self) -> u32 {
        self.n_great.saturating_add(self.n_ok).saturating_add(self.misses)
    }

    /// Greats are worth 300 and oks 100.
    pub fn accuracy(&self) -> f64 {
        let n_great = u64::from(self.n_great);
        let n_ok = u64::from(self.n_ok);
        let total_hits = n_great + n_ok + u64::from(self.misses);

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = 3 * n_great + n_ok;
        let denominator = 3 * total_hits;

        numerator as f64 / denominator as f64
    }
}
