use std::cmp;

use crate::{
    any::{
        hitresult_generator::{Closest, Fast, HitResultParams},
        HitResultGenerator,
    },
    tau::score_state::TauHitResults,
};

/// Parameters to generate [`TauHitResults`] from.
#[derive(Clone, Debug, PartialEq)]
pub struct TauHitResultParams {
    // Guaranteed to be correct
    pub total_hits: u32,
    pub misses: u32,

    // Provided by user; may be infeasable
    pub acc: f64,
}

impl TauHitResultParams {
    /// Amount of greats that would match the accuracy if fractional results
    /// were possible.
    ///
    /// acc = (3*n_great + n_ok) / (3*total_hits) and n_great + n_ok = remain
    /// so 2*n_great = 3*total_hits*acc - remain.
    fn raw_n_great(&self, remain: u32) -> f64 {
        (3.0 * f64::from(self.total_hits) * self.acc - f64::from(remain)) / 2.0
    }

    fn hitresults(&self, n_great: u32, remain: u32) -> TauHitResults {
        TauHitResults {
            n_great,
            n_ok: remain - n_great,
            misses: self.total_hits - remain,
        }
    }
}

impl HitResultParams for TauHitResultParams {
    type HitResults = TauHitResults;
}

impl HitResultGenerator<TauHitResultParams> for Fast {
    fn generate_hitresults(params: &TauHitResultParams) -> TauHitResults {
        let misses = cmp::min(params.misses, params.total_hits);
        let remain = params.total_hits - misses;

        let raw = params.raw_n_great(remain).round();
        let n_great = cmp::min(raw.max(0.0) as u32, remain);

        params.hitresults(n_great, remain)
    }
}

impl HitResultGenerator<TauHitResultParams> for Closest {
    fn generate_hitresults(params: &TauHitResultParams) -> TauHitResults {
        let misses = cmp::min(params.misses, params.total_hits);
        let remain = params.total_hits - misses;

        let raw = params.raw_n_great(remain).max(0.0);
        let min_n_great = cmp::min(remain, raw.floor() as u32);
        let max_n_great = cmp::min(remain, raw.ceil() as u32);

        let mut best = params.hitresults(max_n_great, remain);
        let mut best_dist = (params.acc - best.accuracy()).abs();

        // Prefer more greats on equal distance
        for n_great in (min_n_great..max_n_great).rev() {
            let curr = params.hitresults(n_great, remain);
            let dist = (params.acc - curr.accuracy()).abs();

            if dist < best_dist {
                best_dist = dist;
                best = curr;
            }
        }

        best
    }
}
