/// Generates hitresults for the given parameters.
///
/// Parameters may be infeasible, e.g. an accuracy that can't be reached with
/// the given amount of misses, so generators are expected to clamp rather
/// than fail.
pub trait HitResultGenerator<P: HitResultParams> {
    fn generate_hitresults(params: &P) -> P::HitResults;
}

/// Input of a [`HitResultGenerator`].
pub trait HitResultParams {
    type HitResults;
}

/// [`HitResultGenerator`] whose result is generated as fast as possible.
///
/// This generator prioritizes performance over accuracy.
pub struct Fast;

/// [`HitResultGenerator`] whose result is the closest to the target accuracy.
///
/// Although the result is not guaranteed to be unique, i.e. there may be other
/// results with the same accuracy, [`Closest`] guarantees that there are no
/// other results that are *closer* to the target accuracy.
pub struct Closest;
