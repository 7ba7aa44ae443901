//! Library to calculate difficulty and performance attributes for the tau
//! ruleset.
//!
//! ## Description
//!
//! Every hit object of a map is paired with its predecessor to derive
//! timing and angular features. Those are fed through the aim, speed, and
//! complexity skills whose strain peaks make up the star rating. Performance
//! points are calculated from the resulting difficulty attributes and the
//! statistics of a score.
//!
//! Decoding beatmap files is not part of this crate; a [`Beatmap`] is built
//! from already decoded [`HitObject`]s.
//!
//! ## Usage
//!
//! ```
//! use tau_pp::{Beatmap, Difficulty, TauPerformance};
//! use tau_pp::model::hit_object::{HitObject, HitObjectKind};
//!
//! let map = Beatmap {
//!     od: 8.0,
//!     ..Beatmap::new(vec![
//!         HitObject::new(0.0, HitObjectKind::Beat { angle: 0.0 }),
//!         HitObject::new(200.0, HitObjectKind::Beat { angle: 90.0 }),
//!         HitObject::new(400.0, HitObjectKind::HardBeat),
//!         HitObject::new(600.0, HitObjectKind::Beat { angle: 270.0 }),
//!     ])
//! };
//!
//! // Calculate difficulty attributes
//! let diff_attrs = Difficulty::new()
//!     .mods(64) // DT
//!     .calculate(&map);
//!
//! let stars = diff_attrs.stars;
//!
//! // Calculate performance attributes
//! let perf_attrs = TauPerformance::new(diff_attrs)
//!     // To speed up the calculation significantly, we can re-use the
//!     // previous attributes.
//!     // **Note** that this should only be done if the map, mods, and
//!     // amount of passed objects stay the same. Otherwise, the resulting
//!     // attributes will be incorrect.
//!     .mods(64) // DT, same as before
//!     .combo(3)
//!     .accuracy(97.5)
//!     .misses(1)
//!     .calculate();
//!
//! let pp = perf_attrs.pp();
//!
//! // Again, we re-use the previous attributes for maximum efficiency.
//! let max_pp = perf_attrs.performance()
//!     .mods(64) // Still the same
//!     .calculate()
//!     .pp();
//!
//! println!("Stars: {stars} | PP: {pp}/{max_pp}");
//! ```
//!
//! ## Features
//!
//! | Flag | Description |
//! | - | - |
//! | `default` | No features |
//! | `parallel` | Process the skills of a difficulty calculation on scoped threads. |
//!
//! Log events are emitted through [`tracing`]; no subscriber is installed
//! by this crate.
//!
//! [`HitObject`]: model::hit_object::HitObject
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names
)]

#[macro_use]
mod util;

#[doc(inline)]
pub use self::{
    any::{Difficulty, HitResultPriority},
    model::{beatmap::Beatmap, mods::GameMods},
    tau::{
        TauDifficultyAttributes, TauPerformance, TauPerformanceAttributes, TauScoreState,
        TauStrains,
    },
};

/// Types for calculations of any mode.
pub mod any;

/// Types for tau calculations.
pub mod tau;

/// Types used in and around this crate.
pub mod model;
