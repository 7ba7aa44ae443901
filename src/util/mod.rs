#[macro_use]
mod macros;

pub mod angle;
pub mod difficulty;
#[cfg(test)]
pub mod float_ext;
pub mod limited_queue;
pub mod map_or_attrs;
pub mod strains_vec;
