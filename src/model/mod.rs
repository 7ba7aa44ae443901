/// Beatmap and its difficulty settings.
pub mod beatmap;

/// Hit objects and slider paths.
pub mod hit_object;

/// Game mods.
pub mod mods;
