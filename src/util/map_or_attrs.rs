use std::borrow::Cow;

use crate::{
    tau::{TauDifficultyAttributes, TauPerformanceAttributes},
    Beatmap,
};

/// Either a beatmap or its previously calculated difficulty attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum MapOrAttrs<'map> {
    Map(Cow<'map, Beatmap>),
    Attrs(TauDifficultyAttributes),
}

impl MapOrAttrs<'_> {
    /// Return a mutable reference to the attributes.
    ///
    /// If `self` is of variant `Map`, store `attrs` in `self`, and return a
    /// mutable reference to it.
    pub fn insert_attrs(&mut self, attrs: TauDifficultyAttributes) -> &mut TauDifficultyAttributes {
        if let Self::Map(_) = self {
            *self = Self::Attrs(attrs);
        }

        match self {
            Self::Attrs(attrs) => attrs,
            Self::Map(_) => unreachable!(),
        }
    }
}

impl<'map> From<&'map Beatmap> for MapOrAttrs<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::Map(Cow::Borrowed(map))
    }
}

impl From<Beatmap> for MapOrAttrs<'_> {
    fn from(map: Beatmap) -> Self {
        Self::Map(Cow::Owned(map))
    }
}

impl From<TauDifficultyAttributes> for MapOrAttrs<'_> {
    fn from(attrs: TauDifficultyAttributes) -> Self {
        Self::Attrs(attrs)
    }
}

impl From<TauPerformanceAttributes> for MapOrAttrs<'_> {
    fn from(attrs: TauPerformanceAttributes) -> Self {
        Self::Attrs(attrs.difficulty)
    }
}
