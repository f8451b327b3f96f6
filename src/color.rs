// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Color resolution

use crate::{Color, ColorId, ParseColorError};
use std::collections::HashMap;

/// Maps abstract color identifiers to concrete colors
///
/// This is supplied by the host environment (e.g. a theme or resource
/// table). It is implemented for [`Palette`] and for closures
/// `Fn(ColorId) -> Option<Color>`.
pub trait ColorResolver {
    /// Resolve `id`, returning `None` if it is unknown
    fn resolve(&self, id: ColorId) -> Option<Color>;
}

impl<F: Fn(ColorId) -> Option<Color>> ColorResolver for F {
    #[inline]
    fn resolve(&self, id: ColorId) -> Option<Color> {
        self(id)
    }
}

/// A table of colors
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: HashMap<ColorId, Color>,
}

impl Palette {
    /// Construct an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from `(id, color)` pairs where colors are written as in
    /// [`Color::parse`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use spannable::{Color, ColorId, ColorResolver, Palette};
    /// let palette = Palette::parse([(ColorId(1), "#0000ff"), (ColorId(2), "black")]).unwrap();
    /// assert_eq!(palette.resolve(ColorId(1)), Some(Color::rgb(0, 0, 255)));
    /// assert_eq!(palette.resolve(ColorId(3)), None);
    /// ```
    pub fn parse<'a, I>(iter: I) -> Result<Self, ParseColorError>
    where
        I: IntoIterator<Item = (ColorId, &'a str)>,
    {
        let mut palette = Palette::new();
        for (id, s) in iter {
            palette.insert(id, Color::parse(s)?);
        }
        Ok(palette)
    }

    /// Set the color for `id`, returning the previous value if any
    #[inline]
    pub fn insert(&mut self, id: ColorId, color: Color) -> Option<Color> {
        self.colors.insert(id, color)
    }

    /// Returns the number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the palette has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorResolver for Palette {
    #[inline]
    fn resolve(&self, id: ColorId) -> Option<Color> {
        self.colors.get(&id).copied()
    }
}

impl FromIterator<(ColorId, Color)> for Palette {
    fn from_iter<T: IntoIterator<Item = (ColorId, Color)>>(iter: T) -> Self {
        Palette {
            colors: iter.into_iter().collect(),
        }
    }
}
