// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Simple data types

use crate::conv::to_usize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A half-open range of text, `start..end`
///
/// Offsets are byte indices into the source text. A range where
/// `start == end` is *degenerate*: it selects nothing and spans are never
/// attached to it.
///
/// (Note that we use `u32` not `usize` since it can be assumed text length
/// will never exeed `u32::MAX`.)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// First index (inclusive)
    pub start: u32,
    /// Last index (exclusive)
    pub end: u32,
}

impl Range {
    /// Length of the range in bytes
    ///
    /// An inverted range has length zero.
    #[inline]
    pub fn len(self) -> usize {
        to_usize(self.end.saturating_sub(self.start))
    }

    /// True if the range selects nothing
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// True if `index` lies within the range
    #[inline]
    pub fn contains(self, index: usize) -> bool {
        to_usize(self.start) <= index && index < to_usize(self.end)
    }

    /// Convert to a [`std::ops::Range`], suitable for slicing
    #[inline]
    pub fn to_std(self) -> std::ops::Range<usize> {
        to_usize(self.start)..to_usize(self.end)
    }
}

impl From<std::ops::Range<u32>> for Range {
    #[inline]
    fn from(range: std::ops::Range<u32>) -> Self {
        Range {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<Range> for std::ops::Range<usize> {
    #[inline]
    fn from(range: Range) -> Self {
        range.to_std()
    }
}

/// Abstract color identifier
///
/// The meaning of a color identifier is defined by a
/// [`ColorResolver`](crate::ColorResolver), typically a theme or resource
/// table supplied by the host environment.
///
/// Other than this, users should treat this type as an opaque handle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorId(pub u32);

/// An sRGB color with alpha
///
/// The default value is fully transparent black (all components zero), which
/// is also the value used where a color is required but none was set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Construct an opaque color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Construct a color with alpha
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parses a color from a hex string or keyword
    ///
    /// Accepted forms are `#rrggbb`, `#rrggbbaa` and the keywords
    /// `transparent`, `black` and `white`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spannable::Color;
    /// assert_eq!(Color::parse("#3366ff"), Ok(Color::rgb(0x33, 0x66, 0xff)));
    /// assert_eq!(Color::parse("white"), Ok(Color::WHITE));
    /// assert!(Color::parse("#12").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        Ok(match s {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            _ => {
                let hex = s.strip_prefix('#').ok_or(ParseColorError::Syntax)?;
                if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
                    return Err(ParseColorError::Syntax);
                }
                if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(ParseColorError::Digit);
                }
                let byte = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError::Digit)
                };
                let a = if hex.len() == 8 { byte(6)? } else { 255 };
                Self::rgba(byte(0)?, byte(2)?, byte(4)?, a)
            }
        })
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Error returned by [`Color::parse`]
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected `#rrggbb`, `#rrggbbaa` or a color keyword")]
    Syntax,
    #[error("invalid hex digit in color")]
    Digit,
}
