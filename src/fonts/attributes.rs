// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Weight and slant attributes

use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Weight and slant of text
    ///
    /// The empty set is the upright, regular-weight style, also available as
    /// [`TextStyle::NORMAL`].
    ///
    /// In CSS, this corresponds to a combination of the [`font-weight`] and
    /// [`font-style`] properties.
    ///
    /// [`font-weight`]: https://www.w3.org/TR/css-fonts-4/#font-weight-prop
    /// [`font-style`]: https://www.w3.org/TR/css-fonts-4/#font-style-prop
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TextStyle: u8 {
        /// Bold weight
        const BOLD = 1 << 0;
        /// Italic slant
        const ITALIC = 1 << 1;
        /// Bold weight with italic slant
        const BOLD_ITALIC = Self::BOLD.bits() | Self::ITALIC.bits();
    }
}

impl TextStyle {
    /// Upright, regular weight
    pub const NORMAL: Self = Self::empty();

    /// Parses a style keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spannable::fonts::TextStyle;
    /// assert_eq!(TextStyle::parse("normal"), Some(TextStyle::NORMAL));
    /// assert_eq!(TextStyle::parse("bold-italic"), Some(TextStyle::BOLD_ITALIC));
    /// assert_eq!(TextStyle::parse("oblique"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::NORMAL,
            "bold" => Self::BOLD,
            "italic" => Self::ITALIC,
            "bold-italic" | "bold italic" => Self::BOLD_ITALIC,
            _ => return None,
        })
    }

    /// Returns `true` if the style is bold
    #[inline]
    pub fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    /// Returns `true` if the style is italic
    #[inline]
    pub fn is_italic(self) -> bool {
        self.contains(Self::ITALIC)
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match (self.is_bold(), self.is_italic()) {
            (false, false) => "normal",
            (true, false) => "bold",
            (false, true) => "italic",
            (true, true) => "bold-italic",
        };
        write!(f, "{keyword}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        for style in [
            TextStyle::NORMAL,
            TextStyle::BOLD,
            TextStyle::ITALIC,
            TextStyle::BOLD_ITALIC,
        ] {
            assert_eq!(TextStyle::parse(&style.to_string()), Some(style));
        }
    }

    #[test]
    fn composition() {
        assert_eq!(TextStyle::BOLD | TextStyle::ITALIC, TextStyle::BOLD_ITALIC);
        assert!(TextStyle::BOLD_ITALIC.is_bold());
        assert!(!TextStyle::NORMAL.is_italic());
    }
}
