// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font family names
//!
//! A [`FontFamily`] is either one of the CSS generic families or the name of
//! a specific typeface. Each generic family has a list of common typefaces
//! which a rendering layer may use as preferred candidates, in order.
//!
//! NOTE: these lists were put together quickly by a non-expert, and with very
//! limited testing, thus may have significant defects.

use core::fmt;

const DEFAULT_SERIF: [&str; 6] = [
    "Georgia",
    "Droid Serif",
    "Times New Roman",
    "Times",
    "DejaVu Serif",
    "Liberation Serif",
];

const DEFAULT_SANS_SERIF: [&str; 7] = [
    "Roboto",
    "Noto Sans",
    "DejaVu Sans",
    "Open Sans",
    "Arial",
    "Liberation Sans",
    "Helvetica",
];

const DEFAULT_MONOSPACE: [&str; 6] = [
    "Droid Sans Mono",
    "Roboto Mono",
    "DejaVu Sans Mono",
    "Consolas",
    "Menlo",
    "Courier New",
];

const DEFAULT_CURSIVE: [&str; 3] = ["Segoe Script", "Gabriola", "Comic Sans MS"];

const DEFAULT_FANTASY: [&str; 3] = ["Impact", "Papyrus", "Segoe Print"];

/// A CSS generic font family
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenericFamily {
    Serif,
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

impl GenericFamily {
    /// Parses a CSS generic family keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            "cursive" => Self::Cursive,
            "fantasy" => Self::Fantasy,
            _ => return None,
        })
    }

    /// Common typefaces in this family, in order of preference
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::Serif => &DEFAULT_SERIF,
            Self::SansSerif => &DEFAULT_SANS_SERIF,
            Self::Monospace => &DEFAULT_MONOSPACE,
            Self::Cursive => &DEFAULT_CURSIVE,
            Self::Fantasy => &DEFAULT_FANTASY,
        }
    }
}

impl fmt::Display for GenericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Cursive => "cursive",
            Self::Fantasy => "fantasy",
        };
        write!(f, "{keyword}")
    }
}

/// A typeface selector
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    /// A generic family, resolved by the rendering layer
    Generic(GenericFamily),
    /// A specific typeface name
    Named(String),
}

impl FontFamily {
    /// Parses a family name.
    ///
    /// Generic family keywords map to [`FontFamily::Generic`]; anything else
    /// is taken as a typeface name (with surrounding whitespace and quotes
    /// removed).
    ///
    /// # Examples
    ///
    /// ```
    /// # use spannable::fonts::{FontFamily, GenericFamily};
    /// assert_eq!(FontFamily::parse("monospace"), FontFamily::Generic(GenericFamily::Monospace));
    /// assert_eq!(FontFamily::parse("\"Noto Sans\""), FontFamily::Named("Noto Sans".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        if let Some(generic) = GenericFamily::parse(s) {
            return FontFamily::Generic(generic);
        }
        let s = s.trim();
        let s = s
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(s);
        FontFamily::Named(s.to_string())
    }
}

impl From<GenericFamily> for FontFamily {
    #[inline]
    fn from(generic: GenericFamily) -> Self {
        FontFamily::Generic(generic)
    }
}

impl<'a> From<&'a str> for FontFamily {
    #[inline]
    fn from(s: &'a str) -> Self {
        FontFamily::parse(s)
    }
}

impl From<String> for FontFamily {
    #[inline]
    fn from(s: String) -> Self {
        FontFamily::parse(&s)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Generic(generic) => write!(f, "{generic}"),
            FontFamily::Named(name) => write!(f, "\"{name}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_keywords() {
        for generic in [
            GenericFamily::Serif,
            GenericFamily::SansSerif,
            GenericFamily::Monospace,
            GenericFamily::Cursive,
            GenericFamily::Fantasy,
        ] {
            assert_eq!(GenericFamily::parse(&generic.to_string()), Some(generic));
            assert!(!generic.candidates().is_empty());
        }
    }

    #[test]
    fn named_family() {
        let family = FontFamily::from(" Source Code Pro ");
        assert_eq!(family, FontFamily::Named("Source Code Pro".to_string()));
        assert_eq!(family.to_string(), "\"Source Code Pro\"");
        assert_eq!(FontFamily::parse(&family.to_string()), family);
    }
}
