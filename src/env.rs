// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Builder configuration

use crate::{Color, SpanMode};

/// Configuration of a [`SpanBuilder`](crate::SpanBuilder)
///
/// An `Options` can be default-constructed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Boundary mode recorded on attached spans
    ///
    /// This defaults to [`SpanMode::ExclusiveExclusive`]. It may be changed
    /// during building via [`SpanBuilder::set_mode`](crate::SpanBuilder::set_mode).
    pub mode: SpanMode,
    /// Initial text color
    ///
    /// Bullets without an explicit color use the most recent text color; this
    /// is the value used before any text color is set. If `None`,
    /// [`Color::default()`] is used.
    pub default_text_color: Option<Color>,
}

impl Options {
    /// Alternative default constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the span mode
    #[inline]
    pub fn with_mode(mut self, mode: SpanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the initial text color
    #[inline]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.default_text_color = Some(color);
        self
    }
}
