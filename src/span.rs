// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Span types

use crate::fonts::{FontFamily, TextStyle};
use crate::{Color, Range};
use bitflags::bitflags;
use std::fmt;
use std::rc::Rc;

/// A visual or interactive effect applied to a range of text
///
/// Spans are interpreted by the rendering layer; this library only records
/// them. Several spans may cover the same text: they stack and the renderer
/// resolves visual precedence.
#[derive(Clone, Debug, PartialEq)]
pub enum Span {
    /// Absolute font size, in density-independent pixels
    AbsoluteSize(u32),
    /// Font size relative to the surrounding text
    RelativeSize(f32),
    /// Weight and slant
    Style(TextStyle),
    /// Typeface
    Font(FontFamily),
    /// Line under the text
    Underline,
    /// Line through the text
    Strikethrough,
    /// Text (foreground) color
    Foreground(Color),
    /// A list bullet drawn at the start of each paragraph
    ///
    /// `gap` is the space between bullet and text, in density-independent
    /// pixels.
    Bullet { gap: u32, color: Color },
    /// Lower the baseline
    Subscript,
    /// Raise the baseline
    Superscript,
    /// Activation of the text invokes a handler
    Click(ClickHandler),
}

impl Span {
    /// Decoration flags corresponding to this span
    ///
    /// Spans which do not decorate glyph runs return the empty set.
    pub fn effect_flags(&self) -> EffectFlags {
        match self {
            Span::Underline => EffectFlags::UNDERLINE,
            Span::Strikethrough => EffectFlags::STRIKETHROUGH,
            Span::Subscript => EffectFlags::SUBSCRIPT,
            Span::Superscript => EffectFlags::SUPERSCRIPT,
            _ => EffectFlags::empty(),
        }
    }
}

bitflags! {
    /// Decorations on a run of glyphs
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EffectFlags: u32 {
        /// Glyph is underlined
        const UNDERLINE = 1 << 0;
        /// Glyph is crossed through by a center-line
        const STRIKETHROUGH = 1 << 1;
        /// Baseline is lowered
        const SUBSCRIPT = 1 << 2;
        /// Baseline is raised
        const SUPERSCRIPT = 1 << 3;
    }
}

/// Whether a span expands to cover text inserted at its boundaries
///
/// This is recorded with each span for the benefit of editable texts; a
/// static display may ignore it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpanMode {
    /// Expand at neither end
    #[default]
    ExclusiveExclusive,
    /// Expand only at the end
    ExclusiveInclusive,
    /// Expand only at the start
    InclusiveExclusive,
    /// Expand at both ends
    InclusiveInclusive,
}

impl SpanMode {
    /// True if text inserted at `range.start` joins the span
    #[inline]
    pub fn includes_start(self) -> bool {
        matches!(
            self,
            SpanMode::InclusiveExclusive | SpanMode::InclusiveInclusive
        )
    }

    /// True if text inserted at `range.end` joins the span
    #[inline]
    pub fn includes_end(self) -> bool {
        matches!(
            self,
            SpanMode::ExclusiveInclusive | SpanMode::InclusiveInclusive
        )
    }
}

/// A [`Span`] attached to a [`Range`]
#[derive(Clone, Debug, PartialEq)]
pub struct StyledSpan {
    pub range: Range,
    pub span: Span,
    pub mode: SpanMode,
}

/// A click callback
///
/// The callback takes no arguments. Clones share the same callback;
/// equality is identity of the callback.
#[derive(Clone)]
pub struct ClickHandler(Rc<dyn Fn()>);

impl ClickHandler {
    /// Construct
    pub fn new(f: impl Fn() + 'static) -> Self {
        ClickHandler(Rc::new(f))
    }

    /// Invoke the callback
    #[inline]
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClickHandler({:p})", Rc::as_ptr(&self.0))
    }
}

impl PartialEq for ClickHandler {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
