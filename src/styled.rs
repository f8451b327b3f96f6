// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Styled text: the result of building

use crate::conv::to_u32_saturating;
use crate::{ClickHandler, EffectFlags, Range, Span, StyledSpan};

/// A text with attached spans
///
/// This is produced by [`SpanBuilder::build`](crate::SpanBuilder::build) and
/// consumed by a rendering layer. It may also be constructed from `String`
/// and `&str` (no spans).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    text: String,
    spans: Vec<StyledSpan>,
}

/// Decoration change within a [`StyledText`]
///
/// See [`StyledText::effect_tokens`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Effect {
    /// Index in text at which the decoration becomes active
    pub start: u32,
    /// Decorations active from `start` until the next token
    pub flags: EffectFlags,
}

impl StyledText {
    pub(crate) fn new(text: String, spans: Vec<StyledSpan>) -> Self {
        StyledText { text, spans }
    }

    /// Read the unformatted text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Extract the unformatted `String`
    #[inline]
    pub fn take_string(self) -> String {
        self.text
    }

    /// Length of the text in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the text is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All spans, in the order attached
    #[inline]
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Iterate over spans covering `index`, in the order attached
    pub fn spans_at(&self, index: usize) -> impl Iterator<Item = &StyledSpan> + '_ {
        self.spans.iter().filter(move |s| s.range.contains(index))
    }

    /// Sequence of decoration changes
    ///
    /// Flags of overlapping [`Span::Underline`], [`Span::Strikethrough`],
    /// [`Span::Subscript`] and [`Span::Superscript`] spans are merged into a
    /// run-length form. Each token applies from its `start` until the next
    /// token; text before the first token is undecorated. Tokens have
    /// strictly increasing `start` and consecutive tokens differ in `flags`.
    pub fn effect_tokens(&self) -> Vec<Effect> {
        let decorated: Vec<(Range, EffectFlags)> = self
            .spans
            .iter()
            .filter_map(|s| {
                let flags = s.span.effect_flags();
                (!flags.is_empty()).then_some((s.range, flags))
            })
            .collect();

        let mut bounds: Vec<u32> = decorated
            .iter()
            .flat_map(|(range, _)| [range.start, range.end])
            .collect();
        bounds.sort_unstable();
        bounds.dedup();

        let mut effects = Vec::new();
        let mut flags = EffectFlags::default();
        for start in bounds {
            let active = decorated
                .iter()
                .filter(|(range, _)| range.start <= start && start < range.end)
                .fold(EffectFlags::empty(), |acc, (_, f)| acc | *f);
            if active != flags {
                effects.push(Effect {
                    start,
                    flags: active,
                });
                flags = active;
            }
        }
        effects
    }

    /// Dispatch an activation at `index`
    ///
    /// Invokes the handler of every [`Span::Click`] covering `index`, in
    /// attachment order. A handler shared by several covering spans is
    /// invoked once. Returns the number of handlers invoked.
    pub fn click(&self, index: usize) -> usize {
        let mut invoked: Vec<&ClickHandler> = Vec::new();
        for span in self.spans_at(index) {
            if let Span::Click(handler) = &span.span {
                if invoked.contains(&handler) {
                    continue;
                }
                log::trace!("click at {index}: {handler:?}");
                handler.invoke();
                invoked.push(handler);
            }
        }
        invoked.len()
    }

    /// Ranges of all click spans, in attachment order
    pub fn click_ranges(&self) -> impl Iterator<Item = Range> + '_ {
        self.spans
            .iter()
            .filter(|s| matches!(s.span, Span::Click(_)))
            .map(|s| s.range)
    }

    /// The whole-text range
    ///
    /// The end saturates at `u32::MAX`.
    #[inline]
    pub fn range(&self) -> Range {
        Range {
            start: 0,
            end: to_u32_saturating(self.text.len()),
        }
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> StyledText {
        StyledText {
            text,
            ..Default::default()
        }
    }
}

impl<'a> From<&'a str> for StyledText {
    fn from(text: &'a str) -> StyledText {
        StyledText::from(text.to_string())
    }
}

impl From<StyledText> for String {
    fn from(text: StyledText) -> String {
        text.text
    }
}
