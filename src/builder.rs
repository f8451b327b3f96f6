// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Selection-driven span builder

use crate::conv::to_u32_saturating;
use crate::fonts::{FontFamily, TextStyle};
use crate::search::{self, check_range};
use crate::{
    ClickHandler, ClickTarget, Color, ColorId, ColorResolver, Options, Range, RangeError, Span,
    SpanMode, StyledSpan, StyledText,
};
use smallvec::SmallVec;

/// Builder attaching [`Span`]s to selected ranges of a text
///
/// The builder holds a *selection*: an ordered list of [`Range`]s. Initially
/// this is the whole text. *Selectors* (`select_*` methods) replace the
/// selection; *decorators* (all other chaining methods) attach one span to
/// each non-empty range of the current selection. Spans stack: decorating
/// the same range twice keeps both spans.
///
/// All methods take and return the builder by value. Selectors return a
/// [`RangeError`] if the requested selection cannot be made, ending the
/// chain. Finish with [`SpanBuilder::build`].
///
/// ```
/// # use spannable::{Color, ColorId, RangeError, Span, SpanBuilder};
/// # fn main() -> Result<(), RangeError> {
/// let blue = ColorId(1);
/// let colors = |id: ColorId| (id == blue).then_some(Color::rgb(0, 0, 255));
///
/// let text = SpanBuilder::new("accept terms and privacy", colors)
///     .select_first("terms")?
///     .underline()
///     .text_color(blue)
///     .build();
///
/// let spans: Vec<_> = text.spans().iter().map(|s| (s.range.to_std(), &s.span)).collect();
/// assert_eq!(spans, [
///     (7..12, &Span::Underline),
///     (7..12, &Span::Foreground(Color::rgb(0, 0, 255))),
/// ]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SpanBuilder<R> {
    text: String,
    resolver: R,
    selection: SmallVec<[Range; 1]>,
    spans: Vec<StyledSpan>,
    text_color: Option<Color>,
    mode: SpanMode,
}

impl<R: ColorResolver> SpanBuilder<R> {
    /// Construct over `text` with default [`Options`]
    ///
    /// Colors given by identifier are resolved through `resolver`.
    #[inline]
    pub fn new(text: impl Into<String>, resolver: R) -> Self {
        Self::with_options(text, resolver, Options::default())
    }

    /// Construct with the given `options`
    ///
    /// Offsets are stored as `u32`: for a text longer than `u32::MAX` bytes
    /// the initial selection covers only the first `u32::MAX` bytes and
    /// selectors reaching beyond fail with [`RangeError::OutOfBounds`].
    pub fn with_options(text: impl Into<String>, resolver: R, options: Options) -> Self {
        let text = text.into();
        let end = to_u32_saturating(text.len());
        if text.len() > crate::conv::to_usize(end) {
            log::warn!("SpanBuilder: text of {} bytes exceeds u32 offsets", text.len());
        }
        let whole = Range { start: 0, end };
        SpanBuilder {
            text,
            resolver,
            selection: SmallVec::from_buf([whole]),
            spans: Vec::new(),
            text_color: options.default_text_color,
            mode: options.mode,
        }
    }

    /// Access the source text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current selection
    #[inline]
    pub fn selection(&self) -> &[Range] {
        &self.selection
    }

    /// Spans attached so far, in attachment order
    #[inline]
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// The most recently set text color, if any
    #[inline]
    pub fn current_text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// The mode recorded on subsequently attached spans
    #[inline]
    pub fn mode(&self) -> SpanMode {
        self.mode
    }

    /// Finish, yielding the styled text
    pub fn build(self) -> StyledText {
        log::debug!(
            "SpanBuilder::build: {} spans over {} bytes",
            self.spans.len(),
            self.text.len()
        );
        StyledText::new(self.text, self.spans)
    }

    fn set_selection(mut self, selection: SmallVec<[Range; 1]>) -> Self {
        log::debug!("select: {:?}", selection.as_slice());
        self.selection = selection;
        self
    }

    fn select_match(self, index: Option<usize>, target: &str) -> Result<Self, RangeError> {
        let start = index.ok_or_else(|| RangeError::not_found(target))?;
        let range = check_range(&self.text, start, start + target.len())?;
        Ok(self.set_selection(SmallVec::from_buf([range])))
    }
}

/// Selectors
impl<R: ColorResolver> SpanBuilder<R> {
    /// Select the first occurrence of `target`
    ///
    /// Fails with [`RangeError::NotFound`] if `target` is absent or empty.
    pub fn select_first(self, target: &str) -> Result<Self, RangeError> {
        let index = search::find_first(&self.text, target);
        self.select_match(index, target)
    }

    /// Select the last occurrence of `target`
    ///
    /// Fails with [`RangeError::NotFound`] if `target` is absent or empty.
    pub fn select_last(self, target: &str) -> Result<Self, RangeError> {
        let index = search::find_last(&self.text, target);
        self.select_match(index, target)
    }

    /// Select every occurrence of `target`, in order
    ///
    /// Occurrences may overlap (see [`search::find_all`]). If there are no
    /// occurrences the selection becomes empty; this is not an error, and
    /// subsequent decorators do nothing.
    pub fn select_all(self, target: &str) -> Result<Self, RangeError> {
        let selection: SmallVec<[Range; 1]> = search::find_all(&self.text, target)
            .map(|start| check_range(&self.text, start, start + target.len()))
            .collect::<Result<_, _>>()?;
        Ok(self.set_selection(selection))
    }

    /// Select the inclusive range `from..=to`
    ///
    /// `to` is the index of the last byte selected, thus the selection is
    /// `from..to + 1`.
    pub fn select_range(self, from: usize, to: usize) -> Result<Self, RangeError> {
        let end = to.checked_add(1).ok_or(RangeError::OutOfBounds {
            start: from,
            end: to,
            len: self.text.len(),
        })?;
        let range = check_range(&self.text, from, end)?;
        Ok(self.set_selection(SmallVec::from_buf([range])))
    }

    /// Select each of `ranges`, in the given order
    ///
    /// Ranges are half-open and may overlap. Each is validated; the first
    /// invalid range fails the whole selection.
    pub fn select_ranges<I>(self, ranges: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = std::ops::Range<usize>>,
    {
        let selection: SmallVec<[Range; 1]> = ranges
            .into_iter()
            .map(|range| check_range(&self.text, range.start, range.end))
            .collect::<Result<_, _>>()?;
        Ok(self.set_selection(selection))
    }

    /// Select the text between two markers
    ///
    /// The selection starts one character after the end of the first
    /// `start_marker` and ends one character before the last `end_marker`,
    /// i.e. one character is trimmed on each side of the enclosed text (see
    /// [`search::between`]).
    ///
    /// ```
    /// # use spannable::{Color, ColorId, SpanBuilder};
    /// let builder = SpanBuilder::new("Hello, World!", |_: ColorId| None::<Color>)
    ///     .select_between("Hello, ", "!")
    ///     .unwrap();
    /// assert_eq!(builder.selection()[0].to_std(), 8..11);
    /// ```
    pub fn select_between(self, start_marker: &str, end_marker: &str) -> Result<Self, RangeError> {
        let (start, end) = search::between(&self.text, start_marker, end_marker)?;
        let range = check_range(&self.text, start, end)?;
        Ok(self.set_selection(SmallVec::from_buf([range])))
    }
}

/// Decorators
impl<R: ColorResolver> SpanBuilder<R> {
    fn attach(mut self, span: Span) -> Self {
        for range in &self.selection {
            if range.is_empty() {
                log::trace!("attach: skipping degenerate range {range:?}");
                continue;
            }
            log::trace!("attach: {span:?} at {range:?}");
            self.spans.push(StyledSpan {
                range: *range,
                span: span.clone(),
                mode: self.mode,
            });
        }
        self
    }

    fn resolve(&self, id: ColorId) -> Color {
        self.resolver.resolve(id).unwrap_or_else(|| {
            log::warn!("SpanBuilder: unresolved color {id:?}");
            Color::default()
        })
    }

    /// Set the mode recorded on subsequently attached spans
    #[inline]
    pub fn set_mode(mut self, mode: SpanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the absolute font size, in density-independent pixels
    pub fn absolute_size(self, size: u32) -> Self {
        self.attach(Span::AbsoluteSize(size))
    }

    /// Scale the font size by `factor`
    pub fn relative_size(self, factor: f32) -> Self {
        self.attach(Span::RelativeSize(factor))
    }

    /// Attach a weight/slant span
    pub fn style(self, style: TextStyle) -> Self {
        self.attach(Span::Style(style))
    }

    /// Bold text
    pub fn bold(self) -> Self {
        self.style(TextStyle::BOLD)
    }

    /// Italic text
    pub fn italic(self) -> Self {
        self.style(TextStyle::ITALIC)
    }

    /// Bold, italic text
    pub fn bold_italic(self) -> Self {
        self.style(TextStyle::BOLD_ITALIC)
    }

    /// Upright, regular-weight text
    pub fn normal(self) -> Self {
        self.style(TextStyle::NORMAL)
    }

    /// Set the typeface
    ///
    /// A `&str` is parsed with [`FontFamily::parse`], thus generic family
    /// keywords such as `"monospace"` are recognised.
    pub fn font(self, family: impl Into<FontFamily>) -> Self {
        self.attach(Span::Font(family.into()))
    }

    /// Draw a line through the text
    pub fn strikethrough(self) -> Self {
        self.attach(Span::Strikethrough)
    }

    /// Draw a line under the text
    pub fn underline(self) -> Self {
        self.attach(Span::Underline)
    }

    /// Attach a list bullet
    ///
    /// `gap` is the distance between bullet and text. If `color` is `None`,
    /// the bullet uses the current [text color](Self::text_color) as of this
    /// call (or [`Color::default()`] if none has been set); later text color
    /// changes do not affect it.
    pub fn bullet(self, gap: u32, color: Option<ColorId>) -> Self {
        let color = match color {
            Some(id) => self.resolve(id),
            None => self.text_color.unwrap_or_default(),
        };
        self.attach(Span::Bullet { gap, color })
    }

    /// Set the text color
    ///
    /// The resolved color is remembered for use by [`Self::bullet`]. An
    /// identifier which the resolver does not know resolves to
    /// [`Color::default()`] and logs a warning.
    pub fn text_color(mut self, id: ColorId) -> Self {
        let color = self.resolve(id);
        self.text_color = Some(color);
        self.attach(Span::Foreground(color))
    }

    /// Render as subscript
    pub fn subscript(self) -> Self {
        self.attach(Span::Subscript)
    }

    /// Render as superscript
    pub fn superscript(self) -> Self {
        self.attach(Span::Superscript)
    }

    /// Invoke `f` when the selected text is activated
    ///
    /// Each selected range gets a [`Span::Click`] sharing the one callback.
    /// Additionally `target` is configured to dispatch clicks: its highlight
    /// color is made transparent and link dispatch is enabled. This happens
    /// even if the selection is empty.
    pub fn on_click<T>(self, target: &mut T, f: impl Fn() + 'static) -> Self
    where
        T: ClickTarget + ?Sized,
    {
        target.set_highlight_color(Color::TRANSPARENT);
        target.set_link_dispatch(true);
        self.attach(Span::Click(ClickHandler::new(f)))
    }
}
