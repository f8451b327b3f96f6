// Builder scenarios through the public API

use spannable::fonts::TextStyle;
use spannable::{
    ClickTarget, Color, ColorId, Effect, EffectFlags, Palette, RangeError, Span, SpanBuilder,
    StyledText,
};
use std::cell::Cell;
use std::rc::Rc;

const BLUE: ColorId = ColorId(7);

fn palette() -> Palette {
    [(BLUE, Color::rgb(0, 0, 255))].into_iter().collect()
}

/// Widget double recording what `on_click` configured
#[derive(Debug, Default)]
struct Label {
    highlight: Option<Color>,
    dispatch: bool,
    text: StyledText,
}

impl Label {
    fn tap(&self, index: usize) -> usize {
        if self.dispatch {
            self.text.click(index)
        } else {
            0
        }
    }
}

impl ClickTarget for Label {
    fn set_highlight_color(&mut self, color: Color) {
        self.highlight = Some(color);
    }

    fn set_link_dispatch(&mut self, enabled: bool) {
        self.dispatch = enabled;
    }
}

fn ranges_of(text: &StyledText) -> Vec<(std::ops::Range<usize>, Span)> {
    text.spans()
        .iter()
        .map(|s| (s.range.to_std(), s.span.clone()))
        .collect()
}

#[test]
fn terms_underlined_and_blue() -> Result<(), RangeError> {
    let text = SpanBuilder::new("accept terms and privacy", palette())
        .select_first("terms")?
        .underline()
        .text_color(BLUE)
        .build();

    assert_eq!(
        ranges_of(&text),
        vec![
            (7..12, Span::Underline),
            (7..12, Span::Foreground(Color::rgb(0, 0, 255))),
        ]
    );
    for index in (0..7).chain(12..text.len()) {
        assert_eq!(text.spans_at(index).count(), 0);
    }
    Ok(())
}

#[test]
fn overlapping_matches_decorated_independently() -> Result<(), RangeError> {
    let text = SpanBuilder::new("aaa", palette())
        .select_all("aa")?
        .bold()
        .build();
    assert_eq!(
        ranges_of(&text),
        vec![
            (0..2, Span::Style(TextStyle::BOLD)),
            (1..3, Span::Style(TextStyle::BOLD)),
        ]
    );
    Ok(())
}

#[test]
fn select_all_counts_occurrences() -> Result<(), RangeError> {
    let source = "one, two, one, three, one";
    for (target, k) in [("one", 3), ("two", 1), ("four", 0), ("e", 5)] {
        let b = SpanBuilder::new(source, palette()).select_all(target)?;
        assert_eq!(b.selection().len(), k, "target {target:?}");
        let starts: Vec<u32> = b.selection().iter().map(|r| r.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }
    Ok(())
}

#[test]
fn between_markers() -> Result<(), RangeError> {
    let b = SpanBuilder::new("Hello, World!", palette()).select_between("Hello, ", "!")?;
    let range = b.selection()[0];
    assert_eq!((range.start, range.end), (8, 11));
    Ok(())
}

#[test]
fn between_cjk_markers() -> Result<(), RangeError> {
    let source = "请阅读《条款及细则》";
    let text = SpanBuilder::new(source, palette())
        .select_between("《", "》")?
        .underline()
        .build();
    let range = text.spans()[0].range.to_std();
    assert_eq!(&source[range], "款及细");
    Ok(())
}

#[test]
fn decoration_order_does_not_matter() -> Result<(), RangeError> {
    let a = SpanBuilder::new("some text", palette())
        .select_range(0, 3)?
        .bold()
        .underline()
        .build();
    let b = SpanBuilder::new("some text", palette())
        .select_range(0, 3)?
        .underline()
        .bold()
        .build();

    for text in [&a, &b] {
        let spans: Vec<_> = text.spans_at(2).map(|s| s.span.clone()).collect();
        assert!(spans.contains(&Span::Underline));
        assert!(spans.contains(&Span::Style(TextStyle::BOLD)));
        assert_eq!(spans.len(), 2);
    }
    assert_eq!(a.effect_tokens(), b.effect_tokens());
    assert_eq!(
        a.effect_tokens(),
        vec![
            Effect {
                start: 0,
                flags: EffectFlags::UNDERLINE
            },
            Effect {
                start: 4,
                flags: EffectFlags::empty()
            },
        ]
    );
    Ok(())
}

#[test]
fn selector_failure_ends_chain() {
    let result = SpanBuilder::new("accept terms", palette())
        .select_first("privacy")
        .map(|b| b.underline().build());
    assert_eq!(
        result,
        Err(RangeError::NotFound {
            target: "privacy".to_string()
        })
    );
}

#[test]
fn multibyte_text() -> Result<(), RangeError> {
    let source = "前往下一步即表示您已阅读并接受条款及细则和隐私条款";
    let b = SpanBuilder::new(source, palette()).select_first("条款及细则")?;
    let range = b.selection()[0].to_std();
    assert_eq!(&source[range], "条款及细则");

    let b = b.select_all("条款")?;
    assert_eq!(b.selection().len(), 2);

    // the last byte of "前" is index 2; index 1 is inside the character
    assert_eq!(
        SpanBuilder::new(source, palette())
            .select_range(0, 1)
            .unwrap_err(),
        RangeError::NotCharBoundary { index: 2 }
    );
    let b = SpanBuilder::new(source, palette()).select_range(0, 2)?;
    assert_eq!(b.selection()[0].to_std(), 0..3);
    Ok(())
}

#[test]
fn click_configures_widget_and_dispatches() -> Result<(), RangeError> {
    let terms = Rc::new(Cell::new(0));
    let privacy = Rc::new(Cell::new(0));
    let mut label = Label::default();
    assert!(!label.dispatch);

    let (t, p) = (terms.clone(), privacy.clone());
    let text = SpanBuilder::new("accept terms and privacy", palette())
        .select_first("terms")?
        .on_click(&mut label, move || t.set(t.get() + 1))
        .select_last("privacy")?
        .on_click(&mut label, move || p.set(p.get() + 1))
        .build();
    label.text = text;

    assert_eq!(label.highlight, Some(Color::TRANSPARENT));
    assert!(label.dispatch);

    assert_eq!(label.tap(8), 1);
    assert_eq!(label.tap(20), 1);
    assert_eq!(label.tap(20), 1);
    assert_eq!(label.tap(2), 0);
    assert_eq!(terms.get(), 1);
    assert_eq!(privacy.get(), 2);
    Ok(())
}

#[test]
fn click_on_empty_selection_still_configures_widget() -> Result<(), RangeError> {
    let mut label = Label::default();
    let text = SpanBuilder::new("abc", palette())
        .select_all("x")?
        .on_click(&mut label, || ())
        .build();
    assert!(text.spans().is_empty());
    assert!(label.dispatch);
    Ok(())
}

#[test]
fn bullet_uses_whole_text_selection() {
    let text = SpanBuilder::new("Booking terms and privacy", palette())
        .bullet(40, Some(BLUE))
        .build();
    assert_eq!(
        ranges_of(&text),
        vec![(
            0..25,
            Span::Bullet {
                gap: 40,
                color: Color::rgb(0, 0, 255)
            }
        )]
    );
}
