// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Spannable: selection-driven styling of text
//!
//! A [`SpanBuilder`] wraps a text and a *selection* of ranges within it.
//! Selectors (`select_first`, `select_all`, `select_between`, ...) choose
//! ranges by searching the text or from explicit indices; decorators
//! (`bold`, `underline`, `text_color`, `on_click`, ...) attach a [`Span`] to
//! every selected range. The result is a [`StyledText`]: the text plus an
//! ordered list of [`StyledSpan`]s for a rendering layer to apply.
//!
//! All offsets are byte indices into the source text.
//!
//! ```
//! # use spannable::{Color, ColorId, Palette, RangeError, SpanBuilder, ClickTarget};
//! # struct Label;
//! # impl ClickTarget for Label {
//! #     fn set_highlight_color(&mut self, _: Color) {}
//! #     fn set_link_dispatch(&mut self, _: bool) {}
//! # }
//! # fn main() -> Result<(), RangeError> {
//! const MAIN: ColorId = ColorId(1);
//! let palette = Palette::parse([(MAIN, "#1e88e5")]).unwrap();
//! let mut label = Label;
//!
//! let text = SpanBuilder::new("Continue to accept our Terms and Privacy Policy", palette)
//!     .select_first("Terms")?
//!     .absolute_size(25)
//!     .on_click(&mut label, || println!("terms"))
//!     .text_color(MAIN)
//!     .underline()
//!     .select_first("Privacy Policy")?
//!     .on_click(&mut label, || println!("privacy"))
//!     .text_color(MAIN)
//!     .underline()
//!     .select_first("Continue")?
//!     .strikethrough()
//!     .bold()
//!     .relative_size(2.0)
//!     .build();
//!
//! assert_eq!(text.spans().len(), 10);
//! assert_eq!(text.click(24), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(doc_cfg, feature(doc_cfg))]

pub mod conv;
pub mod fonts;
pub mod search;

mod data;
pub use data::*;

mod error;
pub use error::RangeError;

mod env;
pub use env::Options;

mod color;
pub use color::{ColorResolver, Palette};

mod span;
pub use span::{ClickHandler, EffectFlags, Span, SpanMode, StyledSpan};

mod builder;
pub use builder::SpanBuilder;

mod styled;
pub use styled::{Effect, StyledText};

mod widget;
pub use widget::ClickTarget;
