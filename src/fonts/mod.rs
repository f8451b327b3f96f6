// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font attributes carried by spans
//!
//! Spans only *describe* font properties; selecting and loading a matching
//! face is the job of the rendering layer.
//!
//! ### Font sizes
//!
//! Absolute sizes ([`crate::Span::AbsoluteSize`]) are given in
//! density-independent pixels (*dp*), where 1 dp is one pixel on a 160 DPI
//! display. Relative sizes ([`crate::Span::RelativeSize`]) are a multiplier
//! applied to whatever size the text would otherwise have.

mod attributes;
mod families;

pub use attributes::TextStyle;
pub use families::{FontFamily, GenericFamily};
