// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Interface to the displaying widget

use crate::Color;

/// A text-display widget which dispatches clicks to spans
///
/// [`SpanBuilder::on_click`](crate::SpanBuilder::on_click) configures the
/// widget through this trait: it clears the highlight color and enables
/// dispatch of activation events to [`Span::Click`](crate::Span::Click)
/// spans (see [`StyledText::click`](crate::StyledText::click)).
pub trait ClickTarget {
    /// Set the color drawn behind text while it is being pressed
    fn set_highlight_color(&mut self, color: Color);

    /// Enable or disable dispatch of pointer/touch activation to click spans
    fn set_link_dispatch(&mut self, enabled: bool);
}

impl<T: ClickTarget + ?Sized> ClickTarget for &mut T {
    #[inline]
    fn set_highlight_color(&mut self, color: Color) {
        (**self).set_highlight_color(color);
    }

    #[inline]
    fn set_link_dispatch(&mut self, enabled: bool) {
        (**self).set_link_dispatch(enabled);
    }
}
