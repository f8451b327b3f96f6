// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Selection errors

use thiserror::Error;

/// Error returned by selectors of [`SpanBuilder`](crate::SpanBuilder)
///
/// Every range in a selection satisfies `start <= end <= len` with both ends
/// on a `char` boundary; a selector which cannot meet this fails with one of
/// these errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    /// The search string does not occur in the text
    ///
    /// An empty search string never matches.
    #[error("`{target}` not found in text")]
    NotFound { target: String },
    /// The range extends beyond the end of the text
    #[error("range {start}..{end} out of bounds for len {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
    /// The range has `start > end`
    #[error("invalid range {start}..{end}: start > end")]
    Inverted { start: usize, end: usize },
    /// An index falls inside a multi-byte character
    #[error("index {index} not on a UTF-8 character boundary")]
    NotCharBoundary { index: usize },
}

impl RangeError {
    pub(crate) fn not_found(target: &str) -> Self {
        RangeError::NotFound {
            target: target.to_string(),
        }
    }
}
