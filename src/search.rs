// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Substring search and range validation
//!
//! All offsets are byte indices into the searched text.

use crate::conv::try_to_u32;
use crate::{Range, RangeError};
use std::iter::FusedIterator;

/// Index of the first occurrence of `target`
///
/// Returns `None` if `target` is empty or absent.
#[inline]
pub fn find_first(text: &str, target: &str) -> Option<usize> {
    if target.is_empty() {
        return None;
    }
    text.find(target)
}

/// Index of the last occurrence of `target`
///
/// Returns `None` if `target` is empty or absent.
#[inline]
pub fn find_last(text: &str, target: &str) -> Option<usize> {
    if target.is_empty() {
        return None;
    }
    text.rfind(target)
}

/// Iterate over the start index of every occurrence of `target`
///
/// Unlike [`str::match_indices`], matches may overlap: after a match at `p`
/// the search resumes at the next character after `p`, thus `"aa"` is found
/// twice in `"aaa"`. An empty `target` yields nothing.
#[inline]
pub fn find_all<'a>(text: &'a str, target: &'a str) -> MatchIter<'a> {
    MatchIter {
        text,
        target,
        pos: if target.is_empty() { text.len() + 1 } else { 0 },
    }
}

/// Iterator over (possibly overlapping) matches
///
/// Constructed by [`find_all`].
#[derive(Clone, Debug)]
pub struct MatchIter<'a> {
    text: &'a str,
    target: &'a str,
    pos: usize,
}

impl<'a> Iterator for MatchIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let rest = self.text.get(self.pos..)?;
        match rest.find(self.target) {
            Some(offset) => {
                let index = self.pos + offset;
                // target is non-empty, so a char starts at index
                let step = rest[offset..].chars().next().map_or(1, char::len_utf8);
                self.pos = index + step;
                Some(index)
            }
            None => {
                self.pos = self.text.len() + 1;
                None
            }
        }
    }
}

impl<'a> FusedIterator for MatchIter<'a> {}

/// Bounds of the text between two markers
///
/// The result starts one character past the end of the first
/// `start_marker` and ends one character before the last `end_marker`, thus
/// one character is trimmed on each side of the enclosed text. For ASCII
/// text this is `first(start_marker) + len(start_marker) + 1` to
/// `last(end_marker) - 1`.
///
/// The returned pair is not validated (see [`check_range`]) except that an
/// `end` before the start of the text is reported as
/// [`RangeError::Inverted`]. If no character follows `start_marker`, `start`
/// is one byte past the end of the text.
pub fn between(
    text: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<(usize, usize), RangeError> {
    let first =
        find_first(text, start_marker).ok_or_else(|| RangeError::not_found(start_marker))?;
    let last = find_last(text, end_marker).ok_or_else(|| RangeError::not_found(end_marker))?;
    let after = first + start_marker.len();
    let start = after + text[after..].chars().next().map_or(1, char::len_utf8);
    let end = match text[..last].chars().next_back() {
        Some(c) => last - c.len_utf8(),
        None => return Err(RangeError::Inverted { start, end: 0 }),
    };
    Ok((start, end))
}

/// Validate `start..end` against `text`
///
/// Checks, in order: `start <= end`, `end <= text.len()` and that both ends
/// lie on a `char` boundary.
pub fn check_range(text: &str, start: usize, end: usize) -> Result<Range, RangeError> {
    let len = text.len();
    if start > end {
        return Err(RangeError::Inverted { start, end });
    }
    if end > len {
        return Err(RangeError::OutOfBounds { start, end, len });
    }
    for index in [start, end] {
        if !text.is_char_boundary(index) {
            return Err(RangeError::NotCharBoundary { index });
        }
    }
    match (try_to_u32(start), try_to_u32(end)) {
        (Some(start), Some(end)) => Ok(Range { start, end }),
        _ => Err(RangeError::OutOfBounds { start, end, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        let text = "one two one";
        assert_eq!(find_first(text, "one"), Some(0));
        assert_eq!(find_last(text, "one"), Some(8));
        assert_eq!(find_first(text, "three"), None);
        assert_eq!(find_first(text, ""), None);
        assert_eq!(find_last(text, ""), None);
    }

    #[test]
    fn all_overlapping() {
        assert_eq!(find_all("aaa", "aa").collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(find_all("abcabc", "bc").collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(find_all("abc", "x").count(), 0);
        assert_eq!(find_all("abc", "").count(), 0);
        assert_eq!(find_all("", "a").count(), 0);
    }

    #[test]
    fn all_multibyte() {
        // Each 'é' is two bytes
        let text = "éééé";
        assert_eq!(find_all(text, "éé").collect::<Vec<_>>(), vec![0, 2, 4]);

        let text = "条款和条款";
        assert_eq!(find_all(text, "条款").collect::<Vec<_>>(), vec![0, 9]);
    }

    #[test]
    fn all_is_fused() {
        let mut iter = find_all("ab", "b");
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn between_trims_one_byte_each_side() {
        let text = "Hello, World!";
        assert_eq!(between(text, "Hello, ", "!"), Ok((8, 11)));
        assert_eq!(&text[8..11], "orl");
    }

    #[test]
    fn between_trims_one_char_each_side() {
        // CJK characters are three bytes each
        let text = "请阅读《条款及细则》";
        assert_eq!(between(text, "《", "》"), Ok((15, 24)));
        assert_eq!(&text[15..24], "款及细");

        let text = "<é-ü>";
        assert_eq!(between(text, "<", ">"), Ok((3, 4)));
        assert_eq!(&text[3..4], "-");
    }

    #[test]
    fn between_missing_marker() {
        assert_eq!(
            between("a [b] c", "{", "]"),
            Err(RangeError::NotFound {
                target: "{".to_string()
            })
        );
        assert_eq!(
            between("a [b] c", "[", "}"),
            Err(RangeError::NotFound {
                target: "}".to_string()
            })
        );
    }

    #[test]
    fn between_end_marker_at_zero() {
        assert_eq!(
            between("]ab[", "[", "]"),
            Err(RangeError::Inverted { start: 5, end: 0 })
        );
    }

    #[test]
    fn check() {
        let text = "añb";
        assert_eq!(check_range(text, 0, 1), Ok(Range::from(0..1)));
        assert_eq!(check_range(text, 4, 4), Ok(Range::from(4..4)));
        assert_eq!(
            check_range(text, 2, 1),
            Err(RangeError::Inverted { start: 2, end: 1 })
        );
        assert_eq!(
            check_range(text, 0, 5),
            Err(RangeError::OutOfBounds {
                start: 0,
                end: 5,
                len: 4
            })
        );
        assert_eq!(
            check_range(text, 0, 2),
            Err(RangeError::NotCharBoundary { index: 2 })
        );
    }
}
