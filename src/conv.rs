// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Type conversion utilities
//!
//! Text offsets are stored as `u32` instead of `usize` by this library in
//! order to save space (span lists are not intended to describe texts anywhere
//! close to `u32::MAX` bytes long, so `u32` is an appropriate index type).
//! Offsets supplied by callers are `usize` and are checked on entry.

use easy_cast::Cast;

/// Convert `usize` → `u32`
///
/// This is a "safer" wrapper around `as` ensuring (on debug builds) that the
/// input value may be represented correctly by `u32`.
#[inline]
pub fn to_u32(x: usize) -> u32 {
    x.cast()
}

/// Convert `usize` → `u32`, returning `None` if `x` is not representable
#[inline]
pub fn try_to_u32(x: usize) -> Option<u32> {
    x.try_cast().ok()
}

/// Convert `usize` → `u32`, saturating at `u32::MAX`
#[inline]
pub fn to_u32_saturating(x: usize) -> u32 {
    try_to_u32(x).unwrap_or(u32::MAX)
}

/// Convert `u32` → `usize`
///
/// This is a "safer" wrapper around `as` ensuring that the operation is
/// zero-extension.
#[inline]
pub fn to_usize(x: u32) -> usize {
    x.cast()
}
