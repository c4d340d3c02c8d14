// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Position arithmetic for a binary tree stored in a flat array.
//!
//!```text
//!             0
//!          /     \
//!        1         2
//!       / \       / \
//!      3   4     5   6
//!     / \
//!    7   8
//!```

/// Index of the first child of `x`.
#[inline]
pub fn child1(x: usize) -> usize { 2 * x + 1 }

/// Index of the second child of `x`.
#[inline]
pub fn child2(x: usize) -> usize { 2 * x + 2 }

/// Index of the parent of `x`. The root is its own parent.
#[inline]
pub fn parent(x: usize) -> usize { x.saturating_sub(1) / 2 }

/// The last index that has two in-range children in a sequence of length `len`.
///
/// Every index at or below it has two children; above it only the final
/// index of an even-length sequence has a (single) parent with one child.
/// Returns `None` when no index has two children (`len < 3`).
#[inline]
pub fn last_full_parent(len: usize) -> Option<usize> {
    (len.saturating_sub(1) / 2).checked_sub(1)
}

/// First index of the tree level that `x` lives on.
#[inline]
pub fn level_start(x: usize) -> usize {
    (1 << (x + 1).ilog2()) - 1
}
