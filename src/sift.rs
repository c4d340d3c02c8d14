// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Local repairs of the heap property.

use compare::Compare;

use crate::index::{child1, child2, last_full_parent, parent};
use crate::sequence::Sequence;

/// Orders a parent/child pair.
///
/// `par` must be the parent of `ch`. If the parent compares greater than or
/// equal to the child nothing happens; otherwise the two are swapped.
/// Returns the positions the items from `par` and `ch` ended up at.
#[inline]
pub(crate) fn compare_swap<S, C>(seq: &mut S, cmp: &C, par: usize, ch: usize) -> (usize, usize)
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    debug_assert_eq!(parent(ch), par);
    if cmp.compares_ge(seq.at(par), seq.at(ch)) {
        (par, ch)
    } else {
        seq.swap(par, ch);
        (ch, par)
    }
}

/// Orders `x` against the greater of its two children. Both children must
/// be in range.
///
/// Equal children resolve to the second one. Returns the position the item
/// from `x` ended up at.
#[inline]
pub(crate) fn compare_swap_with_children<S, C>(seq: &mut S, cmp: &C, x: usize) -> usize
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let (c1, c2) = (child1(x), child2(x));
    debug_assert!(c2 < seq.len());
    let ch = if cmp.compares_gt(seq.at(c1), seq.at(c2)) { c1 } else { c2 };
    compare_swap(seq, cmp, x, ch).0
}

/// Sifts the item at `x` down through the nodes at or below `last`, all of
/// which must have two children. Returns `true` if the item moved.
///
/// The item is never compared against a lone child; callers deal with
/// that pair separately.
pub(crate) fn sift_down_full<S, C>(seq: &mut S, cmp: &C, x: usize, last: usize) -> bool
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let mut pos = x;
    while pos <= last {
        let next = compare_swap_with_children(seq, cmp, pos);
        if next == pos { break; }
        pos = next;
    }
    pos != x
}

/// Moves the item at `x` towards the root for as long as it compares
/// greater than its parent.
///
/// Returns `true` if the item moved. If the heap property held everywhere
/// except between `x` and its ancestors, it holds everywhere afterwards.
///
/// # Panics
///
/// Panics if `x` is out of range.
pub fn sift_up<S, C>(seq: &mut S, cmp: &C, x: usize) -> bool
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let mut pos = x;
    while pos > 0 {
        let (_, next) = compare_swap(seq, cmp, parent(pos), pos);
        if next == pos { break; }
        pos = next;
    }
    pos != x
}

/// Moves the item at `x` towards the leaves, swapping it with the greater
/// of its children, until it compares greater than or equal to them.
///
/// Returns `true` if the item moved. The subtrees below `x` must already
/// be valid heaps.
///
/// # Panics
///
/// Panics if `x` is out of range.
pub fn sift_down<S, C>(seq: &mut S, cmp: &C, x: usize) -> bool
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let len = seq.len();
    let mut pos = x;
    if let Some(last) = last_full_parent(len) {
        while pos <= last {
            let next = compare_swap_with_children(seq, cmp, pos);
            if next == pos { return pos != x; }
            pos = next;
        }
    }
    // at most one child left
    let ch = child1(pos);
    if ch < len {
        pos = compare_swap(seq, cmp, pos, ch).0;
    }
    pos != x
}
