// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Whole-sequence heap operations.
//!
//! A sequence is a heap with respect to a comparator when every item
//! compares less than or equal to its parent. Each mutating function
//! expects its input to be a heap (except `heapify`) and leaves a heap
//! behind.

use std::cmp::Ordering;

use compare::Compare;

use crate::error::EmptyHeap;
use crate::index::{child1, last_full_parent, parent};
use crate::sequence::Sequence;
use crate::sift::{sift_down, sift_down_full, sift_up};

/// Reorders the items of `seq` into a heap in `O(n)` time.
pub fn heapify<S, C>(seq: &mut S, cmp: &C)
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let len = seq.len();
    if let Some(last) = last_full_parent(len) {
        for pivot in (0..=last).rev() {
            sift_down_full(seq, cmp, pivot, last);
        }
    }
    // the final item of an even-length sequence is a lone child that the
    // sweep above never looked at
    if len > 0 && len % 2 == 0 {
        sift_up(seq, cmp, len - 1);
    }
}

/// Checks whether every item of `seq` compares less than or equal to its parent.
pub fn is_heap<S, C>(seq: &S, cmp: &C) -> bool
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    (1..seq.len()).rev().all(|i| cmp.compares_ge(seq.at(parent(i)), seq.at(i)))
}

/// Adds `item` to the heap.
pub fn insert<S, C>(seq: &mut S, cmp: &C, item: S::Item)
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    seq.push(item);
    let last = seq.len() - 1;
    sift_up(seq, cmp, last);
}

/// Removes the greatest item from the heap and returns it.
///
/// # Errors
///
/// Returns `EmptyHeap` without touching `seq` if it holds no items.
pub fn pop_max<S, C>(seq: &mut S, cmp: &C) -> Result<S::Item, EmptyHeap>
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let last = seq.pop().ok_or(EmptyHeap)?;
    if seq.is_empty() {
        return Ok(last);
    }
    let max = seq.set(0, last);
    sift_down(seq, cmp, 0);
    Ok(max)
}

/// Returns the index of an item that compares equal to `item`, or `None`
/// if there is none.
///
/// Subtrees whose root compares less than `item` are skipped, as nothing
/// below them can compare equal. This saves comparisons on average but the
/// worst case is still a visit of every item.
pub fn find_eq_item<S, C>(seq: &S, cmp: &C, item: &S::Item) -> Option<usize>
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let len = seq.len();
    if len == 0 { return None; }

    // Depth-first walk over the implicit tree; moving to a sibling or back
    // up to a parent needs no stack.
    let mut x = 0;
    loop {
        match cmp.compare(seq.at(x), item) {
            Ordering::Equal => return Some(x),
            Ordering::Greater if child1(x) < len => {
                x = child1(x);
                continue;
            }
            _ => {}
        }
        loop {
            if x == 0 { return None; }
            if x % 2 == 1 && x + 1 < len {
                x += 1;
                break;
            }
            x = parent(x);
        }
    }
}

/// Replaces the item at `index` with `item` and returns the old one.
///
/// The new item is sifted up or, if it didn't move, down. Only one of the
/// two can apply to a heap with a single changed slot.
///
/// # Panics
///
/// `index` must be in range. The `Sequence` implementations of this crate
/// panic otherwise.
pub fn replace_at_index<S, C>(seq: &mut S, cmp: &C, index: usize, item: S::Item) -> S::Item
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    debug_assert!(index < seq.len());
    let old = seq.set(index, item);
    if !sift_up(seq, cmp, index) {
        sift_down(seq, cmp, index);
    }
    old
}

/// Replaces an item that compares equal to `search` with `item`.
///
/// Returns the replaced item, or `None` if no item compares equal to
/// `search`, in which case `seq` is unchanged. This is `O(n)` because of
/// the search.
pub fn replace_item<S, C>(seq: &mut S, cmp: &C, search: &S::Item, item: S::Item)
    -> Option<S::Item>
    where S: Sequence + ?Sized, C: Compare<S::Item>
{
    let index = find_eq_item(seq, cmp, search)?;
    Some(replace_at_index(seq, cmp, index, item))
}
