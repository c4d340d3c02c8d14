// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bulk insertion into an existing heap.
//!
//! Appending `k` items to a heap of `n` items and rebuilding it costs
//! `O(n + k)`. Only the nodes that gained new descendants can be out of
//! order though, so `extend` restores the heap with `O(k + log² n)`
//! comparisons:
//!
//! 1. Sweep the pivots that are roots of subtrees made purely of new items,
//!    exactly like `heapify` does.
//! 2. Sweep the old nodes with new children. Whenever one of them moves,
//!    its parent may now compare less than it, so the parent goes into the
//!    frontier.
//! 3. Process the frontier one tree level at a time, deepest level first.
//!    A node that moves puts its parent into the next level. Siblings share
//!    a parent, so the levels thin out on the way up and the walk ends
//!    after at most `log n` of them.
//! 4. Sift up the lone child at the end of an even-length sequence, which
//!    none of the above compares.

use std::collections::BTreeSet;

use compare::Compare;

use crate::heap::heapify;
use crate::index::{last_full_parent, level_start, parent};
use crate::sequence::Sequence;
use crate::sift::{sift_down_full, sift_up};

/// Appends `items` to the heap `seq` and restores the heap property.
///
/// The first `seq.len()` items must form a heap on entry. If `seq` is empty
/// this is a plain `heapify` of the new items.
pub fn extend<S, C, I>(seq: &mut S, cmp: &C, items: I)
    where S: Sequence + ?Sized, C: Compare<S::Item>, I: IntoIterator<Item = S::Item>
{
    let initial = seq.len();
    for item in items {
        seq.push(item);
    }
    let len = seq.len();
    if len == initial { return; }
    if initial == 0 {
        heapify(seq, cmp);
        return;
    }

    if let Some(last) = last_full_parent(len) {
        for pivot in (initial..=last).rev() {
            sift_down_full(seq, cmp, pivot, last);
        }

        // Old nodes at or above `first` may have new children. Their
        // ancestors below `first` only need a look if a child moved.
        let first = parent(initial - 1);
        let mut frontier = BTreeSet::new();
        for pivot in (first..=last.min(initial - 1)).rev() {
            if sift_down_full(seq, cmp, pivot, last) && pivot > 0 && parent(pivot) < first {
                frontier.insert(parent(pivot));
            }
        }

        while let Some(&deepest) = frontier.iter().next_back() {
            let level = frontier.split_off(&level_start(deepest));
            for pivot in level.into_iter().rev() {
                if sift_down_full(seq, cmp, pivot, last) && pivot > 0 {
                    frontier.insert(parent(pivot));
                }
            }
        }
    }

    if len % 2 == 0 {
        sift_up(seq, cmp, len - 1);
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use compare::natural;
    use rand::{thread_rng, Rng};

    use crate::heap::{heapify, is_heap};
    use super::extend;

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort();
        v
    }

    #[test]
    fn test_extend_empty_batch() {
        let mut v = vec![9, 4, 8];
        extend(&mut v, &natural(), vec![]);
        assert_eq!(v, [9, 4, 8]);

        let mut v = Vec::<u32>::new();
        extend(&mut v, &natural(), vec![]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_extend_from_empty() {
        let mut v = vec![];
        extend(&mut v, &natural(), vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert!(is_heap(&v, &natural()));
        assert_eq!(sorted(v), [1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_extend_small() {
        let mut v = vec![1];
        extend(&mut v, &natural(), vec![2]);
        assert_eq!(v, [2, 1]);

        let mut v = vec![2, 1];
        extend(&mut v, &natural(), vec![3, 4]);
        assert!(is_heap(&v, &natural()));
        assert_eq!(v[0], 4);
    }

    #[test]
    fn fuzz_extend() {
        let mut rng = thread_rng();
        for _ in 0..500 {
            let mut v: Vec<u32> = (0..rng.gen_range(0, 150)).map(|_| rng.gen_range(0, 50)).collect();
            let batch: Vec<u32> = (0..rng.gen_range(0, 150)).map(|_| rng.gen_range(0, 50)).collect();
            heapify(&mut v, &natural());

            let mut expected = v.clone();
            expected.extend(batch.iter().cloned());

            extend(&mut v, &natural(), batch);
            assert!(is_heap(&v, &natural()));
            assert_eq!(sorted(v), sorted(expected));
        }
    }

    #[test]
    fn test_extend_beats_rebuild() {
        // Descending order is a valid heap; the batch is greater than
        // everything already in it.
        let old: Vec<u32> = (0..1023).rev().collect();
        let batch: Vec<u32> = (1023..1031).collect();

        let count = Cell::new(0);
        let cmp = |a: &u32, b: &u32| { count.set(count.get() + 1); a.cmp(b) };

        let mut extended = old.clone();
        extend(&mut extended, &cmp, batch.iter().cloned());
        let extend_cost = count.get();

        count.set(0);
        let mut rebuilt = old;
        rebuilt.extend(batch);
        heapify(&mut rebuilt, &cmp);
        let rebuild_cost = count.get();

        assert!(is_heap(&extended, &natural()));
        assert_eq!(extended[0], 1030);
        assert!(extend_cost * 4 < rebuild_cost, "{} vs {}", extend_cost, rebuild_cost);
    }

    #[test]
    fn test_extend_single_item_is_logarithmic() {
        let old: Vec<u32> = (0..1023).rev().collect();
        let count = Cell::new(0);
        let cmp = |a: &u32, b: &u32| { count.set(count.get() + 1); a.cmp(b) };

        let mut v = old;
        extend(&mut v, &cmp, Some(5000));
        assert_eq!(v[0], 5000);
        assert!(count.get() <= 2 * 11, "{}", count.get());
    }
}
