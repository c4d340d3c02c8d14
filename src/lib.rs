// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Binary max-heap algorithms over any resizable sequence.
//!
//! The free functions work on anything implementing [`Sequence`] (`Vec` and
//! `VecDeque` out of the box) and take the comparator on every call, so the
//! caller keeps full ownership of the storage. [`BinaryHeap`] bundles a
//! `Vec` with a comparator for the common case.
//!
//! Unlike `std`'s [`BinaryHeap`][bh], items are ordered by any
//! [`Compare`](compare::Compare) implementation, including closures, and a
//! batch of `k` items can be merged into a heap of `n` items with
//! `O(k + log² n)` comparisons rather than `O(n + k)`.
//!
//! Insertion is `O(log n)`. Popping the greatest item is `O(log n)`. Retrieving it is `O(1)`.
//! Searching for an item is `O(n)`.
//!
//! ```
//! use binary_heap_ops::{heapify, pop_max};
//! use compare::natural;
//!
//! let mut v = vec![5, 3, 8, 1, 9, 2];
//! heapify(&mut v, &natural());
//! assert_eq!(pop_max(&mut v, &natural()), Ok(9));
//! assert_eq!(pop_max(&mut v, &natural()), Ok(8));
//! ```
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

use std::fmt::{self, Debug};
use std::iter;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::vec;

use compare::{Compare, Natural, natural};

mod error;
mod extend;
mod heap;
mod index;
mod sequence;
mod sift;

pub use error::EmptyHeap;
pub use extend::extend;
pub use heap::{find_eq_item, heapify, insert, is_heap, pop_max, replace_at_index, replace_item};
pub use sequence::Sequence;
pub use sift::{sift_down, sift_up};

/// A priority queue implemented with a binary max-heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct BinaryHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    #[inline]
    fn default() -> BinaryHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap_ops::BinaryHeap;
    ///
    /// let heap = BinaryHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> BinaryHeap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap_ops::BinaryHeap;
    ///
    /// let heap = BinaryHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> BinaryHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap_ops::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.peek(), Some(&6));
    /// ```
    fn from(vec: Vec<T>) -> BinaryHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap_ops::BinaryHeap;
    ///
    /// // a min-heap
    /// let mut heap = BinaryHeap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// heap.extend(vec![3, 1, 2]);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn with_comparator(cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: vec![], cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// This takes `O(n)` time.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> BinaryHeap<T, C> {
        heapify(&mut vec, &cmp);
        let heap = BinaryHeap { data: vec, cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a reference to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a guard giving mutable access to the greatest item in the heap.
    ///
    /// The heap is repaired when the guard is dropped. Returns `None` if the
    /// heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap_ops::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from(vec![2, 1, 3]);
    /// *heap.peek_mut().unwrap() = 0;
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    pub fn peek_mut(&mut self) -> Option<PeekMut<T, C>> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            None
        } else {
            Some(PeekMut { heap: self, sifted: false })
        }
    }

    /// Returns the index of an item comparing equal to `item` in the order
    /// exposed by [`iter`](#method.iter), or `None` if there is none.
    ///
    /// This takes `O(n)` time in the worst case.
    pub fn position(&self, item: &T) -> Option<usize> {
        find_eq_item(&self.data, &self.cmp, item)
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    ///
    /// Note that the allocator may give the heap more space than it
    /// requests. Therefore capacity can not be relied upon to be precisely
    /// minimal. Prefer `reserve` if future insertions are expected.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    ///
    /// The heap may reserve more space to avoid frequent reallocations.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    /// Removes the greatest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let max = pop_max(&mut self.data, &self.cmp).ok();
        debug_assert!(self.is_valid());
        max
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        insert(&mut self.data, &self.cmp, item);
        debug_assert!(self.is_valid());
    }

    /// Replaces the item at `index` (as exposed by [`iter`](#method.iter))
    /// and returns the old one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, item: T) -> T {
        debug_assert!(self.is_valid());
        let old = replace_at_index(&mut self.data, &self.cmp, index, item);
        debug_assert!(self.is_valid());
        old
    }

    /// Replaces an item comparing equal to `search` with `item` and returns
    /// the replaced one.
    ///
    /// Returns `None`, leaving the heap untouched, if no item compares equal
    /// to `search`.
    pub fn replace(&mut self, search: &T, item: T) -> Option<T> {
        debug_assert!(self.is_valid());
        let old = replace_item(&mut self.data, &self.cmp, search, item);
        debug_assert!(self.is_valid());
        old
    }

    /// Consumes the heap and returns its items as a vector in heap order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.data.len());
        while let Ok(max) = pop_max(&mut self.data, &self.cmp) {
            vec.push(max);
        }
        vec.reverse();
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in arbitrary order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    fn is_valid(&self) -> bool {
        is_heap(&self.data, &self.cmp)
    }
}

impl<T: Debug, C: Compare<T>> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, C> {
        BinaryHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        debug_assert!(self.is_valid());
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        extend(&mut self.data, &self.cmp, iter);
        debug_assert!(self.is_valid());
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// An iterator over a `BinaryHeap` in arbitrary order.
///
/// Acquire through [`BinaryHeap::iter`](struct.BinaryHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `BinaryHeap` in arbitrary order.
///
/// Acquire through [`IntoIterator::into_iter`](
/// https://doc.rust-lang.org/stable/std/iter/trait.IntoIterator.html#tymethod.into_iter).
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `BinaryHeap` in arbitrary order.
///
/// Acquire through [`BinaryHeap::drain`](struct.BinaryHeap.html#method.drain).
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

/// Mutable access to the greatest item of a `BinaryHeap`.
///
/// Acquire through [`BinaryHeap::peek_mut`](struct.BinaryHeap.html#method.peek_mut).
pub struct PeekMut<'a, T: 'a, C: 'a + Compare<T> = Natural<T>> {
    heap: &'a mut BinaryHeap<T, C>,
    sifted: bool,
}

impl<'a, T: 'a, C: Compare<T>> Drop for PeekMut<'a, T, C> {
    fn drop(&mut self) {
        // the root may have shrunk below one of its children
        if !self.sifted {
            sift_down(&mut self.heap.data, &self.heap.cmp, 0);
        }
    }
}

impl<'a, T: 'a, C: Compare<T>> Deref for PeekMut<'a, T, C> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.heap.data[0]
    }
}

impl<'a, T: 'a, C: Compare<T>> DerefMut for PeekMut<'a, T, C> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.heap.data[0]
    }
}

impl<'a, T: 'a, C: Compare<T>> PeekMut<'a, T, C> {
    /// Removes the peeked item from the heap and returns it.
    pub fn pop(mut self) -> T {
        let value = self.heap.data.swap_remove(0);
        if !self.heap.data.is_empty() {
            sift_down(&mut self.heap.data, &self.heap.cmp, 0);
        }
        self.sifted = true;
        value
    }
}


#[cfg(test)]
mod test {
    use rand::{thread_rng, Rng};
    use super::BinaryHeap;

    #[test]
    fn fuzz_push_into_sorted_vec() {
        let mut rng = thread_rng();
        let mut tmp = Vec::with_capacity(100);
        for _ in 0..100 {
            tmp.clear();
            let mut heap = BinaryHeap::from(tmp);
            for _ in 0..100 {
                heap.push(rng.next_u32());
            }
            tmp = heap.into_sorted_vec();
            for pair in tmp.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn fuzz_pop() {
        let mut rng = thread_rng();
        let mut tmp = Vec::with_capacity(100);
        for _ in 0..100 {
            tmp.clear();
            let mut heap = BinaryHeap::from(tmp);
            for _ in 0..100 {
                heap.push(rng.next_u32());
            }
            let mut tmpx: Option<u32> = None;
            loop {
                let tmpy = heap.pop();
                match (tmpx, tmpy) {
                    (_, None) => break,
                    (Some(x), Some(y)) => assert!(x >= y),
                    _ => ()
                }
                tmpx = tmpy;
            }
            tmp = heap.into_vec();
        }
    }

    #[test]
    fn fuzz_extend_then_pop() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut heap: BinaryHeap<u32> = (0..rng.gen_range(0, 50)).map(|_| rng.gen_range(0, 30)).collect();
            let batch: Vec<u32> = (0..rng.gen_range(0, 50)).map(|_| rng.gen_range(0, 30)).collect();
            let mut expected: Vec<u32> = heap.iter().cloned().chain(batch.iter().cloned()).collect();
            expected.sort();

            heap.extend(&batch);
            assert_eq!(heap.len(), expected.len());
            assert_eq!(heap.into_sorted_vec(), expected);
        }
    }

    #[test]
    fn test_from_vec() {
        let heap = BinaryHeap::<i32>::from(vec![]);
        assert_eq!(heap.peek(), None);

        let heap = BinaryHeap::from(vec![2]);
        assert_eq!(heap.peek(), Some(&2));

        let heap = BinaryHeap::from(vec![2, 1]);
        assert_eq!(heap.peek(), Some(&2));

        let heap = BinaryHeap::from(vec![2, 1, 3]);
        assert_eq!(heap.peek(), Some(&3));
    }

    #[test]
    fn test_is_valid() {
        fn new(data: Vec<i32>) -> BinaryHeap<i32> {
            BinaryHeap { data, cmp: ::compare::natural() }
        }

        assert!(new(vec![]).is_valid());
        assert!(new(vec![1]).is_valid());
        assert!(new(vec![1, 1]).is_valid());
        assert!(new(vec![5, 1]).is_valid());
        assert!(new(vec![5, 1, 5]).is_valid());
        assert!(new(vec![5, 4, 3, 4, 1, 3]).is_valid());

        assert!(!new(vec![1, 2]).is_valid());
        assert!(!new(vec![1, 2, 3]).is_valid());
        assert!(!new(vec![5, 4, 3, 4, 1, 3, 4]).is_valid());
    }

    #[test]
    fn test_peek_mut() {
        let mut heap = BinaryHeap::<i32>::from(vec![2, 1, 3]);

        {
            let mut peek = heap.peek_mut().unwrap();
            *peek = 0;
        }

        assert_eq!(heap.peek(), Some(&2));
        let mut items: Vec<_> = heap.iter().cloned().collect();
        items.sort();
        assert_eq!(items, [0, 1, 2]);

        {
            heap.peek_mut().unwrap().pop();
        }

        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.len(), 2);

        let mut heap = BinaryHeap::<i32>::new();
        assert!(heap.peek_mut().is_none());
    }

    #[test]
    fn test_replace() {
        let mut heap = BinaryHeap::from(vec![5, 3, 8, 1, 9, 2]);
        assert_eq!(heap.replace(&9, 0), Some(9));
        assert_eq!(heap.peek(), Some(&8));
        assert_eq!(heap.replace(&9, 0), None);
        assert_eq!(heap.position(&9), None);

        let i = heap.position(&3).unwrap();
        assert_eq!(heap.replace_at(i, 10), 3);
        assert_eq!(heap.peek(), Some(&10));
        assert_eq!(heap.into_sorted_vec(), [0, 1, 2, 5, 8, 10]);
    }

    #[test]
    fn test_custom_comparator() {
        // by last digit
        let mut heap = BinaryHeap::with_capacity_and_comparator(4, |a: &u32, b: &u32| (a % 10).cmp(&(b % 10)));
        heap.extend(vec![1, 24, 13, 37]);
        assert_eq!(heap.pop(), Some(37));
        assert_eq!(heap.pop(), Some(24));
        assert_eq!(heap.len(), 2);
        assert_eq!(format!("{:?}", heap), "[13, 1]");
    }

    #[test]
    fn test_iterators() {
        let mut heap = BinaryHeap::from(vec![4, 7, 1]);
        let mut items: Vec<_> = heap.iter().cloned().collect();
        items.sort();
        assert_eq!(items, [1, 4, 7]);
        assert_eq!(heap.iter().len(), 3);

        let mut drained: Vec<_> = heap.drain().collect();
        drained.sort();
        assert_eq!(drained, [1, 4, 7]);
        assert!(heap.is_empty());

        heap.extend(vec![2, 9]);
        let mut owned: Vec<_> = heap.into_iter().collect();
        owned.sort();
        assert_eq!(owned, [2, 9]);
    }
}
