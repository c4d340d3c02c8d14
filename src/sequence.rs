// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::VecDeque;
use std::mem;

/// A random-access, growable sequence the heap functions operate on.
///
/// Only the back of the sequence grows or shrinks; everything else is
/// done through indices. Indices passed to `at`, `set` and `swap` must be
/// in range. The provided implementations panic otherwise.
pub trait Sequence {
    /// The type of the stored items.
    type Item;

    /// Returns the number of items in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no items.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns a reference to the item at `index`.
    fn at(&self, index: usize) -> &Self::Item;

    /// Stores `item` at `index` and returns the item previously stored there.
    fn set(&mut self, index: usize, item: Self::Item) -> Self::Item;

    /// Exchanges the items at `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Appends an item to the back.
    fn push(&mut self, item: Self::Item);

    /// Removes the last item and returns it, or `None` if the sequence is empty.
    fn pop(&mut self) -> Option<Self::Item>;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline] fn len(&self) -> usize { Vec::len(self) }
    #[inline] fn at(&self, index: usize) -> &T { &self[index] }
    #[inline] fn set(&mut self, index: usize, item: T) -> T { mem::replace(&mut self[index], item) }
    #[inline] fn swap(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b) }
    #[inline] fn push(&mut self, item: T) { Vec::push(self, item) }
    #[inline] fn pop(&mut self) -> Option<T> { Vec::pop(self) }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline] fn len(&self) -> usize { VecDeque::len(self) }
    #[inline] fn at(&self, index: usize) -> &T { &self[index] }
    #[inline] fn set(&mut self, index: usize, item: T) -> T { mem::replace(&mut self[index], item) }
    #[inline] fn swap(&mut self, a: usize, b: usize) { VecDeque::swap(self, a, b) }
    #[inline] fn push(&mut self, item: T) { self.push_back(item) }
    #[inline] fn pop(&mut self) -> Option<T> { self.pop_back() }
}
