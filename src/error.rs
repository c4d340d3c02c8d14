// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Returned by [`pop_max`](crate::pop_max) when the sequence holds no items.
///
/// The sequence is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot pop from an empty heap")]
pub struct EmptyHeap;
