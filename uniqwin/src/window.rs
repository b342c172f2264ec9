// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, hash::Hash, ops::Range};

/// The number of distinct byte values
const ALPHABET_SIZE: usize = 256;

/// The representation of a byte that has not been seen yet
const UNSEEN: usize = usize::MAX;

/// A half-open range `[start, end)` of element indices.
///
/// Every element inside a `Window` returned by this crate is distinct from every other element in
/// it.
///
/// # Examples
///
/// ```
/// let window = uniqwin::longest_unique_window(&[1, 2, 1, 3]);
///
/// assert_eq!(window.range(), 1..4);
/// assert_eq!(window.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Window {
    /// Index of the first element in the window
    pub start: usize,
    /// Index one past the last element in the window
    pub end: usize,
}

impl Window {
    /// Returns the number of elements in the window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the window contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the window as a [`Range`] suitable for slicing.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A mapping from an element to the index at which it was most recently seen.
pub(crate) trait LastSeen<K> {
    /// Records `index` as the last-seen index of `key`, returning the previous one if any.
    fn replace(&mut self, key: K, index: usize) -> Option<usize>;
}

impl<K> LastSeen<K> for HashMap<K, usize>
where
    K: Eq + Hash,
{
    fn replace(&mut self, key: K, index: usize) -> Option<usize> {
        self.insert(key, index)
    }
}

/// A last-seen table for bytes, indexed directly by byte value.
pub(crate) struct ByteTable([usize; ALPHABET_SIZE]);

impl ByteTable {
    pub(crate) const fn new() -> Self {
        Self([UNSEEN; ALPHABET_SIZE])
    }
}

impl LastSeen<u8> for ByteTable {
    fn replace(&mut self, key: u8, index: usize) -> Option<usize> {
        let previous = std::mem::replace(&mut self.0[usize::from(key)], index);

        (previous != UNSEEN).then_some(previous)
    }
}

/// The cursors of a sliding window over a sequence of unique elements.
///
/// The cursor does not know about elements. Callers look up and record the last-seen index of the
/// next element at [`Cursor::next_index()`] and hand the previous index to [`Cursor::advance()`].
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Cursor {
    start: usize,
    end: usize,
    longest: Window,
}

impl Cursor {
    pub(crate) const fn new() -> Self {
        Self {
            start: 0,
            end: 0,
            longest: Window { start: 0, end: 0 },
        }
    }

    /// The index the next element will occupy.
    pub(crate) const fn next_index(&self) -> usize {
        self.end
    }

    /// Extends the window by one element whose previous occurrence was at `previous`.
    ///
    /// Returns the length of the window ending at the new element.
    pub(crate) fn advance(&mut self, previous: Option<usize>) -> usize {
        if let Some(previous) = previous {
            debug_assert!(previous < self.end, "last-seen index must precede the window end");

            // Occurrences before the start are already outside the window
            if previous >= self.start {
                self.start = previous + 1;
            }
        }
        self.end += 1;

        let current = self.current();
        // Strictly greater keeps the leftmost of equally long windows
        if current.len() > self.longest.len() {
            self.longest = current;
        }

        current.len()
    }

    pub(crate) const fn current(&self) -> Window {
        Window {
            start: self.start,
            end: self.end,
        }
    }

    pub(crate) const fn longest(&self) -> Window {
        self.longest
    }
}

/// Finds the leftmost longest window of `keys` containing no repeated key.
///
/// `last_seen` must be empty when this function is called.
///
/// This operation is *O*(*n*) lookups into `last_seen`.
pub(crate) fn scan<K, I, M>(keys: I, last_seen: &mut M) -> Window
where
    I: IntoIterator<Item = K>,
    M: LastSeen<K>,
{
    let mut cursor = Cursor::new();

    for key in keys {
        let previous = last_seen.replace(key, cursor.next_index());
        cursor.advance(previous);
    }

    cursor.longest()
}
