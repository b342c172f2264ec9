// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, hash::Hash};

use crate::window::{Cursor, LastSeen, Window};

/// A sliding window that is fed one element at a time.
///
/// This is useful when the sequence is not available as a slice, e.g., when it arrives in chunks.
/// Feeding a sequence into a fresh `Scanner` finds the same window as the one-shot functions of
/// this crate.
///
/// # Examples
///
/// ```
/// use uniqwin::Scanner;
///
/// let mut scanner = Scanner::new();
/// for c in "pwwkew".chars() {
///     scanner.push(c);
/// }
///
/// assert_eq!(scanner.longest().len(), 3);
/// assert_eq!(scanner.current().range(), 3..6);
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<K> {
    last_seen: HashMap<K, usize>,
    cursor: Cursor,
}

impl<K> Scanner<K>
where
    K: Eq + Hash,
{
    /// Creates an empty `Scanner`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_seen: HashMap::new(),
            cursor: Cursor::new(),
        }
    }

    /// Appends `key` to the scanned sequence.
    ///
    /// Returns the length of the longest run without repeats that ends at `key`.
    pub fn push(&mut self, key: K) -> usize {
        let previous = self.last_seen.replace(key, self.cursor.next_index());

        self.cursor.advance(previous)
    }

    /// Returns the run without repeats that ends at the most recently pushed element.
    #[must_use]
    pub const fn current(&self) -> Window {
        self.cursor.current()
    }

    /// Returns the leftmost longest run without repeats seen so far.
    #[must_use]
    pub const fn longest(&self) -> Window {
        self.cursor.longest()
    }

    /// Returns the number of elements pushed since creation or the last [`reset()`](Self::reset).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor.next_index()
    }

    /// Forgets every pushed element, keeping allocated capacity.
    pub fn reset(&mut self) {
        self.last_seen.clear();
        self.cursor = Cursor::new();
    }
}

impl<K> Default for Scanner<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Extend<K> for Scanner<K>
where
    K: Eq + Hash,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in iter {
            self.push(key);
        }
    }
}
